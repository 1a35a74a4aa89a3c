//! Interactive game in the terminal
//!
//! Line-based play: type a guess, see it scored, until the word is found or attempts run out.

use crate::core::{WORD_LENGTH, Word};
use crate::game::{AcceptAll, Dictionary, Game, GameStatus, WordValidator};
use crate::output::{print_game_over, print_turn};
use anyhow::{Context, Result, anyhow};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::{debug, instrument};

/// Settings for an interactive session
#[derive(Debug, Clone)]
pub struct PlayConfig {
    /// Fixed secret word; picked at random from the answers when absent
    pub secret: Option<String>,
    pub max_attempts: usize,
    /// Only accept guesses from the dictionary
    pub validate: bool,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            secret: None,
            max_attempts: crate::game::MAX_ATTEMPTS,
            validate: true,
        }
    }
}

/// What the player asked for after a round
enum Next {
    Again,
    Quit,
}

/// Run interactive games on stdin/stdout until the player quits
///
/// # Errors
///
/// Returns an error if the secret word is invalid, the dictionary has no answers to pick
/// from, or reading input fails.
#[instrument(skip(dictionary))]
pub fn run_play(config: &PlayConfig, dictionary: &Dictionary) -> Result<()> {
    let fixed_secret = config
        .secret
        .as_deref()
        .map(|s| Word::new(s.trim()).with_context(|| format!("invalid secret word '{s}'")))
        .transpose()?;

    let validator: &dyn WordValidator = if config.validate {
        dictionary
    } else {
        &AcceptAll
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();

    print_intro(
        config.max_attempts,
        fixed_secret.as_ref().map_or(WORD_LENGTH, Word::len),
    );

    loop {
        let secret = match &fixed_secret {
            Some(word) => word.clone(),
            None => dictionary
                .random_answer(&mut rand::rng())
                .cloned()
                .ok_or_else(|| anyhow!("the word list has no answers to pick from"))?,
        };
        debug!("new round started");

        let game = Game::with_max_attempts(secret, validator, config.max_attempts)?;

        match play_round(game, &mut input)? {
            Next::Quit => break,
            Next::Again if fixed_secret.is_some() => break,
            Next::Again => println!("\n🔄 New game started!\n"),
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

fn play_round<V: WordValidator>(mut game: Game<V>, input: &mut impl BufRead) -> Result<Next> {
    while !game.is_over() {
        println!(
            "You have {} {} remaining.",
            game.attempts_remaining().to_string().bright_cyan().bold(),
            if game.attempts_remaining() == 1 {
                "guess"
            } else {
                "guesses"
            }
        );

        let Some(line) = prompt(input, "Guess")? else {
            return Ok(Next::Quit);
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => return Ok(Next::Quit),
            "new" | "n" => return Ok(Next::Again),
            _ => {}
        }

        match game.submit(&line) {
            Ok(turn) => print_turn(turn),
            Err(e) => println!("❌ {e}\n"),
        }
    }

    print_game_over(&game);

    if game.status() == GameStatus::Lost {
        debug!(secret = %game.secret(), "round lost");
    }

    match prompt(input, "Play again? (yes/no)")? {
        Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => Ok(Next::Again),
        _ => Ok(Next::Quit),
    }
}

fn print_intro(max_attempts: usize, word_length: usize) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Guess the Secret Word                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("{}\n", goal_line(max_attempts, word_length));
    println!("  - 🟩 the letter is in the right spot");
    println!("  - 🟨 the letter is in the word, somewhere else");
    println!("  - ⬜ the letter is not in the word (or not that many times)\n");
    println!("Commands: 'quit' to exit, 'new' for a new word\n");
}

fn goal_line(max_attempts: usize, word_length: usize) -> String {
    format!("You have {max_attempts} tries to find the {word_length}-letter word. After each guess:")
}

/// Read one trimmed line; `None` at end of input
fn prompt(input: &mut impl BufRead, label: &str) -> Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read from stdin")?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
