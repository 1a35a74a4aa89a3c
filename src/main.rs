//! Wordle Judge - CLI
//!
//! Play a word-guessing game in the terminal, score single guesses, or audit the scorer.

use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordle_judge::{
    commands::{AuditConfig, PlayConfig, run_audit, run_play, score},
    game::{Dictionary, MAX_ATTEMPTS},
    output::{print_audit_report, print_score_report},
    wordlists::{ANSWERS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_judge",
    about = "Word-guessing game with exact duplicate-letter scoring",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default), 'answers' (secrets only), or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play {
        /// Use this secret word instead of a random one
        #[arg(short, long)]
        secret: Option<String>,

        /// Number of guesses allowed
        #[arg(short = 'n', long, default_value_t = MAX_ATTEMPTS)]
        max_attempts: usize,

        /// Accept any letters as a guess, not just dictionary words
        #[arg(long)]
        no_validate: bool,
    },

    /// Score one guess against a secret word
    Score {
        /// The guess
        guess: String,

        /// The secret word
        secret: String,
    },

    /// Check the scoring rules over every guess/secret pair in the word list
    Audit {
        /// Limit number of secrets to check
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Load the dictionary based on the -w flag
///
/// - "all": every allowed guess, secrets from the answer list
/// - "answers": the answer list only, for both
/// - "<path>": one word per line, used for both
fn load_dictionary(wordlist_mode: &str) -> Result<Dictionary> {
    use wordle_judge::wordlists::loader::load_from_file;

    match wordlist_mode {
        "all" => Ok(Dictionary::embedded()),
        "answers" => {
            let answer_words = words_from_slice(ANSWERS);
            Ok(Dictionary::new(answer_words.clone(), answer_words))
        }
        path => {
            let custom_words = load_from_file(path)
                .with_context(|| format!("failed to load word list from {path}"))?;
            ensure!(!custom_words.is_empty(), "{path} has no 5-letter words");
            Ok(Dictionary::new(custom_words.clone(), custom_words))
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.wordlist)?;
    info!(
        wordlist = %cli.wordlist,
        allowed = dictionary.allowed().len(),
        answers = dictionary.answers().len(),
        "dictionary loaded"
    );

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        secret: None,
        max_attempts: MAX_ATTEMPTS,
        no_validate: false,
    });

    match command {
        Commands::Play {
            secret,
            max_attempts,
            no_validate,
        } => {
            let config = PlayConfig {
                secret,
                max_attempts,
                validate: !no_validate,
            };
            run_play(&config, &dictionary)
        }
        Commands::Score { guess, secret } => {
            let report = score(&guess, &secret).context("cannot score guess")?;
            print_score_report(&report);
            Ok(())
        }
        Commands::Audit { limit } => {
            println!(
                "🎯 Auditing {} guesses against {} secrets...",
                dictionary.allowed().len(),
                limit.map_or(dictionary.answers().len(), |n| n.min(dictionary.answers().len()))
            );
            let config = AuditConfig {
                limit,
                ..AuditConfig::default()
            };
            let report = run_audit(dictionary.allowed(), dictionary.answers(), config);
            print_audit_report(&report);
            ensure!(report.passed(), "audit found {} violations", report.violations.len());
            Ok(())
        }
    }
}
