//! A single game: one secret word, a bounded number of attempts

use super::WordValidator;
use crate::core::{GuessResult, InvalidInput, Word, evaluate};
use thiserror::Error;
use tracing::{debug, info, instrument};

/// Attempts a player gets by default
pub const MAX_ATTEMPTS: usize = 6;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Why a guess was not accepted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("the game is already over")]
    Finished,

    #[error("{0} is not in the word list")]
    NotInWordList(String),

    #[error(transparent)]
    Invalid(#[from] InvalidInput),

    #[error("a game needs at least one attempt")]
    NoAttempts,
}

/// One accepted guess and its score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub result: GuessResult,
}

/// Game state for a single secret word
#[derive(Debug)]
pub struct Game<V> {
    secret: Word,
    validator: V,
    max_attempts: usize,
    turns: Vec<Turn>,
    status: GameStatus,
}

impl<V: WordValidator> Game<V> {
    /// Start a game with the default `MAX_ATTEMPTS`
    #[must_use]
    pub fn new(secret: Word, validator: V) -> Self {
        Self {
            secret,
            validator,
            max_attempts: MAX_ATTEMPTS,
            turns: Vec::with_capacity(MAX_ATTEMPTS),
            status: GameStatus::InProgress,
        }
    }

    /// Start a game with a custom attempt limit
    ///
    /// # Errors
    /// Returns `GameError::NoAttempts` if `max_attempts` is zero.
    pub fn with_max_attempts(
        secret: Word,
        validator: V,
        max_attempts: usize,
    ) -> Result<Self, GameError> {
        if max_attempts == 0 {
            return Err(GameError::NoAttempts);
        }

        let mut game = Self::new(secret, validator);
        game.max_attempts = max_attempts;
        Ok(game)
    }

    /// Submit a guess
    ///
    /// Surrounding whitespace is ignored. Rejected guesses leave the game untouched.
    ///
    /// # Errors
    /// - `GameError::Finished` once the game is won or lost
    /// - `GameError::Invalid` for non-letters or a length different from the secret
    /// - `GameError::NotInWordList` if the validator refuses the word. The secret itself is
    ///   always accepted, so a game stays winnable whatever the validator knows.
    ///
    /// # Examples
    /// ```
    /// use wordle_judge::core::Word;
    /// use wordle_judge::game::{AcceptAll, Game, GameStatus};
    ///
    /// let mut game = Game::new(Word::new("robot").unwrap(), AcceptAll);
    /// let turn = game.submit("floor").unwrap();
    /// assert_eq!(turn.result.to_string(), "--YGY");
    ///
    /// game.submit("robot").unwrap();
    /// assert_eq!(game.status(), GameStatus::Won);
    /// ```
    #[instrument(skip(self), fields(attempt = self.turns.len() + 1))]
    pub fn submit(&mut self, input: &str) -> Result<&Turn, GameError> {
        if self.is_over() {
            return Err(GameError::Finished);
        }

        let guess = Word::new(input.trim())?;
        if guess.len() != self.secret.len() {
            return Err(InvalidInput::LengthMismatch {
                candidate: guess.len(),
                secret: self.secret.len(),
            }
            .into());
        }

        if guess != self.secret && !self.validator.is_valid(&guess) {
            debug!(%guess, "guess rejected by validator");
            return Err(GameError::NotInWordList(guess.to_string()));
        }

        let result = evaluate(&guess, &self.secret)?;
        debug!(%guess, %result, "guess scored");

        if result.is_win() {
            self.status = GameStatus::Won;
            info!(attempts = self.turns.len() + 1, "game won");
        } else if self.turns.len() + 1 == self.max_attempts {
            self.status = GameStatus::Lost;
            info!(secret = %self.secret, "game lost");
        }

        self.turns.push(Turn { guess, result });
        Ok(&self.turns[self.turns.len() - 1])
    }

    /// Current status
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the game is won or lost
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Accepted guesses so far, oldest first
    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Attempts left before the game is lost
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        if self.is_over() {
            0
        } else {
            self.max_attempts - self.turns.len()
        }
    }

    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// The secret word, e.g. to reveal after a loss
    #[must_use]
    pub fn secret(&self) -> &Word {
        &self.secret
    }
}
