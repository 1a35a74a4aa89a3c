//! Score a single guess
//!
//! Evaluates one guess against a given secret word.

use crate::core::{GuessResult, InvalidInput, Word, evaluate};
use tracing::instrument;

/// Result of scoring a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReport {
    pub guess: Word,
    pub secret: Word,
    pub result: GuessResult,
}

impl ScoreReport {
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.result.is_win()
    }
}

/// Score `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either word is invalid or their lengths differ.
#[instrument]
pub fn score(guess: &str, secret: &str) -> Result<ScoreReport, InvalidInput> {
    let guess = Word::new(guess.trim())?;
    let secret = Word::new(secret.trim())?;
    let result = evaluate(&guess, &secret)?;

    Ok(ScoreReport {
        guess,
        secret,
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_reports_words_and_result() {
        let report = score("paper", "apple").unwrap();
        assert_eq!(report.guess.text(), "PAPER");
        assert_eq!(report.secret.text(), "APPLE");
        assert_eq!(report.result.to_string(), "YYGY-");
        assert!(!report.is_win());
    }

    #[test]
    fn score_win() {
        assert!(score("robot", "ROBOT").unwrap().is_win());
    }

    #[test]
    fn score_trims_arguments() {
        assert!(score(" robot ", "robot\n").unwrap().is_win());
    }

    #[test]
    fn score_invalid_input() {
        assert!(matches!(
            score("robot", "robots"),
            Err(InvalidInput::LengthMismatch { .. })
        ));
        assert!(matches!(
            score("r-bot", "robot"),
            Err(InvalidInput::NonLetter { .. })
        ));
    }
}
