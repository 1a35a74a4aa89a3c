//! Guess evaluation
//!
//! Scores a guess against the secret word with exact duplicate-letter handling:
//! a letter is never marked `Correct` or `Present` more times than it occurs in the secret.

use super::{GuessResult, InvalidInput, LetterClassification, Tally, Word};

/// Classify every letter of `candidate` against `secret`
///
/// # Algorithm
/// 1. Tally the letters of the secret word
/// 2. First pass: mark exact position matches `Correct`, spending one tally slot for that letter
/// 3. Second pass, left to right: mark remaining letters `Present` while their tally lasts,
///    otherwise `Absent`
///
/// Exact matches are resolved before any `Present` spends the budget, so a correctly placed
/// letter can never be starved by an earlier out-of-place copy of itself.
///
/// # Errors
/// Returns `InvalidInput::LengthMismatch` if the words differ in length.
///
/// # Examples
/// ```
/// use wordle_judge::core::{Word, evaluate};
///
/// let guess = Word::new("llama").unwrap();
/// let secret = Word::new("allow").unwrap();
/// let result = evaluate(&guess, &secret).unwrap();
///
/// // L(present) L(correct) A(present) M(absent) A(absent: the only A is taken)
/// assert_eq!(result.to_string(), "YGY--");
/// ```
pub fn evaluate(candidate: &Word, secret: &Word) -> Result<GuessResult, InvalidInput> {
    if candidate.len() != secret.len() {
        return Err(InvalidInput::LengthMismatch {
            candidate: candidate.len(),
            secret: secret.len(),
        });
    }

    let mut result = vec![LetterClassification::Absent; candidate.len()];
    let mut available = Tally::of(secret);

    // First pass: exact matches
    for ((slot, &guessed), &target) in result
        .iter_mut()
        .zip(candidate.letters())
        .zip(secret.letters())
    {
        if guessed == target {
            *slot = LetterClassification::Correct;
            available.take(guessed);
        }
    }

    // Second pass: out-of-place matches from what is left
    for (slot, &guessed) in result.iter_mut().zip(candidate.letters()) {
        if *slot != LetterClassification::Correct && available.take(guessed) {
            *slot = LetterClassification::Present;
        }
    }

    Ok(GuessResult::from_classifications(result))
}

/// Validate two raw strings and classify `candidate` against `secret`
///
/// # Errors
/// Returns `InvalidInput` if either string is not a word or their lengths differ.
///
/// # Examples
/// ```
/// use wordle_judge::core::evaluate_str;
///
/// let result = evaluate_str("robot", "ROBOT").unwrap();
/// assert!(result.is_win());
///
/// assert!(evaluate_str("robots", "robot").is_err());
/// ```
pub fn evaluate_str(candidate: &str, secret: &str) -> Result<GuessResult, InvalidInput> {
    evaluate(&Word::new(candidate)?, &Word::new(secret)?)
}
