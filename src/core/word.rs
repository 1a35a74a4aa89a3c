//! Word representation
//!
//! A Word is a validated, uppercase-canonical sequence of ASCII letters. The game uses
//! 5-letter words, but scoring itself works for any positive length.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Length of every word in the game's dictionaries
pub const WORD_LENGTH: usize = 5;

/// Rejection reasons for inputs that cannot be scored
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("word must contain at least one letter")]
    Empty,

    #[error("'{character}' at position {position} is not a letter")]
    NonLetter { character: char, position: usize },

    #[error("guess has {candidate} letters but the secret word has {secret}")]
    LengthMismatch { candidate: usize, secret: usize },
}

/// A word of ASCII letters, stored uppercase
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Letters are canonicalized to uppercase, so `"crane"` and `"CrAnE"` are the same word.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the string is empty or contains anything other than
    /// ASCII letters (whitespace included).
    ///
    /// # Examples
    /// ```
    /// use wordle_judge::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, InvalidInput> {
        if text.is_empty() {
            return Err(InvalidInput::Empty);
        }

        if let Some((position, character)) = text
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_alphabetic())
        {
            return Err(InvalidInput::NonLetter {
                character,
                position,
            });
        }

        Ok(Self {
            text: text.to_ascii_uppercase(),
        })
    }

    /// Get the word as an uppercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; a Word has at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> u8 {
        self.letters()[position]
    }

    /// How many times a letter occurs; the letter is matched case-insensitively
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        let letter = letter.to_ascii_uppercase();
        self.letters().iter().filter(|&&l| l == letter).count()
    }
}

impl FromStr for Word {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "CRANE");
        assert_eq!(word.letters(), b"CRANE");
        assert_eq!(word.len(), 5);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_creation_lowercase_canonicalized() {
        assert_eq!(Word::new("crane").unwrap().text(), "CRANE");
        assert_eq!(Word::new("CrAnE").unwrap().text(), "CRANE");
    }

    #[test]
    fn word_any_positive_length() {
        assert_eq!(Word::new("a").unwrap().len(), 1);
        assert_eq!(Word::new("abcdefgh").unwrap().len(), 8);
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(InvalidInput::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(
            Word::new("cran3"),
            Err(InvalidInput::NonLetter {
                character: '3',
                position: 4
            })
        );
        assert_eq!(
            Word::new(" rane"),
            Err(InvalidInput::NonLetter {
                character: ' ',
                position: 0
            })
        );
        assert!(Word::new("cran!").is_err());
        assert!(Word::new("crâne").is_err()); // Non-ASCII letter
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.letter_at(0), b'C');
        assert_eq!(word.letter_at(2), b'A');
        assert_eq!(word.letter_at(4), b'E');
    }

    #[test]
    fn word_count_of() {
        let word = Word::new("speed").unwrap();
        assert_eq!(word.count_of(b'E'), 2);
        assert_eq!(word.count_of(b'e'), 2);
        assert_eq!(word.count_of(b'S'), 1);
        assert_eq!(word.count_of(b'Z'), 0);
    }

    #[test]
    fn word_parse_and_display() {
        let word: Word = "slate".parse().unwrap();
        assert_eq!(format!("{word}"), "SLATE");
        assert!("sl ate".parse::<Word>().is_err());
    }

    #[test]
    fn word_equality_ignores_case() {
        assert_eq!(Word::new("crane").unwrap(), Word::new("CRANE").unwrap());
        assert_ne!(Word::new("crane").unwrap(), Word::new("slate").unwrap());
    }

    #[test]
    fn invalid_input_messages() {
        let err = InvalidInput::LengthMismatch {
            candidate: 4,
            secret: 5,
        };
        assert_eq!(
            err.to_string(),
            "guess has 4 letters but the secret word has 5"
        );
        assert_eq!(
            Word::new("ab1").unwrap_err().to_string(),
            "'1' at position 2 is not a letter"
        );
    }
}
