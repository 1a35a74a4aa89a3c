//! Per-letter feedback and the scored result of a guess

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Outcome for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterClassification {
    /// Right letter, right position
    Correct,
    /// Letter is in the secret word at another position
    Present,
    /// Letter is not in the secret word, or all its occurrences are already matched
    Absent,
}

impl LetterClassification {
    /// Emoji tile for this outcome
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single-character code: `G`, `Y` or `-`
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    /// Parse a feedback character
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Error parsing a feedback string such as `"GY-GY"`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFeedbackError {
    #[error("feedback is empty")]
    Empty,

    #[error("'{symbol}' at position {position} is not one of G, Y or -")]
    InvalidSymbol { symbol: char, position: usize },
}

/// Classification of every letter of a guess, in guess order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessResult(Vec<LetterClassification>);

impl GuessResult {
    pub(crate) fn from_classifications(classifications: Vec<LetterClassification>) -> Self {
        Self(classifications)
    }

    /// Per-position classifications
    #[inline]
    #[must_use]
    pub fn classifications(&self) -> &[LetterClassification] {
        &self.0
    }

    /// Number of scored positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True only for a result with no positions, which scoring never produces
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A guess wins when every letter is `Correct`
    #[must_use]
    pub fn is_win(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&c| c == LetterClassification::Correct)
    }

    /// Count positions with the given classification
    #[must_use]
    pub fn count(&self, classification: LetterClassification) -> usize {
        self.0.iter().filter(|&&c| c == classification).count()
    }

    /// Render as an emoji row like "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_judge::core::GuessResult;
    ///
    /// let result: GuessResult = "GY-GY".parse().unwrap();
    /// assert_eq!(result.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}

impl FromStr for GuessResult {
    type Err = ParseFeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseFeedbackError::Empty);
        }

        s.chars()
            .enumerate()
            .map(|(position, symbol)| {
                LetterClassification::from_symbol(symbol)
                    .ok_or(ParseFeedbackError::InvalidSymbol { symbol, position })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for classification in &self.0 {
            write!(f, "{}", classification.symbol())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterClassification::{Absent, Correct, Present};

    #[test]
    fn parse_feedback_forms_agree() {
        let p1: GuessResult = "GYG--".parse().unwrap();
        let p2: GuessResult = "🟩🟨🟩⬜⬜".parse().unwrap();
        let p3: GuessResult = "gyg__".parse().unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(
            p1.classifications(),
            &[Correct, Present, Correct, Absent, Absent]
        );
    }

    #[test]
    fn parse_feedback_invalid() {
        assert_eq!("".parse::<GuessResult>(), Err(ParseFeedbackError::Empty));
        assert_eq!(
            "GXGGY".parse::<GuessResult>(),
            Err(ParseFeedbackError::InvalidSymbol {
                symbol: 'X',
                position: 1
            })
        );
    }

    #[test]
    fn display_round_trips_symbols() {
        let result: GuessResult = "🟨🟩🟨⬜⬜".parse().unwrap();
        assert_eq!(result.to_string(), "YGY--");
    }

    #[test]
    fn win_requires_all_correct() {
        assert!("GGGGG".parse::<GuessResult>().unwrap().is_win());
        assert!(!"GGGGY".parse::<GuessResult>().unwrap().is_win());
        assert!(!GuessResult::from_classifications(Vec::new()).is_win());
    }

    #[test]
    fn count_by_classification() {
        let result: GuessResult = "YGGYY".parse().unwrap();
        assert_eq!(result.count(Correct), 2);
        assert_eq!(result.count(Present), 3);
        assert_eq!(result.count(Absent), 0);
        assert_eq!(result.len(), 5);
    }
}
