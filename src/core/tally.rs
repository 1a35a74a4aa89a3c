//! Per-letter match budget

use super::Word;

const ALPHABET_SIZE: usize = 26;

/// Remaining matches available for each letter of a secret word
///
/// Backed by a fixed array indexed by letter, so lookups and updates are constant time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally([usize; ALPHABET_SIZE]);

impl Tally {
    /// Count every letter of `word`
    #[must_use]
    pub fn of(word: &Word) -> Self {
        let mut counts = [0; ALPHABET_SIZE];
        for &letter in word.letters() {
            counts[slot(letter)] += 1;
        }
        Self(counts)
    }

    /// Matches still available for `letter`
    #[inline]
    #[must_use]
    pub fn remaining(&self, letter: u8) -> usize {
        self.0[slot(letter)]
    }

    /// Consume one match for `letter`
    ///
    /// Returns false, leaving the tally unchanged, when the budget is already spent.
    #[inline]
    pub fn take(&mut self, letter: u8) -> bool {
        let count = &mut self.0[slot(letter)];
        if *count == 0 {
            return false;
        }
        *count -= 1;
        true
    }
}

// Words only ever hold uppercase ASCII
#[inline]
fn slot(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_uppercase(), "letter must be uppercase ASCII");
    usize::from(letter - b'A')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_counts_duplicates() {
        let tally = Tally::of(&Word::new("speed").unwrap());
        assert_eq!(tally.remaining(b'E'), 2);
        assert_eq!(tally.remaining(b'S'), 1);
        assert_eq!(tally.remaining(b'Z'), 0);
    }

    #[test]
    fn tally_take_until_spent() {
        let mut tally = Tally::of(&Word::new("llama").unwrap());
        assert!(tally.take(b'L'));
        assert!(tally.take(b'L'));
        assert!(!tally.take(b'L'));
        assert_eq!(tally.remaining(b'L'), 0);
        assert_eq!(tally.remaining(b'A'), 2);
    }

    #[test]
    fn tally_take_missing_letter() {
        let mut tally = Tally::of(&Word::new("crane").unwrap());
        assert!(!tally.take(b'Q'));
        assert_eq!(tally, Tally::of(&Word::new("crane").unwrap()));
    }
}
