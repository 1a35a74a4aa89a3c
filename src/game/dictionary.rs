//! Word validity and secret selection

use crate::core::Word;
use crate::wordlists::loader::words_from_slice;
use crate::wordlists::{ALLOWED, ANSWERS};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use tracing::debug;

/// Decides whether a guess may be submitted at all
///
/// Rejected guesses never reach the evaluator and do not cost an attempt.
pub trait WordValidator {
    fn is_valid(&self, word: &Word) -> bool;
}

impl<T: WordValidator + ?Sized> WordValidator for &T {
    fn is_valid(&self, word: &Word) -> bool {
        (**self).is_valid(word)
    }
}

/// Accepts any well-formed word
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl WordValidator for AcceptAll {
    fn is_valid(&self, _word: &Word) -> bool {
        true
    }
}

/// Allowed guesses plus the pool secret words are drawn from
#[derive(Debug, Clone)]
pub struct Dictionary {
    allowed: Vec<Word>,
    index: FxHashSet<Word>,
    answers: Vec<Word>,
}

impl Dictionary {
    /// Build from explicit lists
    ///
    /// Every answer is also an allowed guess. The allowed list is sorted and deduplicated.
    #[must_use]
    pub fn new(allowed: Vec<Word>, answers: Vec<Word>) -> Self {
        let index: FxHashSet<Word> = allowed.into_iter().chain(answers.iter().cloned()).collect();
        let mut allowed: Vec<Word> = index.iter().cloned().collect();
        allowed.sort_unstable();

        debug!(
            allowed = allowed.len(),
            answers = answers.len(),
            "dictionary built"
        );

        Self {
            allowed,
            index,
            answers,
        }
    }

    /// The word lists compiled into the binary
    ///
    /// # Examples
    /// ```
    /// use wordle_judge::core::Word;
    /// use wordle_judge::game::Dictionary;
    ///
    /// let dictionary = Dictionary::embedded();
    /// assert!(dictionary.contains(&Word::new("crane").unwrap()));
    /// assert!(!dictionary.contains(&Word::new("xxxxx").unwrap()));
    /// ```
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(ALLOWED), words_from_slice(ANSWERS))
    }

    /// Whether `word` may be guessed
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// All allowed guesses, sorted
    #[must_use]
    pub fn allowed(&self) -> &[Word] {
        &self.allowed
    }

    /// Words a game may pick as its secret
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Pick a secret word, or `None` if there are no answers
    pub fn random_answer<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.answers.choose(rng)
    }
}

impl WordValidator for Dictionary {
    fn is_valid(&self, word: &Word) -> bool {
        self.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{ALLOWED_COUNT, ANSWERS_COUNT};

    fn words(list: &[&str]) -> Vec<Word> {
        words_from_slice(list)
    }

    #[test]
    fn embedded_dictionary_sizes() {
        let dictionary = Dictionary::embedded();
        assert_eq!(dictionary.allowed().len(), ALLOWED_COUNT);
        assert_eq!(dictionary.answers().len(), ANSWERS_COUNT);
    }

    #[test]
    fn common_words_accepted() {
        let dictionary = Dictionary::embedded();
        for word in [
            "hello", "stare", "plant", "ghost", "smile", "bread", "think", "about", "which",
            "cards", "going", "tries",
        ] {
            assert!(
                dictionary.is_valid(&Word::new(word).unwrap()),
                "{word} should be a valid guess"
            );
        }
        assert!(dictionary.allowed().len() > 5000);
    }

    #[test]
    fn answers_are_always_allowed() {
        let dictionary = Dictionary::new(words(&["crane"]), words(&["slate"]));
        assert!(dictionary.contains(&Word::new("slate").unwrap()));
        assert!(dictionary.contains(&Word::new("CRANE").unwrap()));
        assert_eq!(dictionary.allowed().len(), 2);
    }

    #[test]
    fn allowed_sorted_and_deduplicated() {
        let dictionary = Dictionary::new(words(&["slate", "crane", "slate"]), words(&["crane"]));
        let texts: Vec<&str> = dictionary.allowed().iter().map(Word::text).collect();
        assert_eq!(texts, ["CRANE", "SLATE"]);
    }

    #[test]
    fn random_answer_comes_from_answers() {
        let dictionary = Dictionary::embedded();
        let mut rng = rand::rng();
        for _ in 0..20 {
            let secret = dictionary.random_answer(&mut rng).unwrap();
            assert!(dictionary.answers().contains(secret));
        }
    }

    #[test]
    fn random_answer_empty_pool() {
        let dictionary = Dictionary::new(words(&["crane"]), Vec::new());
        assert!(dictionary.random_answer(&mut rand::rng()).is_none());
    }

    #[test]
    fn validators() {
        let word = Word::new("qqqqq").unwrap();
        assert!(AcceptAll.is_valid(&word));
        assert!(!Dictionary::embedded().is_valid(&word));

        let by_ref: &dyn WordValidator = &AcceptAll;
        assert!(by_ref.is_valid(&word));
    }
}
