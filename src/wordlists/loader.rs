//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.
//! Only words of `WORD_LENGTH` letters are kept.

use crate::core::{WORD_LENGTH, Word};
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping blank lines, `#` comments and
/// entries that are not 5-letter words.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_judge::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let words = words_from_lines(content.lines());
    debug!(path = %path.display(), count = words.len(), "loaded word list");

    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_judge::wordlists::loader::words_from_slice;
/// use wordle_judge::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<Word> {
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| Word::new(line).ok())
        .filter(|word| word.len() == WORD_LENGTH)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
        assert_eq!(words[2].text(), "IRATE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "sl4te", "", "# note", "slate"];
        let words = words_from_slice(input);

        // Only "crane" and "slate" are valid 5-letter words
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_embedded_answers() {
        use crate::wordlists::ANSWERS;

        let words = words_from_slice(ANSWERS);
        assert_eq!(words.len(), ANSWERS.len());
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("definitely/not/a/real/list.txt").is_err());
    }

    #[test]
    fn load_from_data_file() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/answers.txt");
        let words = load_from_file(path).unwrap();
        assert_eq!(words.len(), crate::wordlists::ANSWERS_COUNT);
    }
}
