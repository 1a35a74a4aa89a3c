//! Formatting utilities for terminal output

use crate::core::{GuessResult, LetterClassification, Word};
use colored::{ColoredString, Colorize};

/// A letter drawn as a colored tile
#[must_use]
pub fn tile(letter: u8, classification: LetterClassification) -> ColoredString {
    let text = format!(" {} ", char::from(letter));
    match classification {
        LetterClassification::Correct => text.black().bold().on_green(),
        LetterClassification::Present => text.black().bold().on_yellow(),
        LetterClassification::Absent => text.white().bold().on_bright_black(),
    }
}

/// A scored guess as a row of tiles
#[must_use]
pub fn colored_row(guess: &Word, result: &GuessResult) -> String {
    guess
        .letters()
        .iter()
        .zip(result.classifications())
        .map(|(&letter, &classification)| tile(letter, classification).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
