//! Core domain types for guess scoring
//!
//! This module contains the pure scoring types and the evaluator. Nothing here does I/O
//! or logs, so every call is deterministic and safe to run from any thread.

mod classification;
mod evaluator;
mod tally;
mod word;

pub use classification::{GuessResult, LetterClassification, ParseFeedbackError};
pub use evaluator::{evaluate, evaluate_str};
pub use tally::Tally;
pub use word::{InvalidInput, WORD_LENGTH, Word};
