//! Wordle Judge
//!
//! Scores guesses in a Wordle-style word game, with exact handling of repeated letters,
//! and runs games of it in the terminal.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_judge::core::{LetterClassification, Word, evaluate};
//!
//! let guess = Word::new("paper").unwrap();
//! let secret = Word::new("apple").unwrap();
//!
//! let result = evaluate(&guess, &secret).unwrap();
//! assert_eq!(result.to_emoji(), "🟨🟨🟩🟨⬜");
//! assert_eq!(result.count(LetterClassification::Present), 3);
//! assert!(!result.is_win());
//! ```

// Core domain types and scoring
pub mod core;

// Game sessions and word validity
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
