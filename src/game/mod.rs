//! Game session on top of the evaluator
//!
//! Tracks attempts and win/loss for one secret word, with a pluggable check deciding
//! which guesses are accepted.

mod dictionary;
mod session;

pub use dictionary::{AcceptAll, Dictionary, WordValidator};
pub use session::{Game, GameError, GameStatus, MAX_ATTEMPTS, Turn};
