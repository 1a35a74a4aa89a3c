//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary for zero-cost access.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
