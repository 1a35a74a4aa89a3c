//! Command implementations

pub mod audit;
pub mod play;
pub mod score;

pub use audit::{AuditConfig, AuditReport, Rule, Violation, run_audit};
pub use play::{PlayConfig, run_play};
pub use score::{ScoreReport, score};
