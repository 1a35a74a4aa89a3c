//! Audit the evaluator over a whole word list
//!
//! Scores every guess against every secret in parallel and checks the scoring rules hold
//! for each pair.

use crate::core::{GuessResult, LetterClassification, Word, evaluate};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{info, instrument, warn};

/// Audit settings
#[derive(Debug, Clone, Copy)]
pub struct AuditConfig {
    /// Only use the first N secrets
    pub limit: Option<usize>,
    /// Draw a progress bar on stderr
    pub show_progress: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            limit: None,
            show_progress: true,
        }
    }
}

/// A scoring rule checked for every pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// A word scored against itself is all `Correct`
    SelfMatch,
    /// Correct + Present per letter never exceeds the letter's count in the secret
    LetterBudget,
    /// A position is `Correct` exactly when the letters there agree
    ExactPriority,
    /// Scoring the same pair twice gives the same result
    Deterministic,
    /// The evaluator refused the pair
    Rejected,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SelfMatch => "self-match",
            Self::LetterBudget => "letter budget",
            Self::ExactPriority => "exact-match priority",
            Self::Deterministic => "determinism",
            Self::Rejected => "rejected input",
        };
        f.write_str(name)
    }
}

/// A pair that broke a rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub guess: String,
    pub secret: String,
    pub rule: Rule,
}

/// Outcome of an audit run
#[derive(Debug)]
pub struct AuditReport {
    pub secrets: usize,
    pub guesses: usize,
    pub pairs: usize,
    pub wins: usize,
    pub violations: Vec<Violation>,
    /// How often each feedback pattern came up, most common first
    pub patterns: Vec<(GuessResult, usize)>,
    pub duration: Duration,
}

impl AuditReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    #[must_use]
    pub fn pairs_per_second(&self) -> f64 {
        self.pairs as f64 / self.duration.as_secs_f64().max(f64::EPSILON)
    }
}

#[derive(Default)]
struct Partial {
    pairs: usize,
    wins: usize,
    violations: Vec<Violation>,
    patterns: FxHashMap<GuessResult, usize>,
}

impl Partial {
    fn merge(mut self, other: Self) -> Self {
        self.pairs += other.pairs;
        self.wins += other.wins;
        self.violations.extend(other.violations);
        for (pattern, count) in other.patterns {
            *self.patterns.entry(pattern).or_insert(0) += count;
        }
        self
    }
}

/// Check every guess in `guesses` against every secret in `secrets`
#[instrument(skip_all, fields(guesses = guesses.len(), secrets = secrets.len()))]
pub fn run_audit(guesses: &[Word], secrets: &[Word], config: AuditConfig) -> AuditReport {
    let secrets = &secrets[..config.limit.unwrap_or(secrets.len()).min(secrets.len())];

    let pb = if config.show_progress {
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .map_or_else(|_| ProgressStyle::default_bar(), |style| {
            style.progress_chars("█▓▒░")
        }),
    );
    pb.set_message("auditing");

    let start = Instant::now();

    let totals = secrets
        .par_iter()
        .map(|secret| {
            let partial = audit_secret(secret, guesses);
            pb.inc(1);
            partial
        })
        .reduce(Partial::default, Partial::merge);

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut patterns: Vec<(GuessResult, usize)> = totals.patterns.into_iter().collect();
    patterns.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.to_string().cmp(&b.0.to_string())));

    let mut violations = totals.violations;
    violations.sort_by(|a, b| (&a.secret, &a.guess).cmp(&(&b.secret, &b.guess)));

    if violations.is_empty() {
        info!(pairs = totals.pairs, ?duration, "audit passed");
    } else {
        warn!(
            pairs = totals.pairs,
            violations = violations.len(),
            "audit found rule violations"
        );
    }

    AuditReport {
        secrets: secrets.len(),
        guesses: guesses.len(),
        pairs: totals.pairs,
        wins: totals.wins,
        violations,
        patterns,
        duration,
    }
}

fn audit_secret(secret: &Word, guesses: &[Word]) -> Partial {
    let mut partial = Partial::default();

    if !evaluate(secret, secret).is_ok_and(|r| r.is_win()) {
        partial.violations.push(violation(secret, secret, Rule::SelfMatch));
    }

    for guess in guesses {
        partial.pairs += 1;

        let Ok(result) = evaluate(guess, secret) else {
            partial.violations.push(violation(guess, secret, Rule::Rejected));
            continue;
        };

        for rule in broken_rules(guess, secret, &result) {
            partial.violations.push(violation(guess, secret, rule));
        }

        if result.is_win() {
            partial.wins += 1;
        }
        *partial.patterns.entry(result).or_insert(0) += 1;
    }

    partial
}

fn broken_rules(guess: &Word, secret: &Word, result: &GuessResult) -> Vec<Rule> {
    let mut broken = Vec::new();
    let classes = result.classifications();

    if evaluate(guess, secret).as_ref() != Ok(result) {
        broken.push(Rule::Deterministic);
    }

    let overspent = guess.letters().iter().any(|&letter| {
        let matched = guess
            .letters()
            .iter()
            .zip(classes)
            .filter(|&(&l, &c)| l == letter && c != LetterClassification::Absent)
            .count();
        matched > secret.count_of(letter)
    });
    if overspent {
        broken.push(Rule::LetterBudget);
    }

    let misplaced = guess
        .letters()
        .iter()
        .zip(secret.letters())
        .zip(classes)
        .any(|((g, s), &c)| (g == s) != (c == LetterClassification::Correct));
    if misplaced {
        broken.push(Rule::ExactPriority);
    }

    broken
}

fn violation(guess: &Word, secret: &Word, rule: Rule) -> Violation {
    Violation {
        guess: guess.to_string(),
        secret: secret.to_string(),
        rule,
    }
}
