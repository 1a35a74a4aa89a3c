//! Display functions for command results

use super::formatters::{colored_row, create_progress_bar};
use crate::commands::{AuditReport, ScoreReport};
use crate::game::{Game, GameStatus, Turn, WordValidator};
use colored::Colorize;

/// Print one accepted guess as a tile row
pub fn print_turn(turn: &Turn) {
    println!(
        "\n  {}   {}\n",
        colored_row(&turn.guess, &turn.result),
        turn.result.to_emoji()
    );
}

/// Print the outcome of a finished game
pub fn print_game_over<V: WordValidator>(game: &Game<V>) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    match game.status() {
        GameStatus::Won => {
            let used = game.turns().len();
            println!("{}", "    🎉  Y O U   W I N !  🎉".bright_green().bold());
            println!(
                "\n  Found {} in {} {}",
                game.secret().text().bright_yellow().bold(),
                used.to_string().bright_cyan().bold(),
                if used == 1 { "guess" } else { "guesses" }
            );
        }
        GameStatus::Lost => {
            println!("{}", "    Out of guesses".red().bold());
            println!(
                "\n  The word was {}",
                game.secret().text().bright_yellow().bold()
            );
        }
        GameStatus::InProgress => {}
    }

    println!("\n  Guess history:");
    for (i, turn) in game.turns().iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            turn.guess.text().bright_white().bold(),
            turn.result.to_emoji()
        );
    }
    println!("\n{}", "═".repeat(60).bright_cyan());
}

/// Print the result of scoring a single guess
pub fn print_score_report(report: &ScoreReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Scoring {} against {}",
        report.guess.text().bright_white().bold(),
        report.secret.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!(
        "\n  {}   {}   {}\n",
        colored_row(&report.guess, &report.result),
        report.result.to_emoji(),
        report.result
    );

    if report.is_win() {
        println!("{}", "✅ Every letter is correct!".green().bold());
    }
}

/// Print the result of an audit run
pub fn print_audit_report(report: &AuditReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "AUDIT RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Coverage:".bright_cyan().bold());
    println!("   Secrets:          {}", report.secrets);
    println!("   Guesses:          {}", report.guesses);
    println!("   Pairs scored:     {}", report.pairs);
    println!("   Winning pairs:    {}", report.wins);
    println!("   Distinct results: {}", report.patterns.len());
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());
    println!("   Pairs/second:     {:.0}", report.pairs_per_second());

    println!("\n📈 {}", "Most common results:".bright_cyan().bold());
    let top = report.patterns.first().map_or(0, |(_, n)| *n);
    for (pattern, count) in report.patterns.iter().take(10) {
        let pct = *count as f64 / report.pairs.max(1) as f64 * 100.0;
        let bar = create_progress_bar(*count as f64, top as f64, 30);
        println!(
            "   {} {} {count:7} ({pct:5.1}%)",
            pattern.to_emoji(),
            bar.green()
        );
    }

    println!();
    if report.passed() {
        println!("{}", "✅ All scoring rules hold".green().bold());
    } else {
        println!(
            "{}",
            format!("❌ {} rule violations", report.violations.len())
                .red()
                .bold()
        );
        for violation in report.violations.iter().take(10) {
            println!(
                "   {} vs {}: {}",
                violation.guess.yellow(),
                violation.secret.yellow(),
                violation.rule
            );
        }
    }
}
