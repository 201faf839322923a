//! Colored terminal output for the line-mode game and the stats commands

use super::formatters::{create_progress_bar, format_clock, tries};
use crate::core::{KeyboardStatus, Verdict};
use crate::game::{GuessRecord, Round};
use crate::scores::{Outcome, ScoreRecord, Summary};
use colored::{ColoredString, Colorize};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

fn paint(text: &str, verdict: Option<Verdict>) -> ColoredString {
    match verdict {
        Some(Verdict::Correct) => text.black().on_bright_green().bold(),
        Some(Verdict::Present) => text.black().on_bright_yellow().bold(),
        Some(Verdict::Absent) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// One scored guess as colored tiles
#[must_use]
pub fn guess_row(record: &GuessRecord) -> String {
    record
        .word()
        .display()
        .chars()
        .zip(record.feedback().verdicts())
        .map(|(letter, &verdict)| paint(&format!(" {letter} "), Some(verdict)).to_string())
        .collect()
}

/// Keyboard with each key colored by its best-known status
#[must_use]
pub fn keyboard_rows(status: &KeyboardStatus) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .chars()
                .map(|key| format!("{} ", paint(&key.to_string(), status.get(key))))
                .collect();
            format!("{}{keys}", " ".repeat(indent))
        })
        .collect()
}

/// Print the board, clock and keyboard for the current round
pub fn print_board(round: &Round) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "⏱  {}   Guesses: {}/{}",
        format_clock(round.time_remaining()).bright_cyan().bold(),
        round.history().len(),
        round.config().max_guesses
    );
    println!("{}", "─".repeat(40).cyan());

    for record in round.history() {
        println!("  {}", guess_row(record));
    }

    println!();
    for row in keyboard_rows(round.keyboard()) {
        println!("  {row}");
    }
    println!();
}

/// Print the end-of-round banner
pub fn print_round_over(round: &Round, record: &ScoreRecord) {
    let count = record.guess_count();
    println!("\n{}", "═".repeat(50).bright_cyan());
    match record.outcome() {
        Outcome::Won => {
            println!("{}", "    🎉  AWESOME!  🎉".bright_green().bold());
            println!(
                "  Solved {} in {} {}!",
                record.word().bright_yellow().bold(),
                count,
                tries(count)
            );
        }
        Outcome::Lost => {
            println!("{}", "    Game Over!".red().bold());
            println!("  The word was: {}", record.word().bright_yellow().bold());
            println!("  Better luck next time!");
        }
        Outcome::TimedOut => {
            println!("{}", "    ⌛ Time's Up!".yellow().bold());
            println!("  The word was: {}", record.word().bright_yellow().bold());
            println!("  Time ran out after {count} {}", tries(count));
        }
    }
    for row in round.history() {
        println!("    {}", guess_row(row));
    }
    println!("{}", "═".repeat(50).bright_cyan());
}

fn outcome_label(outcome: Outcome) -> ColoredString {
    match outcome {
        Outcome::Won => outcome.label().green(),
        Outcome::Lost => outcome.label().red(),
        Outcome::TimedOut => outcome.label().yellow(),
    }
}

/// Print every stored round, oldest first
pub fn print_history(records: &[ScoreRecord]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "YOUR STATS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if records.is_empty() {
        println!("\n  No games played yet");
        return;
    }

    for record in records {
        println!(
            "\n  {:<8} {}",
            record.word().bright_yellow().bold(),
            outcome_label(record.outcome())
        );
        println!(
            "  {}",
            format!(
                "{} · {} guesses · {}s left",
                record.timestamp().format("%Y-%m-%d"),
                record.guess_count(),
                record.time_remaining()
            )
            .bright_black()
        );
    }
}

/// Print aggregate statistics
pub fn print_summary(summary: &Summary) {
    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Played:        {}", summary.played);
    println!(
        "   Win rate:      {}",
        format!("{:.0}%", summary.win_rate()).bright_yellow().bold()
    );
    println!(
        "   Won / Lost / Timeout: {} / {} / {}",
        summary.won.to_string().green(),
        summary.lost.to_string().red(),
        summary.timed_out.to_string().yellow()
    );
    println!(
        "   Streak:        {} (best {})",
        summary.current_streak, summary.best_streak
    );
    if let Some(avg) = summary.average_time_left {
        println!("   Avg time left: {avg:.0}s");
    }

    if summary.won == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (guesses, &count) in summary.guess_distribution.iter().enumerate().skip(1) {
        let pct = count as f64 / summary.won as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 30);
        println!("   {guesses}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
