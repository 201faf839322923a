//! Formatting utilities shared by the terminal front ends

use crate::game::{GuessRecord, Round};

/// Format seconds as `m:ss`
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// "try" or "tries"
#[must_use]
pub const fn tries(count: usize) -> &'static str {
    if count == 1 { "try" } else { "tries" }
}

/// Emoji grid for the stored guesses, one row per guess
#[must_use]
pub fn emoji_grid(history: &[GuessRecord]) -> String {
    history
        .iter()
        .map(|record| record.feedback().to_emoji())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Shareable summary of a round
///
/// ```text
/// LEXINFINITE 2/6
/// 250s remaining
///
/// ⬛⬛🟩⬛🟩
/// 🟩🟩🟩🟩🟩
/// ```
#[must_use]
pub fn share_text(round: &Round) -> String {
    format!(
        "LEXINFINITE {}/{}\n{}s remaining\n\n{}",
        round.history().len(),
        round.config().max_guesses,
        round.time_remaining(),
        emoji_grid(round.history())
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RoundConfig;
    use crate::core::Word;
    use crate::wordlists::Dictionary;

    #[test]
    fn clock_formatting() {
        assert_eq!(format_clock(300), "5:00");
        assert_eq!(format_clock(65), "1:05");
        assert_eq!(format_clock(9), "0:09");
        assert_eq!(format_clock(0), "0:00");
    }

    #[test]
    fn tries_pluralization() {
        assert_eq!(tries(1), "try");
        assert_eq!(tries(2), "tries");
        assert_eq!(tries(0), "tries");
    }

    #[test]
    fn share_text_uses_stored_verdicts() {
        let dictionary = Dictionary::load("crane\nslate").unwrap();
        let mut round = Round::new(RoundConfig::default());
        round.start(Word::new("crane").unwrap());
        for word in ["slate", "crane"] {
            for c in word.chars() {
                round.press_letter(c);
            }
            round.submit(&dictionary).unwrap();
        }

        assert_eq!(
            share_text(&round),
            "LEXINFINITE 2/6\n300s remaining\n\n⬛⬛🟩⬛🟩\n🟩🟩🟩🟩🟩"
        );
    }

    #[test]
    fn progress_bar_bounds() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
