//! Aggregate statistics over the score history

use super::{Outcome, ScoreRecord};
use crate::config::MAX_GUESSES;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Summary {
    pub played: usize,
    pub won: usize,
    pub lost: usize,
    pub timed_out: usize,
    /// Wins by guess count; index 0 is unused
    pub guess_distribution: [usize; MAX_GUESSES + 1],
    pub current_streak: usize,
    pub best_streak: usize,
    pub average_time_left: Option<f64>,
}

impl Summary {
    #[must_use]
    pub fn from_records(records: &[ScoreRecord]) -> Self {
        let mut summary = Self::default();
        let mut streak = 0;
        let mut time_left_total = 0u64;

        for record in records {
            summary.played += 1;
            match record.outcome() {
                Outcome::Won => {
                    summary.won += 1;
                    streak += 1;
                    summary.best_streak = summary.best_streak.max(streak);
                    time_left_total += u64::from(record.time_remaining());
                    if let Some(slot) = summary.guess_distribution.get_mut(record.guess_count()) {
                        *slot += 1;
                    }
                }
                Outcome::Lost => {
                    summary.lost += 1;
                    streak = 0;
                }
                Outcome::TimedOut => {
                    summary.timed_out += 1;
                    streak = 0;
                }
            }
        }

        summary.current_streak = streak;
        if summary.won > 0 {
            summary.average_time_left = Some(time_left_total as f64 / summary.won as f64);
        }
        summary
    }

    /// Win percentage, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            self.won as f64 / self.played as f64 * 100.0
        }
    }
}
