//! Completed-round records
//!
//! On disk a record uses the flat schema
//! `{date, word, guesses, timeLeft, won, timeout}`; in memory the two flags are
//! folded into an [`Outcome`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Won,
    Lost,
    TimedOut,
}

impl Outcome {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Won => "Won",
            Self::Lost => "Lost",
            Self::TimedOut => "Timeout",
        }
    }
}

/// One completed round; created once and never mutated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "StoredScore", from = "StoredScore")]
pub struct ScoreRecord {
    timestamp: DateTime<Utc>,
    word: String,
    guess_count: usize,
    time_remaining: u32,
    outcome: Outcome,
}

impl ScoreRecord {
    /// Record a round finished now
    #[must_use]
    pub fn new(
        word: impl Into<String>,
        guess_count: usize,
        time_remaining: u32,
        outcome: Outcome,
    ) -> Self {
        Self::at(Utc::now(), word, guess_count, time_remaining, outcome)
    }

    /// Record a round finished at `timestamp`
    #[must_use]
    pub fn at(
        timestamp: DateTime<Utc>,
        word: impl Into<String>,
        guess_count: usize,
        time_remaining: u32,
        outcome: Outcome,
    ) -> Self {
        let time_remaining = if outcome == Outcome::TimedOut {
            0
        } else {
            time_remaining
        };
        Self {
            timestamp,
            word: word.into(),
            guess_count,
            time_remaining,
            outcome,
        }
    }

    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Target word in display (uppercase) form
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub const fn guess_count(&self) -> usize {
        self.guess_count
    }

    #[must_use]
    pub const fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub fn won(&self) -> bool {
        self.outcome == Outcome::Won
    }
}

/// Persisted shape of a record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredScore {
    date: DateTime<Utc>,
    word: String,
    guesses: usize,
    time_left: u32,
    won: bool,
    timeout: bool,
}

impl From<ScoreRecord> for StoredScore {
    fn from(record: ScoreRecord) -> Self {
        Self {
            date: record.timestamp,
            word: record.word,
            guesses: record.guess_count,
            time_left: record.time_remaining,
            won: record.outcome == Outcome::Won,
            timeout: record.outcome == Outcome::TimedOut,
        }
    }
}

impl From<StoredScore> for ScoreRecord {
    fn from(stored: StoredScore) -> Self {
        let outcome = if stored.won {
            Outcome::Won
        } else if stored.timeout {
            Outcome::TimedOut
        } else {
            Outcome::Lost
        };
        Self {
            timestamp: stored.date,
            word: stored.word,
            guess_count: stored.guesses,
            time_remaining: stored.time_left,
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap()
    }

    #[test]
    fn serializes_to_flat_schema() {
        let record = ScoreRecord::at(fixed_time(), "CRANE", 2, 250, Outcome::Won);
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["date"], "2024-03-01T12:30:00Z");
        assert_eq!(value["word"], "CRANE");
        assert_eq!(value["guesses"], 2);
        assert_eq!(value["timeLeft"], 250);
        assert_eq!(value["won"], true);
        assert_eq!(value["timeout"], false);
    }

    #[test]
    fn timed_out_record_has_zero_time_left() {
        let record = ScoreRecord::at(fixed_time(), "CRANE", 3, 17, Outcome::TimedOut);
        assert_eq!(record.time_remaining(), 0);

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["timeout"], true);
        assert_eq!(value["won"], false);
    }

    #[test]
    fn reads_browser_style_timestamps() {
        let json = r#"{"date":"2024-11-05T08:15:30.123Z","word":"SLATE","guesses":6,"timeLeft":12,"won":false,"timeout":false}"#;
        let record: ScoreRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.word(), "SLATE");
        assert_eq!(record.guess_count(), 6);
        assert_eq!(record.time_remaining(), 12);
        assert_eq!(record.outcome(), Outcome::Lost);
    }

    #[test]
    fn won_flag_takes_precedence() {
        let json = r#"{"date":"2024-11-05T08:15:30Z","word":"SLATE","guesses":1,"timeLeft":300,"won":true,"timeout":true}"#;
        let record: ScoreRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.outcome(), Outcome::Won);
    }

    #[test]
    fn outcome_labels() {
        assert_eq!(Outcome::Won.label(), "Won");
        assert_eq!(Outcome::Lost.label(), "Lost");
        assert_eq!(Outcome::TimedOut.label(), "Timeout");
    }
}
