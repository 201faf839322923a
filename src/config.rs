//! Game configuration
//!
//! Round parameters are compile-time constants wrapped in [`RoundConfig`] so tests
//! can shorten rounds. Runtime settings (storage location, word list, logging)
//! come from the command line and environment.

use std::path::PathBuf;
use std::time::Duration;

/// Number of letters in every word for the whole game instance
pub const WORD_LENGTH: usize = 5;

/// Guesses allowed per round
pub const MAX_GUESSES: usize = 6;

/// Countdown length of a round in seconds
pub const ROUND_SECONDS: u32 = 300;

/// Interval between countdown ticks
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Key of the single storage slot holding the score history
pub const STORAGE_KEY: &str = "lexinfinite_scores";

/// Per-round limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundConfig {
    pub max_guesses: usize,
    pub round_seconds: u32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            max_guesses: MAX_GUESSES,
            round_seconds: ROUND_SECONDS,
        }
    }
}

/// Runtime settings resolved from CLI flags and environment
#[derive(Debug, Clone)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub words: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

impl Settings {
    /// Build settings, falling back to the default data directory
    #[must_use]
    pub fn new(
        data_dir: Option<PathBuf>,
        words: Option<PathBuf>,
        log_file: Option<PathBuf>,
    ) -> Self {
        Self {
            data_dir: data_dir.unwrap_or_else(default_data_dir),
            words,
            log_file,
        }
    }

    /// Log file used by the TUI when none was given explicitly
    #[must_use]
    pub fn tui_log_file(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| self.data_dir.join("lexinfinite.log"))
    }
}

/// `$HOME/.lexinfinite`, or `./.lexinfinite` when no home directory is known
#[must_use]
pub fn default_data_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map_or_else(|| PathBuf::from("."), PathBuf::from)
        .join(".lexinfinite")
}
