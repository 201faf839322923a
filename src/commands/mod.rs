//! Command implementations

pub mod score;
pub mod simple;
pub mod stats;

pub use score::{ScoreResult, print_score, score_words};
pub use simple::run_simple;
pub use stats::{clear_stats, show_stats};
