//! Terminal output formatting
//!
//! Display utilities for the line-mode game, stats and share text.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_history, print_round_over, print_summary};
pub use formatters::{format_clock, share_text};
