//! Core domain types for the word game
//!
//! Words, guess scoring and keyboard status aggregation. Everything here is pure
//! and independent of the round lifecycle.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{Feedback, Verdict};
pub use keyboard::KeyboardStatus;
pub use word::{Word, WordError};
