//! Embedded word list
//!
//! Raw word list compiled into the binary. It is unvalidated text; run it through
//! [`Dictionary::load`](super::Dictionary::load) before use.

/// Default word list, one word per line
pub const WORDS: &str = include_str!("../../data/words.txt");
