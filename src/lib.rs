//! LEX∞INFINITE
//!
//! A timed, endlessly replayable five-letter word guessing game with a persistent
//! score history.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use lexinfinite::core::{Feedback, Word};
//!
//! let guess = Word::new("slate").unwrap();
//! let target = Word::new("crane").unwrap();
//!
//! let feedback = Feedback::score(&guess, &target);
//! println!("{}", feedback.to_emoji());
//! ```

// Game constants and runtime settings
pub mod config;

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Round state machine, countdown and controller
pub mod game;

// Score history and persistence
pub mod scores;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
