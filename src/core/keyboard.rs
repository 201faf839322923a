//! Keyboard letter status
//!
//! Folds the verdicts of every guess in a round into one best-known verdict per
//! letter. Status only ever improves: `Correct > Present > Absent > unseen`.

use super::{Feedback, Verdict, Word};
use rustc_hash::FxHashMap;

/// Best-known verdict per lowercase letter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardStatus {
    letters: FxHashMap<u8, Verdict>,
}

impl KeyboardStatus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new status with `guess` and its feedback folded in
    ///
    /// For each guess letter the result holds the maximum of the previous status
    /// and the verdict at that letter's position.
    #[must_use]
    pub fn update(&self, guess: &Word, feedback: &Feedback) -> Self {
        let mut letters = self.letters.clone();
        for (&letter, &verdict) in guess.chars().iter().zip(feedback.verdicts()) {
            letters
                .entry(letter)
                .and_modify(|best| *best = (*best).max(verdict))
                .or_insert(verdict);
        }
        Self { letters }
    }

    /// Status of a letter (either case); `None` if it has not been guessed yet
    #[must_use]
    pub fn get(&self, letter: char) -> Option<Verdict> {
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        self.letters
            .get(&(letter.to_ascii_lowercase() as u8))
            .copied()
    }

    /// Number of letters with a known status
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}
