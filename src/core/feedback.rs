//! Guess scoring under duplicate-letter rules
//!
//! Each position of a guess receives a [`Verdict`]:
//! - `Correct` = right letter, right position
//! - `Present` = letter in the target, wrong position
//! - `Absent`  = letter not available in the target
//!
//! Verdicts are ordered `Absent < Present < Correct`, which is the precedence the
//! keyboard aggregation relies on.

use super::Word;
use crate::config::WORD_LENGTH;
use std::fmt;

/// Per-letter outcome of comparing a guess to the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verdict {
    Absent,
    Present,
    Correct,
}

impl Verdict {
    /// Square used in share text
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }
}

/// Verdicts for one guess, index-aligned with the guess letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Verdict; WORD_LENGTH]);

impl Feedback {
    /// All letters correct
    pub const PERFECT: Self = Self([Verdict::Correct; WORD_LENGTH]);

    /// Score `guess` against `target`
    ///
    /// # Algorithm
    /// 1. Start with every position `Absent` and a scratch copy of the target letters
    /// 2. First pass: exact position matches become `Correct` and their scratch slot
    ///    is consumed
    /// 3. Second pass: every remaining guess letter takes the first unconsumed scratch
    ///    slot holding the same letter (left-to-right) and becomes `Present`
    ///
    /// A target letter therefore backs at most one non-`Absent` verdict.
    ///
    /// # Examples
    /// ```
    /// use lexinfinite::core::{Feedback, Verdict, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let target = Word::new("abide").unwrap();
    /// let feedback = Feedback::score(&guess, &target);
    ///
    /// // Only one E is available in ABIDE, so the second E is absent
    /// assert_eq!(feedback.verdicts()[2], Verdict::Present);
    /// assert_eq!(feedback.verdicts()[3], Verdict::Absent);
    /// ```
    #[must_use]
    pub fn score(guess: &Word, target: &Word) -> Self {
        let mut result = [Verdict::Absent; WORD_LENGTH];
        let mut scratch: [Option<u8>; WORD_LENGTH] = target.chars().map(Some);

        for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
            if g == t {
                result[i] = Verdict::Correct;
                scratch[i] = None;
            }
        }

        for (i, &letter) in guess.chars().iter().enumerate() {
            if result[i] == Verdict::Correct {
                continue;
            }
            if let Some(slot) = scratch.iter_mut().find(|slot| **slot == Some(letter)) {
                result[i] = Verdict::Present;
                *slot = None;
            }
        }

        Self(result)
    }

    /// Verdicts in guess order
    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LENGTH] {
        &self.0
    }

    /// Check if every letter is correct
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count positions with the given verdict
    #[must_use]
    pub fn count(&self, verdict: Verdict) -> usize {
        self.0.iter().filter(|&&v| v == verdict).count()
    }

    /// Render as a row of emoji squares, e.g. "⬛⬛🟩⬛🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }

    /// Render as pattern letters, e.g. "--G-G"
    #[must_use]
    pub fn to_letters(&self) -> String {
        self.0
            .iter()
            .map(|v| match v {
                Verdict::Correct => 'G',
                Verdict::Present => 'Y',
                Verdict::Absent => '-',
            })
            .collect()
    }

    /// Parse a pattern like "GY-GY" (G = correct, Y = present, -/_ = absent)
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Option API for callers; FromStr is implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut verdicts = [Verdict::Absent; WORD_LENGTH];
        for (slot, ch) in verdicts.iter_mut().zip(chars) {
            *slot = match ch {
                'G' | 'g' | '🟩' => Verdict::Correct,
                'Y' | 'y' | '🟨' => Verdict::Present,
                '-' | '_' | '⬛' | '⬜' => Verdict::Absent,
                _ => return None,
            };
        }

        Some(Self(verdicts))
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(guess: &str, target: &str) -> Feedback {
        Feedback::score(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    fn pattern(s: &str) -> Feedback {
        Feedback::from_str(s).unwrap()
    }

    #[test]
    fn all_absent() {
        let feedback = score("abcde", "fghij");
        assert_eq!(feedback, pattern("-----"));
        assert_eq!(feedback.count(Verdict::Absent), 5);
    }

    #[test]
    fn all_correct() {
        let feedback = score("crane", "crane");
        assert_eq!(feedback, Feedback::PERFECT);
        assert!(feedback.is_perfect());
    }

    #[test]
    fn slate_against_crane() {
        // A and E sit in the same positions in both words
        assert_eq!(score("slate", "crane"), pattern("--G-G"));
    }

    #[test]
    fn duplicate_guess_letter_single_target_occurrence() {
        // ABIDE has one E: the leftmost E in SPEED claims it
        let feedback = score("speed", "abide");
        assert_eq!(feedback, pattern("--Y-Y"));
    }

    #[test]
    fn duplicate_letters_both_matched_when_target_has_two() {
        // ERASE has two E's and one S
        assert_eq!(score("speed", "erase"), pattern("Y-YY-"));
    }

    #[test]
    fn correct_pass_runs_before_present_pass() {
        // The second O of ROBOT is exact, so only one O is left for the first
        assert_eq!(score("robot", "floor"), pattern("YY-G-"));
    }

    #[test]
    fn exact_match_consumes_letter_before_earlier_duplicate() {
        // Both L's of HELLO are claimed by exact matches, leaving the first L absent
        assert_eq!(score("lolly", "hello"), pattern("-YGG-"));
    }

    #[test]
    fn triple_letter_guess_against_single() {
        assert_eq!(score("eeeee", "crane"), pattern("----G"));
        assert_eq!(score("aaxaa", "abbey"), pattern("G----"));
    }

    #[test]
    fn non_absent_count_never_exceeds_target_occurrences() {
        let words = [
            "speed", "erase", "abide", "robot", "floor", "lolly", "hello", "eerie", "geese",
            "crane", "slate", "mamma", "allay", "llama",
        ];
        for guess in words {
            for target in words {
                let g = Word::new(guess).unwrap();
                let t = Word::new(target).unwrap();
                let feedback = Feedback::score(&g, &t);
                assert_eq!(feedback.verdicts().len(), WORD_LENGTH);

                for letter in b'a'..=b'z' {
                    let matched = g
                        .chars()
                        .iter()
                        .zip(feedback.verdicts())
                        .filter(|&(&c, &v)| c == letter && v != Verdict::Absent)
                        .count();
                    assert!(
                        matched <= t.count_of(letter),
                        "{guess} vs {target}: letter {} over-matched",
                        letter as char
                    );
                }
            }
        }
    }

    #[test]
    fn verdict_precedence() {
        assert!(Verdict::Correct > Verdict::Present);
        assert!(Verdict::Present > Verdict::Absent);
    }

    #[test]
    fn emoji_rendering() {
        assert_eq!(score("slate", "crane").to_emoji(), "⬛⬛🟩⬛🟩");
        assert_eq!(pattern("GY-GY").to_string(), "🟩🟨⬛🟩🟨");
    }

    #[test]
    fn from_str_rejects_bad_input() {
        assert!(Feedback::from_str("GYGGYX").is_none());
        assert!(Feedback::from_str("GYG").is_none());
        assert!(Feedback::from_str("GXGGY").is_none());
        assert!(Feedback::from_str("").is_none());
        assert!("GY-GY".parse::<Feedback>().is_ok());
    }
}
