//! Single-round state machine
//!
//! A round moves `Idle -> Playing -> Won | Lost | TimedOut`. Input is buffered
//! letter by letter; a full, valid submission is scored once and stored as a
//! [`GuessRecord`]. Entering a terminal phase stops the countdown first and then
//! yields exactly one [`ScoreRecord`].

use super::timer::{Countdown, TickOutcome};
use crate::config::{RoundConfig, WORD_LENGTH};
use crate::core::{Feedback, KeyboardStatus, Word};
use crate::scores::{Outcome, ScoreRecord};
use crate::wordlists::Dictionary;
use thiserror::Error;

/// Lifecycle phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Playing,
    Won,
    Lost,
    TimedOut,
}

impl Phase {
    /// Won, Lost or `TimedOut`
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost | Self::TimedOut)
    }

    const fn outcome(self) -> Option<Outcome> {
        match self {
            Self::Won => Some(Outcome::Won),
            Self::Lost => Some(Outcome::Lost),
            Self::TimedOut => Some(Outcome::TimedOut),
            Self::Idle | Self::Playing => None,
        }
    }
}

/// A submitted guess with its verdicts, fixed at submit time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    word: Word,
    feedback: Feedback,
}

impl GuessRecord {
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}

/// Why a submission was rejected; the round is left untouched
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Guess needs {WORD_LENGTH} letters, got {0}")]
    Incomplete(usize),
    #[error("Not in word list: {0}")]
    InvalidWord(String),
    #[error("Round is not in progress")]
    RoundOver,
}

/// Result of a countdown tick on the round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundTick {
    Ignored,
    Counted(u32),
    TimedOut(ScoreRecord),
}

/// State of one round
#[derive(Debug, Clone)]
pub struct Round {
    config: RoundConfig,
    target: Option<Word>,
    history: Vec<GuessRecord>,
    input: String,
    phase: Phase,
    keyboard: KeyboardStatus,
    countdown: Countdown,
}

impl Round {
    /// Idle round with no target
    #[must_use]
    pub fn new(config: RoundConfig) -> Self {
        Self {
            config,
            target: None,
            history: Vec::new(),
            input: String::new(),
            phase: Phase::Idle,
            keyboard: KeyboardStatus::new(),
            countdown: Countdown::new(config.round_seconds),
        }
    }

    /// Begin playing for `target`; only legal while idle
    ///
    /// Returns `false` (and changes nothing) outside `Idle`.
    pub fn start(&mut self, target: Word) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }

        log::debug!("Target word: {target}");
        self.target = Some(target);
        self.history.clear();
        self.input.clear();
        self.keyboard = KeyboardStatus::new();
        self.countdown.reset(self.config.round_seconds);
        self.phase = Phase::Playing;
        true
    }

    /// Return a finished round to `Idle`
    ///
    /// Returns `false` unless the round is in a terminal phase.
    pub fn reset(&mut self) -> bool {
        if !self.phase.is_terminal() {
            return false;
        }
        self.countdown.reset(self.config.round_seconds);
        self.target = None;
        self.phase = Phase::Idle;
        true
    }

    /// Append a letter to the input buffer
    ///
    /// No-op unless playing, the buffer has room, and `letter` is an ASCII letter.
    pub fn press_letter(&mut self, letter: char) -> bool {
        if self.phase != Phase::Playing
            || self.input.len() >= WORD_LENGTH
            || !letter.is_ascii_alphabetic()
        {
            return false;
        }
        self.input.push(letter.to_ascii_uppercase());
        true
    }

    /// Remove the last letter of the input buffer
    pub fn backspace(&mut self) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        self.input.pop().is_some()
    }

    /// Submit the input buffer as a guess
    ///
    /// On success returns the score record if the guess ended the round.
    ///
    /// # Errors
    ///
    /// - `GuessError::RoundOver` outside `Playing`
    /// - `GuessError::Incomplete` if the buffer is short
    /// - `GuessError::InvalidWord` if the word is not in `dictionary`
    ///
    /// A rejected submission changes nothing.
    pub fn submit(&mut self, dictionary: &Dictionary) -> Result<Option<ScoreRecord>, GuessError> {
        if self.phase != Phase::Playing {
            return Err(GuessError::RoundOver);
        }
        if self.input.len() != WORD_LENGTH {
            return Err(GuessError::Incomplete(self.input.len()));
        }
        if !dictionary.contains(&self.input) {
            return Err(GuessError::InvalidWord(self.input.clone()));
        }

        let (Some(target), Ok(guess)) = (self.target.as_ref(), Word::new(self.input.as_str()))
        else {
            return Err(GuessError::InvalidWord(self.input.clone()));
        };

        let feedback = Feedback::score(&guess, target);
        log::debug!("Scored {guess}: {feedback}");

        self.keyboard = self.keyboard.update(&guess, &feedback);
        self.history.push(GuessRecord {
            word: guess,
            feedback,
        });
        self.input.clear();

        if self.history.len() == 1 {
            self.countdown.start(self.config.round_seconds);
        }

        if feedback.is_perfect() {
            Ok(Some(self.finish(Phase::Won)))
        } else if self.history.len() >= self.config.max_guesses {
            Ok(Some(self.finish(Phase::Lost)))
        } else {
            Ok(None)
        }
    }

    /// Deliver a countdown tick scheduled for `generation`
    ///
    /// Ticks for a stale generation, or arriving after the round left `Playing`,
    /// have no effect.
    pub fn tick(&mut self, generation: u64) -> RoundTick {
        if self.phase != Phase::Playing {
            return RoundTick::Ignored;
        }
        match self.countdown.tick(generation) {
            TickOutcome::Ignored => RoundTick::Ignored,
            TickOutcome::Running(left) => RoundTick::Counted(left),
            TickOutcome::Expired => RoundTick::TimedOut(self.finish(Phase::TimedOut)),
        }
    }

    /// Enter a terminal phase: stop the countdown, then build the record
    fn finish(&mut self, phase: Phase) -> ScoreRecord {
        self.countdown.stop();
        self.phase = phase;

        let outcome = phase.outcome().unwrap_or(Outcome::Lost);
        let word = self.target.as_ref().map(Word::display).unwrap_or_default();
        let time_left = if phase == Phase::TimedOut {
            0
        } else {
            self.countdown.remaining()
        };

        log::info!(
            "Round finished: {} after {} guesses",
            outcome.label(),
            self.history.len()
        );
        ScoreRecord::new(word, self.history.len(), time_left, outcome)
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn target(&self) -> Option<&Word> {
        self.target.as_ref()
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Current input, uppercase
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardStatus {
        &self.keyboard
    }

    #[must_use]
    pub const fn time_remaining(&self) -> u32 {
        self.countdown.remaining()
    }

    /// Generation that tick events must carry, `None` while the countdown is stopped
    #[must_use]
    pub const fn timer_generation(&self) -> Option<u64> {
        self.countdown.active_generation()
    }

    #[must_use]
    pub const fn config(&self) -> RoundConfig {
        self.config
    }

    /// Guesses still available this round
    #[must_use]
    pub fn guesses_left(&self) -> usize {
        self.config.max_guesses.saturating_sub(self.history.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict;

    const WORDS: &str = "crane\nslate\nirate\ntrace\ncrate\nreact\ncater\nadopt\nspeed\nabide";

    fn dictionary() -> Dictionary {
        Dictionary::load(WORDS).unwrap()
    }

    fn playing(target: &str) -> Round {
        let mut round = Round::new(RoundConfig::default());
        assert!(round.start(Word::new(target).unwrap()));
        round
    }

    fn type_word(round: &mut Round, word: &str) {
        for c in word.chars() {
            round.press_letter(c);
        }
    }

    fn guess(round: &mut Round, dictionary: &Dictionary, word: &str) -> Option<ScoreRecord> {
        type_word(round, word);
        round.submit(dictionary).unwrap()
    }

    #[test]
    fn new_round_is_idle() {
        let round = Round::new(RoundConfig::default());
        assert_eq!(round.phase(), Phase::Idle);
        assert!(round.target().is_none());
        assert_eq!(round.time_remaining(), 300);
    }

    #[test]
    fn start_only_from_idle() {
        let mut round = playing("crane");
        assert!(!round.start(Word::new("slate").unwrap()));
        assert_eq!(round.target().unwrap().text(), "crane");
    }

    #[test]
    fn idle_round_ignores_input() {
        let mut round = Round::new(RoundConfig::default());
        assert!(!round.press_letter('a'));
        assert!(!round.backspace());
        assert_eq!(round.submit(&dictionary()), Err(GuessError::RoundOver));
    }

    #[test]
    fn letters_fill_up_to_word_length() {
        let mut round = playing("crane");
        type_word(&mut round, "slatex");
        assert_eq!(round.input(), "SLATE");
    }

    #[test]
    fn non_letters_are_ignored() {
        let mut round = playing("crane");
        assert!(!round.press_letter('1'));
        assert!(!round.press_letter(' '));
        assert!(!round.press_letter('é'));
        assert!(round.press_letter('c'));
        assert_eq!(round.input(), "C");
    }

    #[test]
    fn backspace_removes_last_letter() {
        let mut round = playing("crane");
        assert!(!round.backspace());
        type_word(&mut round, "sl");
        assert!(round.backspace());
        assert_eq!(round.input(), "S");
    }

    #[test]
    fn short_guess_is_rejected_without_mutation() {
        let mut round = playing("crane");
        type_word(&mut round, "sla");

        assert_eq!(round.submit(&dictionary()), Err(GuessError::Incomplete(3)));
        assert_eq!(round.input(), "SLA");
        assert!(round.history().is_empty());
        assert!(!round.countdown.is_running());
    }

    #[test]
    fn unknown_word_is_rejected_without_mutation() {
        let mut round = playing("crane");
        type_word(&mut round, "zzzzz");

        assert_eq!(
            round.submit(&dictionary()),
            Err(GuessError::InvalidWord("ZZZZZ".to_string()))
        );
        assert_eq!(round.input(), "ZZZZZ");
        assert!(round.history().is_empty());
        assert!(round.keyboard().is_empty());
        assert_eq!(round.phase(), Phase::Playing);
    }

    #[test]
    fn valid_guess_is_recorded_and_starts_timer() {
        let dictionary = dictionary();
        let mut round = playing("crane");
        assert!(round.timer_generation().is_none());

        assert_eq!(guess(&mut round, &dictionary, "slate"), None);
        assert_eq!(round.history().len(), 1);
        assert_eq!(round.input(), "");
        assert!(round.timer_generation().is_some());
        assert_eq!(round.keyboard().get('a'), Some(Verdict::Correct));
        assert_eq!(round.guesses_left(), 5);
    }

    #[test]
    fn timer_starts_only_on_first_guess() {
        let dictionary = dictionary();
        let mut round = playing("crane");
        guess(&mut round, &dictionary, "slate");
        let generation = round.timer_generation().unwrap();
        round.tick(generation);

        guess(&mut round, &dictionary, "irate");
        assert_eq!(round.timer_generation(), Some(generation));
        assert_eq!(round.time_remaining(), 299);
    }

    #[test]
    fn crane_scenario() {
        let dictionary = dictionary();
        let mut round = playing("crane");

        assert_eq!(guess(&mut round, &dictionary, "slate"), None);
        let first = round.history()[0].feedback();
        assert_eq!(
            first.verdicts(),
            &[
                Verdict::Absent,
                Verdict::Absent,
                Verdict::Correct,
                Verdict::Absent,
                Verdict::Correct
            ]
        );

        let record = guess(&mut round, &dictionary, "crane").unwrap();
        assert!(round.history()[1].feedback().is_perfect());
        assert_eq!(round.phase(), Phase::Won);
        assert_eq!(record.outcome(), Outcome::Won);
        assert_eq!(record.guess_count(), 2);
        assert_eq!(record.word(), "CRANE");
    }

    #[test]
    fn first_guess_win_keeps_full_time() {
        let dictionary = dictionary();
        let mut round = playing("crane");

        let record = guess(&mut round, &dictionary, "crane").unwrap();
        assert_eq!(round.phase(), Phase::Won);
        assert_eq!(record.guess_count(), 1);
        assert_eq!(record.time_remaining(), 300);
        assert!(round.timer_generation().is_none());
    }

    #[test]
    fn sixth_miss_loses_and_stops_timer() {
        let dictionary = dictionary();
        let mut round = playing("crane");
        let misses = ["slate", "irate", "trace", "crate", "react"];
        for word in misses {
            assert_eq!(guess(&mut round, &dictionary, word), None);
        }
        assert_eq!(round.phase(), Phase::Playing);
        let generation = round.timer_generation().unwrap();

        let record = guess(&mut round, &dictionary, "cater").unwrap();
        assert_eq!(round.phase(), Phase::Lost);
        assert_eq!(record.outcome(), Outcome::Lost);
        assert_eq!(record.guess_count(), 6);
        assert!(round.timer_generation().is_none());
        assert_eq!(round.tick(generation), RoundTick::Ignored);
    }

    #[test]
    fn terminal_round_rejects_input() {
        let dictionary = dictionary();
        let mut round = playing("crane");
        guess(&mut round, &dictionary, "crane");

        assert!(!round.press_letter('a'));
        assert_eq!(round.submit(&dictionary), Err(GuessError::RoundOver));
        assert_eq!(round.history().len(), 1);
    }

    #[test]
    fn timeout_after_three_guesses() {
        let dictionary = dictionary();
        let config = RoundConfig {
            round_seconds: 3,
            ..RoundConfig::default()
        };
        let mut round = Round::new(config);
        round.start(Word::new("crane").unwrap());
        for word in ["slate", "irate", "trace"] {
            guess(&mut round, &dictionary, word);
        }
        let generation = round.timer_generation().unwrap();

        assert_eq!(round.tick(generation), RoundTick::Counted(2));
        assert_eq!(round.tick(generation), RoundTick::Counted(1));
        let RoundTick::TimedOut(record) = round.tick(generation) else {
            panic!("expected timeout");
        };

        assert_eq!(round.phase(), Phase::TimedOut);
        assert_eq!(record.outcome(), Outcome::TimedOut);
        assert_eq!(record.time_remaining(), 0);
        assert_eq!(record.guess_count(), 3);

        assert_eq!(round.tick(generation), RoundTick::Ignored);
        assert_eq!(round.phase(), Phase::TimedOut);
    }

    #[test]
    fn submit_after_timeout_is_a_no_op() {
        let dictionary = dictionary();
        let mut round = Round::new(RoundConfig {
            round_seconds: 1,
            ..RoundConfig::default()
        });
        round.start(Word::new("crane").unwrap());
        guess(&mut round, &dictionary, "slate");
        type_word(&mut round, "cran");
        let generation = round.timer_generation().unwrap();
        assert!(matches!(round.tick(generation), RoundTick::TimedOut(_)));

        round.press_letter('e');
        assert_eq!(round.submit(&dictionary), Err(GuessError::RoundOver));
        assert_eq!(round.history().len(), 1);
    }

    #[test]
    fn reset_only_from_terminal() {
        let dictionary = dictionary();
        let mut round = playing("crane");
        assert!(!round.reset());

        guess(&mut round, &dictionary, "crane");
        assert!(round.reset());
        assert_eq!(round.phase(), Phase::Idle);
        assert_eq!(round.time_remaining(), 300);

        assert!(round.start(Word::new("slate").unwrap()));
        assert!(round.history().is_empty());
        assert!(round.keyboard().is_empty());
        assert_eq!(round.input(), "");
    }

    #[test]
    fn stale_tick_from_previous_round_is_ignored() {
        let dictionary = dictionary();
        let mut round = playing("crane");
        guess(&mut round, &dictionary, "slate");
        let old = round.timer_generation().unwrap();
        guess(&mut round, &dictionary, "crane");

        round.reset();
        round.start(Word::new("slate").unwrap());
        guess(&mut round, &dictionary, "crane");

        assert_eq!(round.tick(old), RoundTick::Ignored);
        assert_eq!(round.time_remaining(), 300);
    }
}
