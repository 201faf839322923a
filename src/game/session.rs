//! Application controller
//!
//! A [`Session`] owns everything that lives for the whole process: the dictionary,
//! the current round, the score history and the random source. All mutations go
//! through [`Session::handle`], one event at a time.

use super::event::GameEvent;
use super::round::{GuessError, Phase, Round, RoundTick};
use crate::config::RoundConfig;
use crate::scores::{KeyValueStore, PersistenceError, ScoreLog, ScoreRecord};
use crate::wordlists::{Dictionary, DictionaryError};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// What handling an event did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Event had no effect in the current phase
    Ignored,
    /// Input buffer changed
    InputChanged,
    /// Submission refused; nothing changed
    Rejected(GuessError),
    /// Guess scored and the round continues
    Scored,
    /// Countdown moved; seconds left
    Clock(u32),
    /// Round reached a terminal phase and was recorded
    Finished(ScoreRecord),
    /// A fresh round started
    NewRound,
}

/// Game controller for one process
pub struct Session<S: KeyValueStore> {
    dictionary: Dictionary,
    round: Round,
    scores: ScoreLog<S>,
    rng: StdRng,
}

impl<S: KeyValueStore> Session<S> {
    /// Create a session seeded from the OS and start the first round
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError` if no target word can be drawn.
    pub fn new(
        dictionary: Dictionary,
        scores: ScoreLog<S>,
        config: RoundConfig,
    ) -> Result<Self, DictionaryError> {
        Self::with_rng(dictionary, scores, config, StdRng::from_os_rng())
    }

    /// Create a session with an explicit random source and start the first round
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError` if no target word can be drawn.
    pub fn with_rng(
        dictionary: Dictionary,
        scores: ScoreLog<S>,
        config: RoundConfig,
        rng: StdRng,
    ) -> Result<Self, DictionaryError> {
        let mut session = Self {
            dictionary,
            round: Round::new(config),
            scores,
            rng,
        };
        session.start_round()?;
        Ok(session)
    }

    /// Apply one event
    pub fn handle(&mut self, event: GameEvent) -> Effect {
        match event {
            GameEvent::Key(letter) => {
                if self.round.press_letter(letter) {
                    Effect::InputChanged
                } else {
                    Effect::Ignored
                }
            }
            GameEvent::Backspace => {
                if self.round.backspace() {
                    Effect::InputChanged
                } else {
                    Effect::Ignored
                }
            }
            GameEvent::Submit => match self.round.submit(&self.dictionary) {
                Ok(Some(record)) => self.record(record),
                Ok(None) => Effect::Scored,
                Err(GuessError::RoundOver) => Effect::Ignored,
                Err(e) => {
                    log::debug!("Guess rejected: {e}");
                    Effect::Rejected(e)
                }
            },
            GameEvent::Tick { generation } => match self.round.tick(generation) {
                RoundTick::Ignored => Effect::Ignored,
                RoundTick::Counted(left) => Effect::Clock(left),
                RoundTick::TimedOut(record) => self.record(record),
            },
            GameEvent::Reset => self.reset(),
        }
    }

    /// Tick the running countdown, if any
    pub fn tick(&mut self) -> Effect {
        match self.round.timer_generation() {
            Some(generation) => self.handle(GameEvent::Tick { generation }),
            None => Effect::Ignored,
        }
    }

    /// Clear the score history
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError` if storage could not be cleared.
    pub fn clear_scores(&mut self) -> Result<(), PersistenceError> {
        self.scores.clear()
    }

    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub const fn scores(&self) -> &ScoreLog<S> {
        &self.scores
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    fn reset(&mut self) -> Effect {
        let ready = match self.round.phase() {
            Phase::Idle => true,
            phase if phase.is_terminal() => self.round.reset(),
            _ => false,
        };
        if !ready {
            return Effect::Ignored;
        }
        match self.start_round() {
            Ok(()) => Effect::NewRound,
            Err(e) => {
                log::error!("Cannot start a new round: {e}");
                Effect::Ignored
            }
        }
    }

    fn start_round(&mut self) -> Result<(), DictionaryError> {
        let target = self.dictionary.random_word(&mut self.rng)?.clone();
        self.round.start(target);
        log::info!("Round started");
        Ok(())
    }

    /// Append a finished round, degrading to memory-only history on failure
    fn record(&mut self, record: ScoreRecord) -> Effect {
        if let Err(e) = self.scores.append(record.clone()) {
            log::warn!("{e}");
            self.scores.detach();
            if let Err(e) = self.scores.append(record.clone()) {
                log::warn!("{e}");
            }
        }
        Effect::Finished(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::STORAGE_KEY;
    use crate::scores::{MemoryStore, Outcome, StoreError};

    const WORDS: &str = "crane\nslate\nirate\ntrace\ncrate\nreact\ncater";

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable("offline".into()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("offline".into()))
        }

        fn clear(&mut self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("offline".into()))
        }
    }

    fn session_with<S: KeyValueStore>(store: S, config: RoundConfig) -> Session<S> {
        let dictionary = Dictionary::load(WORDS).unwrap();
        Session::with_rng(
            dictionary,
            ScoreLog::load(store),
            config,
            StdRng::seed_from_u64(1),
        )
        .unwrap()
    }

    fn session() -> Session<MemoryStore> {
        session_with(MemoryStore::new(), RoundConfig::default())
    }

    fn enter<S: KeyValueStore>(session: &mut Session<S>, word: &str) -> Effect {
        for c in word.chars() {
            session.handle(GameEvent::Key(c));
        }
        session.handle(GameEvent::Submit)
    }

    fn target<S: KeyValueStore>(session: &Session<S>) -> String {
        session.round().target().unwrap().text().to_string()
    }

    fn miss<S: KeyValueStore>(session: &Session<S>) -> &'static str {
        let target = target(session);
        ["slate", "irate", "trace", "crate", "react", "cater", "crane"]
            .into_iter()
            .find(|w| *w != target)
            .unwrap()
    }

    #[test]
    fn starts_playing_with_target_from_dictionary() {
        let session = session();
        assert_eq!(session.round().phase(), Phase::Playing);
        assert!(session.dictionary().contains(&target(&session)));
    }

    #[test]
    fn key_events_edit_input() {
        let mut session = session();
        assert_eq!(session.handle(GameEvent::Key('c')), Effect::InputChanged);
        assert_eq!(session.handle(GameEvent::Key('7')), Effect::Ignored);
        assert_eq!(session.handle(GameEvent::Backspace), Effect::InputChanged);
        assert_eq!(session.handle(GameEvent::Backspace), Effect::Ignored);
    }

    #[test]
    fn invalid_word_is_rejected() {
        let mut session = session();
        let effect = enter(&mut session, "qqqqq");
        assert_eq!(
            effect,
            Effect::Rejected(GuessError::InvalidWord("QQQQQ".into()))
        );
        assert!(session.round().history().is_empty());
    }

    #[test]
    fn win_appends_one_record() {
        let mut session = session();
        let word = target(&session);
        let miss = miss(&session);

        assert_eq!(enter(&mut session, miss), Effect::Scored);
        let Effect::Finished(record) = enter(&mut session, &word) else {
            panic!("expected finish");
        };

        assert_eq!(record.outcome(), Outcome::Won);
        assert_eq!(record.guess_count(), 2);
        assert_eq!(session.scores().len(), 1);
        assert_eq!(session.scores().all()[0], record);

        let json = session.scores().store().get(STORAGE_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["won"], true);
        assert_eq!(value[0]["timeout"], false);
        assert_eq!(value[0]["guesses"], 2);
    }

    #[test]
    fn timeout_records_once_and_ignores_later_ticks() {
        let mut session = session_with(
            MemoryStore::new(),
            RoundConfig {
                round_seconds: 2,
                ..RoundConfig::default()
            },
        );
        let miss = miss(&session);
        enter(&mut session, miss);

        assert_eq!(session.tick(), Effect::Clock(1));
        let Effect::Finished(record) = session.tick() else {
            panic!("expected timeout");
        };
        assert_eq!(record.outcome(), Outcome::TimedOut);
        assert_eq!(record.time_remaining(), 0);
        assert_eq!(session.round().phase(), Phase::TimedOut);

        assert_eq!(session.tick(), Effect::Ignored);
        assert_eq!(session.handle(GameEvent::Tick { generation: 1 }), Effect::Ignored);
        assert_eq!(session.scores().len(), 1);
    }

    #[test]
    fn submit_after_timeout_loses_the_race() {
        let mut session = session_with(
            MemoryStore::new(),
            RoundConfig {
                round_seconds: 1,
                ..RoundConfig::default()
            },
        );
        let word = target(&session);
        let miss = miss(&session);
        enter(&mut session, miss);
        for c in word.chars() {
            session.handle(GameEvent::Key(c));
        }

        assert!(matches!(session.tick(), Effect::Finished(_)));
        assert_eq!(session.handle(GameEvent::Submit), Effect::Ignored);
        assert_eq!(session.scores().len(), 1);
    }

    #[test]
    fn reset_ignored_while_playing() {
        let mut session = session();
        assert_eq!(session.handle(GameEvent::Reset), Effect::Ignored);
        assert_eq!(session.round().phase(), Phase::Playing);
    }

    #[test]
    fn reset_after_finish_starts_new_round() {
        let mut session = session();
        let word = target(&session);
        let miss = miss(&session);
        enter(&mut session, miss);
        let old_generation = session.round().timer_generation().unwrap();
        enter(&mut session, &word);

        assert_eq!(session.handle(GameEvent::Reset), Effect::NewRound);
        assert_eq!(session.round().phase(), Phase::Playing);
        assert!(session.round().history().is_empty());
        assert_eq!(session.round().time_remaining(), 300);
        assert_eq!(
            session.handle(GameEvent::Tick {
                generation: old_generation
            }),
            Effect::Ignored
        );
        assert_eq!(session.round().time_remaining(), 300);
    }

    #[test]
    fn persistence_failure_degrades_to_memory() {
        let mut session = session_with(BrokenStore, RoundConfig::default());
        let word = target(&session);

        assert!(matches!(enter(&mut session, &word), Effect::Finished(_)));
        assert!(session.scores().is_detached());
        assert_eq!(session.scores().len(), 1);

        session.handle(GameEvent::Reset);
        let word = target(&session);
        enter(&mut session, &word);
        assert_eq!(session.scores().len(), 2);
    }

    #[test]
    fn clear_scores_empties_history() {
        let mut session = session();
        let word = target(&session);
        enter(&mut session, &word);

        session.clear_scores().unwrap();
        assert!(session.scores().is_empty());
        assert_eq!(session.scores().store().get(STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn rounds_are_reproducible_with_same_seed() {
        let a = session();
        let b = session();
        assert_eq!(target(&a), target(&b));
    }
}
