//! Game events and the ordered queue that feeds them to a session
//!
//! Input devices and the tick scheduler are only producers: they push
//! [`GameEvent`]s, and the queue applies them to the [`Session`] strictly in
//! arrival order. When a submit and a timer expiry race, whichever was queued
//! first wins and the other finds the round already over.

use super::session::{Effect, Session};
use crate::scores::KeyValueStore;
use std::collections::VecDeque;

/// Everything that can mutate a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Key(char),
    Backspace,
    Submit,
    Reset,
    Tick { generation: u64 },
}

impl GameEvent {
    /// Expand a typed line into key presses followed by submit
    #[must_use]
    pub fn from_line(line: &str) -> Vec<Self> {
        line.chars()
            .filter(|c| !c.is_whitespace())
            .map(Self::Key)
            .chain(std::iter::once(Self::Submit))
            .collect()
    }
}

/// FIFO of pending events
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<GameEvent>,
}

impl EventQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.events.push_back(event);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Apply every queued event in order, returning the effects that did something
    pub fn dispatch<S: KeyValueStore>(&mut self, session: &mut Session<S>) -> Vec<Effect> {
        let mut effects = Vec::new();
        while let Some(event) = self.events.pop_front() {
            let effect = session.handle(event);
            if effect != Effect::Ignored {
                effects.push(effect);
            }
        }
        effects
    }
}

impl Extend<GameEvent> for EventQueue {
    fn extend<T: IntoIterator<Item = GameEvent>>(&mut self, iter: T) {
        self.events.extend(iter);
    }
}
