//! Round countdown and tick scheduling
//!
//! [`Countdown`] is the cancellable timer owned by a round. Every `start` or `stop`
//! opens a new generation; a tick carries the generation it was scheduled for and
//! is ignored once that generation is gone, so a tick queued before a reset can
//! never touch the next round.
//!
//! [`Ticker`] decides when tick events are due for the running generation. It
//! takes the current time as a `Duration` from some fixed origin so it can be
//! driven by a real clock or by tests.

use std::time::Duration;

/// Result of delivering one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Stale generation or countdown not running
    Ignored,
    /// Counted down; seconds left
    Running(u32),
    /// Reached zero on this tick; the countdown has stopped itself
    Expired,
}

/// Cancellable countdown in whole seconds
#[derive(Debug, Clone)]
pub struct Countdown {
    remaining: u32,
    running: bool,
    generation: u64,
}

impl Countdown {
    /// Stopped countdown showing `initial_seconds`
    #[must_use]
    pub const fn new(initial_seconds: u32) -> Self {
        Self {
            remaining: initial_seconds,
            running: false,
            generation: 0,
        }
    }

    /// Start counting from `initial_seconds`, cancelling any pending tick
    ///
    /// Returns the generation that ticks must carry.
    pub fn start(&mut self, initial_seconds: u32) -> u64 {
        self.generation += 1;
        self.remaining = initial_seconds;
        self.running = true;
        log::debug!(
            "Timer started at {initial_seconds}s (generation {})",
            self.generation
        );
        self.generation
    }

    /// Stop counting; ticks already scheduled have no further effect
    pub fn stop(&mut self) {
        if self.running {
            log::debug!("Timer stopped at {}s", self.remaining);
        }
        self.running = false;
        self.generation += 1;
    }

    /// Stop and show `initial_seconds` again
    pub fn reset(&mut self, initial_seconds: u32) {
        self.stop();
        self.remaining = initial_seconds;
    }

    /// Count down one second for the given generation
    pub fn tick(&mut self, generation: u64) -> TickOutcome {
        if !self.running || generation != self.generation {
            return TickOutcome::Ignored;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.stop();
            TickOutcome::Expired
        } else {
            TickOutcome::Running(self.remaining)
        }
    }

    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    #[inline]
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Generation of the running countdown, `None` when stopped
    #[must_use]
    pub const fn active_generation(&self) -> Option<u64> {
        if self.running {
            Some(self.generation)
        } else {
            None
        }
    }
}

/// Schedules at most one tick per interval for the running generation
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    generation: Option<u64>,
    next_due: Duration,
}

impl Ticker {
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            generation: None,
            next_due: Duration::ZERO,
        }
    }

    /// Follow the countdown's active generation; a new generation restarts the
    /// schedule one interval from `now`
    pub fn sync(&mut self, generation: Option<u64>, now: Duration) {
        if generation != self.generation {
            self.generation = generation;
            self.next_due = now + self.interval;
        }
    }

    /// Generation to tick if a tick is due at `now`
    ///
    /// Each call yields at most one tick and advances the schedule by one
    /// interval, so a late caller catches up one slot at a time.
    pub fn poll(&mut self, now: Duration) -> Option<u64> {
        let generation = self.generation?;
        if now < self.next_due {
            return None;
        }
        self.next_due += self.interval;
        Some(generation)
    }

    /// How long to wait before the next tick, `None` when idle
    #[must_use]
    pub fn until_due(&self, now: Duration) -> Option<Duration> {
        self.generation
            .map(|_| self.next_due.saturating_sub(now))
    }
}
