//! Round lifecycle, countdown and the event-driven session controller

pub mod event;
pub mod round;
pub mod session;
pub mod timer;

pub use event::{EventQueue, GameEvent};
pub use round::{GuessError, GuessRecord, Phase, Round, RoundTick};
pub use session::{Effect, Session};
pub use timer::{Countdown, TickOutcome, Ticker};
