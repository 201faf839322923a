//! Score history
//!
//! Completed rounds are appended to a [`ScoreLog`] which writes the whole history
//! through a [`KeyValueStore`] on every change.

mod history;
mod record;
mod store;
mod summary;

pub use history::{PersistenceError, ScoreLog};
pub use record::{Outcome, ScoreRecord};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
pub use summary::Summary;
