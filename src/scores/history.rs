//! Append-only score history backed by a key-value store
//!
//! The whole history lives in one storage slot as a JSON array and is rewritten
//! on every change. Memory and storage never disagree: a failed write rolls the
//! in-memory change back.

use super::{KeyValueStore, ScoreRecord, StoreError, Summary};
use crate::config::STORAGE_KEY;
use thiserror::Error;

/// Persistence failure surfaced to the caller
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("score history could not be saved: {0}")]
    Unavailable(#[from] StoreError),
}

/// Chronological list of completed rounds
pub struct ScoreLog<S: KeyValueStore> {
    store: S,
    records: Vec<ScoreRecord>,
    detached: bool,
}

impl<S: KeyValueStore> ScoreLog<S> {
    /// Load the history from `store`
    ///
    /// A missing, unreadable or corrupt slot yields an empty log.
    pub fn load(store: S) -> Self {
        let records = match store.get(STORAGE_KEY) {
            Ok(Some(json)) => serde_json::from_str(&json).unwrap_or_else(|e| {
                log::warn!("Ignoring corrupt score history: {e}");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("Score history unavailable, starting empty: {e}");
                Vec::new()
            }
        };

        Self {
            store,
            records,
            detached: false,
        }
    }

    /// Append a record and persist the full history
    ///
    /// # Errors
    ///
    /// `PersistenceError::Unavailable` if the write failed; the record is then not
    /// kept in memory either.
    pub fn append(&mut self, record: ScoreRecord) -> Result<(), PersistenceError> {
        self.records.push(record);
        if let Err(e) = self.persist() {
            self.records.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Remove every record, in storage first and then in memory
    ///
    /// # Errors
    ///
    /// `PersistenceError::Unavailable` if storage could not be cleared; the
    /// in-memory history is left as it was. A detached log still clears storage
    /// so earlier rounds do not reappear on the next load.
    pub fn clear(&mut self) -> Result<(), PersistenceError> {
        self.store.clear(STORAGE_KEY)?;
        self.records.clear();
        Ok(())
    }

    /// Stop writing to storage for the rest of the session
    ///
    /// Later appends only affect memory.
    pub fn detach(&mut self) {
        if !self.detached {
            log::warn!("Score history is now kept in memory only");
        }
        self.detached = true;
    }

    /// Whether the log has fallen back to memory only
    #[must_use]
    pub const fn is_detached(&self) -> bool {
        self.detached
    }

    /// All records, oldest first
    #[must_use]
    pub fn all(&self) -> &[ScoreRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary::from_records(&self.records)
    }

    /// Backing store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    fn persist(&mut self) -> Result<(), PersistenceError> {
        if self.detached {
            return Ok(());
        }
        let json = serde_json::to_string(&self.records).map_err(StoreError::from)?;
        self.store.set(STORAGE_KEY, &json)?;
        Ok(())
    }
}
