//! The persistence contract.
//!
//! The engine persists opportunistically after every mutation and never
//! treats storage as load-bearing: a store failure is logged and play
//! continues. Snapshot and best score are two independent records; the
//! best score survives `start_game` and snapshot clears.
//!
//! `MemoryStore` is the reference implementation. Real hosts wrap whatever
//! medium they have (files, browser storage, a database) behind the same
//! trait.

use std::cell::RefCell;
use std::rc::Rc;

use derive_more::{Display, Error};

/// Error from a persistence backend.
#[derive(Debug, Clone, Display, Error)]
#[display("store error: {message}")]
pub struct StoreError {
    /// What went wrong, in the backend's terms.
    pub message: String,
}

impl StoreError {
    /// Create a new store error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Storage backend for game snapshots and the best score.
pub trait GameStore {
    /// Load the saved snapshot bytes, if any.
    fn load_snapshot(&mut self) -> Result<Option<Vec<u8>>, StoreError>;

    /// Save snapshot bytes, replacing any previous snapshot.
    fn save_snapshot(&mut self, bytes: &[u8]) -> Result<(), StoreError>;

    /// Delete the saved snapshot.
    fn clear_snapshot(&mut self) -> Result<(), StoreError>;

    /// Load the best score, if one was ever saved.
    fn load_best_score(&mut self) -> Result<Option<u32>, StoreError>;

    /// Save the best score.
    fn save_best_score(&mut self, score: u32) -> Result<(), StoreError>;

    /// Delete the best score.
    fn clear_best_score(&mut self) -> Result<(), StoreError>;
}

#[derive(Debug, Default)]
struct MemoryRecords {
    snapshot: Option<Vec<u8>>,
    best_score: Option<u32>,
}

/// In-memory store.
///
/// Cloning yields a handle onto the same records, so a test can keep one
/// handle while the engine owns another and inspect what was persisted.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    records: Rc<RefCell<MemoryRecords>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a snapshot is currently saved.
    #[must_use]
    pub fn has_snapshot(&self) -> bool {
        self.records.borrow().snapshot.is_some()
    }

    /// The saved best score, if any.
    #[must_use]
    pub fn best_score(&self) -> Option<u32> {
        self.records.borrow().best_score
    }

    /// Seed the store with snapshot bytes (test setup).
    pub fn set_snapshot(&self, bytes: Vec<u8>) {
        self.records.borrow_mut().snapshot = Some(bytes);
    }

    /// Seed the store with a best score (test setup).
    pub fn set_best_score(&self, score: u32) {
        self.records.borrow_mut().best_score = Some(score);
    }
}

impl GameStore for MemoryStore {
    fn load_snapshot(&mut self) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.records.borrow().snapshot.clone())
    }

    fn save_snapshot(&mut self, bytes: &[u8]) -> Result<(), StoreError> {
        self.records.borrow_mut().snapshot = Some(bytes.to_vec());
        Ok(())
    }

    fn clear_snapshot(&mut self) -> Result<(), StoreError> {
        self.records.borrow_mut().snapshot = None;
        Ok(())
    }

    fn load_best_score(&mut self) -> Result<Option<u32>, StoreError> {
        Ok(self.records.borrow().best_score)
    }

    fn save_best_score(&mut self, score: u32) -> Result<(), StoreError> {
        self.records.borrow_mut().best_score = Some(score);
        Ok(())
    }

    fn clear_best_score(&mut self) -> Result<(), StoreError> {
        self.records.borrow_mut().best_score = None;
        Ok(())
    }
}
