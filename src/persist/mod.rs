//! Persistence: snapshots and the storage contract.

pub mod snapshot;
pub mod store;

pub use snapshot::{SavedCell, Snapshot};
pub use store::{GameStore, MemoryStore, StoreError};
