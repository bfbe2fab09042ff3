//! State containers and their persistence.
//!
//! [`Store`] is the in-memory holder with subscriptions. [`PersistedStore`]
//! decorates it with a [`StorageAdapter`] so a declared subset of the state
//! survives restarts.

mod persist;
mod storage;
mod store;

pub use persist::{
    Envelope, HydrationOutcome, NoSnapshot, Persist, PersistPolicy, PersistWriter, PersistedStore,
};
pub use storage::{FileStorage, MemoryStorage, StorageAdapter};
pub use store::{Store, SubscriptionId};
