//! Persistence decorator for stores.
//!
//! A [`PersistedStore`] pairs an in-memory [`Store`] with a [`PersistWriter`].
//! Writes land in memory first; the declared snapshot is then serialized and
//! queued for the background writer, which applies storage writes one at a
//! time in enqueue order. Hydration reads the snapshot back and merges it into
//! the current state.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

use super::storage::StorageAdapter;
use super::store::{Store, SubscriptionId};
use crate::error::{StorageError, StoreError};

/// Which fields of a store survive a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistPolicy {
    /// Every field is written.
    All,
    /// Only the named fields (in their stored, camelCase spelling).
    Fields(&'static [&'static str]),
    /// Nothing is written and nothing is read back.
    Nothing,
}

impl PersistPolicy {
    pub fn is_persistent(&self) -> bool {
        !matches!(self, PersistPolicy::Nothing)
    }
}

/// State types that know how to cut out and restore their persisted subset.
pub trait Persist: Clone + Send + Sync + 'static {
    /// The serialized shape of the persisted subset.
    type Snapshot: Serialize + DeserializeOwned;

    /// Storage key.
    const NAME: &'static str;

    const POLICY: PersistPolicy;

    /// Blobs written with another version are discarded on hydration.
    const VERSION: u32 = 0;

    fn snapshot(&self) -> Self::Snapshot;

    fn restore(&mut self, snapshot: Self::Snapshot);
}

/// Placeholder snapshot for stores declared with [`PersistPolicy::Nothing`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoSnapshot {}

/// On-storage layout: `{"state": {...}, "version": 0}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<S> {
    pub state: S,
    pub version: u32,
}

/// What [`PersistedStore::hydrate`] found in storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HydrationOutcome {
    /// The persisted subset was merged into the state.
    Restored,
    /// Nothing stored under the key yet.
    Missing,
    /// Stored data was unreadable, from another version, or storage failed.
    Discarded,
    /// The store persists nothing.
    Skipped,
}

enum WriteOp {
    Set {
        key: &'static str,
        bytes: Vec<u8>,
    },
    Remove {
        key: &'static str,
        done: oneshot::Sender<Result<(), StorageError>>,
    },
    Flush(oneshot::Sender<()>),
}

/// Handle to the background task that owns all storage writes.
///
/// Cloning is cheap; every clone feeds the same ordered queue. The task ends
/// once the last handle is dropped.
#[derive(Clone)]
pub struct PersistWriter {
    tx: mpsc::UnboundedSender<WriteOp>,
    storage: Arc<dyn StorageAdapter>,
}

impl PersistWriter {
    /// Spawn the writer on the current tokio runtime.
    pub fn spawn(storage: Arc<dyn StorageAdapter>) -> Result<Self, StoreError> {
        let handle = tokio::runtime::Handle::try_current()?;
        let (tx, rx) = mpsc::unbounded_channel();
        handle.spawn(run_writer(Arc::clone(&storage), rx));
        Ok(Self { tx, storage })
    }

    pub fn storage(&self) -> &Arc<dyn StorageAdapter> {
        &self.storage
    }

    /// Queue a write without waiting for it.
    pub fn enqueue(&self, key: &'static str, bytes: Vec<u8>) {
        if self.tx.send(WriteOp::Set { key, bytes }).is_err() {
            tracing::warn!(store = key, "persistence writer stopped, dropping write");
        }
    }

    /// Wait until every write queued before this call has been applied.
    pub async fn flush(&self) {
        let (done, wait) = oneshot::channel();
        if self.tx.send(WriteOp::Flush(done)).is_err() {
            return;
        }
        let _ = wait.await;
    }

    async fn remove(&self, key: &'static str) -> Result<(), StoreError> {
        let (done, wait) = oneshot::channel();
        if self.tx.send(WriteOp::Remove { key, done }).is_err() {
            return Err(StorageError::Unavailable("persistence writer stopped".to_string()).into());
        }
        match wait.await {
            Ok(result) => result.map_err(StoreError::from),
            Err(_) => Err(StorageError::Unavailable("persistence writer stopped".to_string()).into()),
        }
    }
}

async fn run_writer(storage: Arc<dyn StorageAdapter>, mut rx: mpsc::UnboundedReceiver<WriteOp>) {
    while let Some(op) = rx.recv().await {
        match op {
            WriteOp::Set { key, bytes } => {
                let len = bytes.len();
                match storage.set(key, bytes).await {
                    Ok(()) => tracing::debug!(store = key, bytes = len, "persisted store state"),
                    Err(e) => tracing::warn!(store = key, error = %e, "failed to persist store state"),
                }
            }
            WriteOp::Remove { key, done } => {
                let _ = done.send(storage.remove(key).await);
            }
            WriteOp::Flush(done) => {
                let _ = done.send(());
            }
        }
    }
    tracing::debug!("persistence writer finished");
}

/// A [`Store`] whose declared subset is mirrored to storage.
pub struct PersistedStore<T> {
    store: Store<T>,
    writer: PersistWriter,
    hydrated: Arc<AtomicBool>,
}

impl<T: Persist> PersistedStore<T> {
    pub fn new(initial: T, writer: PersistWriter) -> Self {
        Self {
            store: Store::new(initial),
            writer,
            hydrated: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_defaults(writer: PersistWriter) -> Self
    where
        T: Default,
    {
        Self::new(T::default(), writer)
    }

    pub fn name(&self) -> &'static str {
        T::NAME
    }

    pub fn policy(&self) -> PersistPolicy {
        T::POLICY
    }

    pub fn get(&self) -> T {
        self.store.get()
    }

    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        self.store.read(f)
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.store.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    /// The undecorated in-memory store.
    pub fn store(&self) -> &Store<T> {
        &self.store
    }

    /// Change the state in memory, then queue the snapshot for storage.
    ///
    /// The snapshot is queued while the write lock is held, so concurrent
    /// writers reach storage in the same order they changed memory.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        self.store.update_then(f, |state| self.persist(state));
    }

    pub fn set(&self, new_state: T) {
        self.update(|state| *state = new_state);
    }

    fn persist(&self, state: &T) {
        if !T::POLICY.is_persistent() {
            return;
        }
        let envelope = Envelope {
            state: state.snapshot(),
            version: T::VERSION,
        };
        match serde_json::to_vec(&envelope) {
            Ok(bytes) => self.writer.enqueue(T::NAME, bytes),
            Err(e) => {
                tracing::warn!(store = T::NAME, error = %e, "failed to serialize store state")
            }
        }
    }

    /// Load the persisted subset and merge it into the current state.
    ///
    /// Never fails: anything unexpected leaves the current values in place.
    pub async fn hydrate(&self) -> HydrationOutcome {
        let outcome = self.load().await;
        self.hydrated.store(true, Ordering::SeqCst);
        tracing::debug!(store = T::NAME, ?outcome, "hydrated store");
        outcome
    }

    async fn load(&self) -> HydrationOutcome {
        if !T::POLICY.is_persistent() {
            return HydrationOutcome::Skipped;
        }
        let bytes = match self.writer.storage().get(T::NAME).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return HydrationOutcome::Missing,
            Err(e) => {
                tracing::warn!(store = T::NAME, error = %e, "failed to read persisted state");
                return HydrationOutcome::Discarded;
            }
        };
        let envelope: Envelope<T::Snapshot> = match serde_json::from_slice(&bytes) {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::warn!(store = T::NAME, error = %e, "discarding unreadable persisted state");
                return HydrationOutcome::Discarded;
            }
        };
        if envelope.version != T::VERSION {
            tracing::warn!(
                store = T::NAME,
                stored = envelope.version,
                expected = T::VERSION,
                "discarding persisted state from another version"
            );
            return HydrationOutcome::Discarded;
        }
        self.store.update(|state| state.restore(envelope.state));
        HydrationOutcome::Restored
    }

    pub fn has_hydrated(&self) -> bool {
        self.hydrated.load(Ordering::SeqCst)
    }

    /// Wait for queued writes to reach storage.
    pub async fn flush(&self) {
        self.writer.flush().await;
    }

    /// Drop the stored blob. In-memory state is left alone.
    pub async fn clear_persisted(&self) -> Result<(), StoreError> {
        self.writer.remove(T::NAME).await
    }
}

impl<T> Clone for PersistedStore<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            writer: self.writer.clone(),
            hydrated: Arc::clone(&self.hydrated),
        }
    }
}
