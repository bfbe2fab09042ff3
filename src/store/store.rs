use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

type Subscriber<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Handle returned by [`Store::subscribe`], used to detach the callback again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscribers<T> {
    next_id: AtomicU64,
    entries: RwLock<Vec<(SubscriptionId, Subscriber<T>)>>,
}

/// A thread-safe container for one slice of UI state.
///
/// Every write replaces the state synchronously and then notifies the
/// subscribers, so a read right after a setter always sees the new value.
/// Clones share the same state.
pub struct Store<T> {
    state: Arc<RwLock<T>>,
    subscribers: Arc<Subscribers<T>>,
}

impl<T: Clone> Store<T> {
    /// Create a new store with the given initial state.
    pub fn new(initial: T) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial)),
            subscribers: Arc::new(Subscribers {
                next_id: AtomicU64::new(0),
                entries: RwLock::new(Vec::new()),
            }),
        }
    }

    /// Get a clone of the current state.
    pub fn get(&self) -> T {
        self.read_guard().clone()
    }

    /// Update the state using a function.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        {
            let mut state = self.write_guard();
            f(&mut *state);
        }
        self.notify();
    }

    /// Set a new state value.
    pub fn set(&self, new_state: T) {
        *self.write_guard() = new_state;
        self.notify();
    }

    /// Like [`update`](Self::update), but `then` sees the new state before
    /// the write lock is released.
    pub(crate) fn update_then<F, G>(&self, f: F, then: G)
    where
        F: FnOnce(&mut T),
        G: FnOnce(&T),
    {
        {
            let mut state = self.write_guard();
            f(&mut *state);
            then(&*state);
        }
        self.notify();
    }

    /// Subscribe to state changes.
    ///
    /// The callback will be called whenever the state is updated.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.subscribers.next_id.fetch_add(1, Ordering::SeqCst));
        self.subscribers
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(callback)));
        id
    }

    /// Detach a subscriber. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut entries = self
            .subscribers
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = entries.len();
        entries.retain(|(entry_id, _)| *entry_id != id);
        entries.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Read state without cloning it.
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&*self.read_guard())
    }

    /// Notify all subscribers of a state change.
    ///
    /// Callbacks run on a snapshot so they may call back into the store.
    fn notify(&self) {
        let snapshot = self.get();
        let subscribers: Vec<Subscriber<T>> = self
            .subscribers
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, subscriber)| Arc::clone(subscriber))
            .collect();
        for subscriber in subscribers {
            subscriber(&snapshot);
        }
    }

    fn read_guard(&self) -> RwLockReadGuard<'_, T> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, T> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Clone + Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}
