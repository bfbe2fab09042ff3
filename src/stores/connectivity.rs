use serde::{Deserialize, Serialize};

use crate::model::{ConnectivityStatus, OverallHealth};
use crate::store::{Persist, PersistPolicy, PersistedStore};

/// Result of the last backend probe. The status is kept across restarts so
/// the splash screen has something to show before the next probe finishes.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectivityState {
    pub status: Option<ConnectivityStatus>,
    pub is_checking: bool,
}

impl Default for ConnectivityState {
    fn default() -> Self {
        Self {
            status: None,
            is_checking: true,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ConnectivitySnapshot {
    pub status: Option<ConnectivityStatus>,
}

impl Persist for ConnectivityState {
    type Snapshot = ConnectivitySnapshot;
    const NAME: &'static str = "connectivity-store";
    const POLICY: PersistPolicy = PersistPolicy::Fields(&["status"]);

    fn snapshot(&self) -> ConnectivitySnapshot {
        ConnectivitySnapshot {
            status: self.status.clone(),
        }
    }

    fn restore(&mut self, snapshot: ConnectivitySnapshot) {
        self.status = snapshot.status;
    }
}

pub type ConnectivityStore = PersistedStore<ConnectivityState>;

impl PersistedStore<ConnectivityState> {
    pub fn set_status(&self, status: Option<ConnectivityStatus>) {
        self.update(|s| s.status = status);
    }

    pub fn set_is_checking(&self, is_checking: bool) {
        self.update(|s| s.is_checking = is_checking);
    }

    /// Offline only once a probe has actually reported it.
    pub fn is_offline(&self) -> bool {
        self.read(|s| {
            s.status
                .as_ref()
                .is_some_and(|status| status.overall == OverallHealth::Offline)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ApiHealth, DatabaseHealth};
    use crate::stores::test_writer;

    #[tokio::test]
    async fn status_round_trips_through_storage() {
        let (_, writer) = test_writer();
        let store = ConnectivityStore::with_defaults(writer.clone());
        assert!(!store.is_offline());

        store.set_status(Some(ConnectivityStatus::from_parts(
            DatabaseHealth::default(),
            ApiHealth::default(),
        )));
        store.set_is_checking(false);
        assert!(store.is_offline());
        store.flush().await;

        let restarted = ConnectivityStore::with_defaults(writer);
        restarted.hydrate().await;
        assert!(restarted.is_offline());
        assert!(restarted.get().is_checking);
    }
}
