use serde::{Deserialize, Serialize};

use crate::store::{Persist, PersistPolicy, PersistedStore};

/// Markets list screen. The search query is remembered between launches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MarketsScreenState {
    pub is_loading: bool,
    pub search_query: String,
    pub refreshing: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketsScreenSnapshot {
    pub search_query: String,
}

impl Persist for MarketsScreenState {
    type Snapshot = MarketsScreenSnapshot;
    const NAME: &'static str = "markets-screen-store";
    const POLICY: PersistPolicy = PersistPolicy::Fields(&["searchQuery"]);

    fn snapshot(&self) -> MarketsScreenSnapshot {
        MarketsScreenSnapshot {
            search_query: self.search_query.clone(),
        }
    }

    fn restore(&mut self, snapshot: MarketsScreenSnapshot) {
        self.search_query = snapshot.search_query;
    }
}

pub type MarketsScreenStore = PersistedStore<MarketsScreenState>;

impl PersistedStore<MarketsScreenState> {
    pub fn set_is_loading(&self, loading: bool) {
        self.update(|s| s.is_loading = loading);
    }

    pub fn set_search_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.update(|s| s.search_query = query);
    }

    pub fn set_refreshing(&self, refreshing: bool) {
        self.update(|s| s.refreshing = refreshing);
    }
}
