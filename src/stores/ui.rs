use serde::{Deserialize, Serialize};

use crate::model::{GeoPoint, Market, StallRating, Stats};
use crate::store::{Persist, PersistPolicy, PersistedStore};

/// Shared screen data. Only the headline stats are kept across restarts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UiState {
    pub refresh_key: u64,
    pub is_admin: bool,
    pub stats: Stats,
    pub markets: Vec<Market>,
    pub user_location: Option<GeoPoint>,
    pub filtered_markets: Vec<Market>,
    pub ratings: Vec<StallRating>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UiSnapshot {
    pub stats: Stats,
}

impl Persist for UiState {
    type Snapshot = UiSnapshot;
    const NAME: &'static str = "ui-store";
    const POLICY: PersistPolicy = PersistPolicy::Fields(&["stats"]);

    fn snapshot(&self) -> UiSnapshot {
        UiSnapshot { stats: self.stats }
    }

    fn restore(&mut self, snapshot: UiSnapshot) {
        self.stats = snapshot.stats;
    }
}

pub type UiStore = PersistedStore<UiState>;

impl PersistedStore<UiState> {
    pub fn set_refresh_key(&self, key: u64) {
        self.update(|s| s.refresh_key = key);
    }

    pub fn set_is_admin(&self, is_admin: bool) {
        self.update(|s| s.is_admin = is_admin);
    }

    pub fn set_stats(&self, stats: Stats) {
        self.update(|s| s.stats = stats);
    }

    pub fn set_markets(&self, markets: Vec<Market>) {
        self.update(|s| s.markets = markets);
    }

    pub fn set_user_location(&self, location: Option<GeoPoint>) {
        self.update(|s| s.user_location = location);
    }

    pub fn set_filtered_markets(&self, markets: Vec<Market>) {
        self.update(|s| s.filtered_markets = markets);
    }

    pub fn set_ratings(&self, ratings: Vec<StallRating>) {
        self.update(|s| s.ratings = ratings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::test_writer;

    #[tokio::test]
    async fn stats_survive_market_lists_do_not() {
        let (_, writer) = test_writer();
        let store = UiStore::with_defaults(writer.clone());
        store.set_stats(Stats {
            ratings_count: 12,
            markets_count: 40,
        });
        store.set_markets(vec![Market::default()]);
        store.set_user_location(Some(GeoPoint {
            latitude: 55.68,
            longitude: 12.57,
        }));
        store.set_is_admin(true);
        store.set_refresh_key(3);
        store.flush().await;

        let restarted = UiStore::with_defaults(writer);
        restarted.hydrate().await;
        let state = restarted.get();
        assert_eq!(state.stats.markets_count, 40);
        assert!(state.markets.is_empty());
        assert_eq!(state.user_location, None);
        assert!(!state.is_admin);
        assert_eq!(state.refresh_key, 0);
    }
}
