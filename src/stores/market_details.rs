use crate::model::StallRating;
use crate::store::{NoSnapshot, Persist, PersistPolicy, PersistedStore};

/// Market details screen state.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketDetailsState {
    pub is_checked_in: bool,
    pub stall_ratings: Vec<StallRating>,
    pub loading_ratings: bool,
    pub average_rating: Option<f64>,
}

impl Default for MarketDetailsState {
    fn default() -> Self {
        Self {
            is_checked_in: false,
            stall_ratings: Vec::new(),
            loading_ratings: true,
            average_rating: None,
        }
    }
}

impl Persist for MarketDetailsState {
    type Snapshot = NoSnapshot;
    const NAME: &'static str = "market-details-store";
    const POLICY: PersistPolicy = PersistPolicy::Nothing;

    fn snapshot(&self) -> NoSnapshot {
        NoSnapshot {}
    }

    fn restore(&mut self, _: NoSnapshot) {}
}

pub type MarketDetailsStore = PersistedStore<MarketDetailsState>;

impl PersistedStore<MarketDetailsState> {
    pub fn set_is_checked_in(&self, checked: bool) {
        self.update(|s| s.is_checked_in = checked);
    }

    pub fn set_stall_ratings(&self, ratings: Vec<StallRating>) {
        self.update(|s| s.stall_ratings = ratings);
    }

    pub fn set_loading_ratings(&self, loading: bool) {
        self.update(|s| s.loading_ratings = loading);
    }

    pub fn set_average_rating(&self, average: Option<f64>) {
        self.update(|s| s.average_rating = average);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::test_writer;
    use serde_json::json;

    #[tokio::test]
    async fn nothing_reaches_storage() {
        let (storage, writer) = test_writer();
        let store = MarketDetailsStore::with_defaults(writer);

        store.set_stall_ratings(vec![json!({"stall_name": "Bod 4", "rating": 5})]);
        store.set_average_rating(Some(4.5));
        store.set_is_checked_in(true);
        store.set_loading_ratings(false);
        store.flush().await;

        assert_eq!(store.get().stall_ratings.len(), 1);
        assert!(storage.keys().is_empty());
    }
}
