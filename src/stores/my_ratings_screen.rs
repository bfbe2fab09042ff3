use crate::store::{NoSnapshot, Persist, PersistPolicy, PersistedStore};

/// "My ratings" screen flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MyRatingsScreenState {
    pub loading: bool,
    pub refreshing: bool,
}

impl Default for MyRatingsScreenState {
    fn default() -> Self {
        Self {
            loading: true,
            refreshing: false,
        }
    }
}

impl Persist for MyRatingsScreenState {
    type Snapshot = NoSnapshot;
    const NAME: &'static str = "my-ratings-screen-store";
    const POLICY: PersistPolicy = PersistPolicy::Nothing;

    fn snapshot(&self) -> NoSnapshot {
        NoSnapshot {}
    }

    fn restore(&mut self, _: NoSnapshot) {}
}

pub type MyRatingsScreenStore = PersistedStore<MyRatingsScreenState>;

impl PersistedStore<MyRatingsScreenState> {
    pub fn set_loading(&self, loading: bool) {
        self.update(|s| s.loading = loading);
    }

    pub fn set_refreshing(&self, refreshing: bool) {
        self.update(|s| s.refreshing = refreshing);
    }
}
