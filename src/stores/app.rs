//! Global app selections: the market in focus and the UI language.

use serde::{Deserialize, Serialize};

use crate::model::{Language, Market};
use crate::store::{Persist, PersistPolicy, PersistedStore};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub selected_market: Option<Market>,
    pub language: Language,
}

impl Persist for AppState {
    type Snapshot = AppState;
    // Renamed from `app-store`; blobs under the old key are ignored
    const NAME: &'static str = "app-store-v2";
    const POLICY: PersistPolicy = PersistPolicy::All;

    fn snapshot(&self) -> AppState {
        self.clone()
    }

    fn restore(&mut self, snapshot: AppState) {
        *self = snapshot;
    }
}

pub type AppStore = PersistedStore<AppState>;

impl PersistedStore<AppState> {
    pub fn set_selected_market(&self, market: Option<Market>) {
        self.update(|s| s.selected_market = market);
    }

    pub fn set_language(&self, language: Language) {
        self.update(|s| s.language = language);
    }

    pub fn language(&self) -> Language {
        self.read(|s| s.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::test_writer;

    #[tokio::test]
    async fn persists_every_field() {
        let (storage, writer) = test_writer();
        let store = AppStore::with_defaults(writer);
        assert_eq!(store.language(), Language::Da);

        store.set_language(Language::En);
        store.flush().await;

        let raw = String::from_utf8(storage.get_raw("app-store-v2").unwrap()).unwrap();
        assert_eq!(
            raw,
            r#"{"state":{"selectedMarket":null,"language":"en"},"version":0}"#
        );
    }
}
