//! In-flight OAuth sign-in state.
//!
//! The two fields are independent: callers set `loading_provider` when a
//! provider button is pressed and must clear both themselves once the flow
//! ends, usually through [`reset_oauth_loading`](PersistedStore::reset_oauth_loading).

use serde::{Deserialize, Serialize};

use crate::model::OAuthProvider;
use crate::store::{Persist, PersistPolicy, PersistedStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthState {
    pub is_loading: bool,
    pub loading_provider: Option<OAuthProvider>,
}

impl Persist for OAuthState {
    type Snapshot = OAuthState;
    const NAME: &'static str = "oauth-store";
    const POLICY: PersistPolicy = PersistPolicy::All;

    fn snapshot(&self) -> OAuthState {
        *self
    }

    fn restore(&mut self, snapshot: OAuthState) {
        *self = snapshot;
    }
}

pub type OAuthStore = PersistedStore<OAuthState>;

impl PersistedStore<OAuthState> {
    pub fn set_is_loading(&self, is_loading: bool) {
        self.update(|s| s.is_loading = is_loading);
    }

    pub fn set_loading_provider(&self, provider: Option<OAuthProvider>) {
        self.update(|s| s.loading_provider = provider);
    }

    pub fn reset_oauth_loading(&self) {
        self.set(OAuthState::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::test_writer;

    #[tokio::test]
    async fn flags_are_not_paired_automatically() {
        let (storage, writer) = test_writer();
        let store = OAuthStore::with_defaults(writer);

        store.set_loading_provider(Some(OAuthProvider::Google));
        assert!(!store.get().is_loading);

        store.set_is_loading(true);
        store.flush().await;
        assert_eq!(
            storage.get_raw("oauth-store").as_deref(),
            Some(&br#"{"state":{"isLoading":true,"loadingProvider":"google"},"version":0}"#[..])
        );

        store.reset_oauth_loading();
        assert_eq!(store.get(), OAuthState::default());
    }
}
