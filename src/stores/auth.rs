//! Supabase session state.

use serde::{Deserialize, Serialize};

use crate::model::{Session, User};
use crate::store::{Persist, PersistPolicy, PersistedStore};

#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub user: Option<User>,
    /// Still waiting for the initial session lookup.
    pub loading: bool,
    pub permissions_requested: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: None,
            user: None,
            loading: true,
            permissions_requested: false,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthSnapshot {
    pub session: Option<Session>,
    pub user: Option<User>,
}

impl Persist for AuthState {
    type Snapshot = AuthSnapshot;
    const NAME: &'static str = "auth-store";
    const POLICY: PersistPolicy = PersistPolicy::Fields(&["session", "user"]);

    fn snapshot(&self) -> AuthSnapshot {
        AuthSnapshot {
            session: self.session.clone(),
            user: self.user.clone(),
        }
    }

    fn restore(&mut self, snapshot: AuthSnapshot) {
        self.session = snapshot.session;
        self.user = snapshot.user;
    }
}

pub type AuthStore = PersistedStore<AuthState>;

impl PersistedStore<AuthState> {
    /// Replace the session; the user always follows the session.
    pub fn set_session(&self, session: Option<Session>) {
        self.update(|s| {
            s.user = session.as_ref().map(|session| session.user.clone());
            s.session = session;
        });
    }

    pub fn set_loading(&self, loading: bool) {
        self.update(|s| s.loading = loading);
    }

    pub fn set_permissions_requested(&self, requested: bool) {
        self.update(|s| s.permissions_requested = requested);
    }

    pub fn is_signed_in(&self) -> bool {
        self.read(|s| s.session.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::test_writer;

    fn session(id: &str) -> Session {
        Session {
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
            expires_in: Some(3600),
            expires_at: None,
            token_type: "bearer".to_string(),
            user: User {
                id: id.to_string(),
                email: Some("kim@example.com".to_string()),
                user_metadata: serde_json::Value::Null,
            },
        }
    }

    #[tokio::test]
    async fn session_drives_user() {
        let (_, writer) = test_writer();
        let store = AuthStore::with_defaults(writer);

        store.set_session(Some(session("u-1")));
        assert_eq!(store.get().user.map(|u| u.id), Some("u-1".to_string()));
        assert!(store.is_signed_in());

        store.set_session(None);
        assert_eq!(store.get().user, None);
    }

    #[tokio::test]
    async fn restart_restores_session_but_not_flags() {
        let (storage, writer) = test_writer();
        let store = AuthStore::with_defaults(writer.clone());
        store.set_session(Some(session("u-2")));
        store.set_loading(false);
        store.set_permissions_requested(true);
        store.flush().await;

        let raw: serde_json::Value =
            serde_json::from_slice(&storage.get_raw("auth-store").unwrap()).unwrap();
        let keys: Vec<&str> = raw["state"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["session", "user"]);

        let restarted = AuthStore::with_defaults(writer);
        restarted.hydrate().await;
        let state = restarted.get();
        assert_eq!(state.user.map(|u| u.id), Some("u-2".to_string()));
        assert!(state.loading);
        assert!(!state.permissions_requested);
    }
}
