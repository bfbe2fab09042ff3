use crate::store::Store;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthWrapperState {
    pub show_splash: bool,
}

impl Default for AuthWrapperState {
    fn default() -> Self {
        Self { show_splash: true }
    }
}

/// Splash visibility around the auth gate. Never persisted.
pub type AuthWrapperStore = Store<AuthWrapperState>;

impl Store<AuthWrapperState> {
    pub fn set_show_splash(&self, show: bool) {
        self.update(|s| s.show_splash = show);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splash_starts_visible() {
        let store = AuthWrapperStore::default();
        assert!(store.get().show_splash);
        store.set_show_splash(false);
        assert!(!store.get().show_splash);
    }
}
