//! # Loppestars
//!
//! Client-side state and presentation plumbing for the Loppestars flea market
//! app.
//!
//! ## Stores
//!
//! - [`Store<T>`] - thread-safe state container with subscriptions
//! - [`PersistedStore<T>`] - a store whose declared subset is mirrored to a
//!   [`StorageAdapter`] and hydrated back on startup
//! - [`AppStores`] - every store the app uses, built once and passed around
//!
//! ## Presentation
//!
//! [`components`] maps app-level variants (button looks, text styles, toast
//! kinds) onto the UI kit's appearance/status/category props.
//!
//! ## Helpers
//!
//! - [`text`] - market name cleanup and HTML entity decoding
//! - [`api`] - backend HTTP client
//! - [`config`], [`logging`]

pub mod api;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod store;
pub mod stores;
pub mod text;

// Re-export main types for convenience
pub use config::Config;
pub use error::{ApiError, ConfigError, StorageError, StoreError};
pub use store::{
    FileStorage, HydrationOutcome, MemoryStorage, Persist, PersistPolicy, PersistedStore,
    StorageAdapter, Store,
};
pub use stores::AppStores;
pub use text::{clean_market_name, decode_html_entities};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        // Basic smoke test
        let store = Store::new(0);
        assert_eq!(store.get(), 0);
        store.set(42);
        assert_eq!(store.get(), 42);
    }
}
