//! The app's state containers and their composition root.
//!
//! Each submodule owns one disjoint slice of UI state. Stores never touch
//! each other; screens coordinate them by calling setters in sequence.
//! [`AppStores`] builds every store once, sharing a single persistence
//! writer, and is handed to the UI instead of module-level globals.

mod app;
mod auth;
mod auth_wrapper;
mod camera_modal;
mod connectivity;
mod market_details;
mod market_item;
mod markets_screen;
mod my_ratings_screen;
mod oauth;
mod photo_upload;
mod rating_form;
mod scraping;
mod toast;
mod ui;

pub use app::{AppState, AppStore};
pub use auth::{AuthSnapshot, AuthState, AuthStore};
pub use auth_wrapper::{AuthWrapperState, AuthWrapperStore};
pub use camera_modal::{CameraModalSnapshot, CameraModalState, CameraModalStore};
pub use connectivity::{ConnectivitySnapshot, ConnectivityState, ConnectivityStore};
pub use market_details::{MarketDetailsState, MarketDetailsStore};
pub use market_item::{MarketItemState, MarketItemStore};
pub use markets_screen::{MarketsScreenSnapshot, MarketsScreenState, MarketsScreenStore};
pub use my_ratings_screen::{MyRatingsScreenState, MyRatingsScreenStore};
pub use oauth::{OAuthState, OAuthStore};
pub use photo_upload::{PhotoUploadState, PhotoUploadStore};
pub use rating_form::{RatingFormSnapshot, RatingFormState, RatingFormStore, DEFAULT_RATING};
pub use scraping::{ScrapingState, ScrapingStore};
pub use toast::{ToastState, ToastStore};
pub use ui::{UiSnapshot, UiState, UiStore};

use std::sync::Arc;

use crate::config::Config;
use crate::error::StoreError;
use crate::store::{HydrationOutcome, Persist, PersistPolicy, PersistWriter, StorageAdapter};

/// Storage key and policy of every store wrapped in the persistence decorator.
pub const PERSISTED_STORES: &[(&str, PersistPolicy)] = &[
    (AppState::NAME, AppState::POLICY),
    (AuthState::NAME, AuthState::POLICY),
    (CameraModalState::NAME, CameraModalState::POLICY),
    (ConnectivityState::NAME, ConnectivityState::POLICY),
    (MarketDetailsState::NAME, MarketDetailsState::POLICY),
    (MarketsScreenState::NAME, MarketsScreenState::POLICY),
    (MyRatingsScreenState::NAME, MyRatingsScreenState::POLICY),
    (OAuthState::NAME, OAuthState::POLICY),
    (RatingFormState::NAME, RatingFormState::POLICY),
    (ToastState::NAME, ToastState::POLICY),
    (UiState::NAME, UiState::POLICY),
];

/// Every store the app uses, built once per process.
#[derive(Clone)]
pub struct AppStores {
    pub app: AppStore,
    pub auth: AuthStore,
    pub auth_wrapper: AuthWrapperStore,
    pub camera_modal: CameraModalStore,
    pub connectivity: ConnectivityStore,
    pub market_details: MarketDetailsStore,
    pub market_item: MarketItemStore,
    pub markets_screen: MarketsScreenStore,
    pub my_ratings_screen: MyRatingsScreenStore,
    pub oauth: OAuthStore,
    pub photo_upload: PhotoUploadStore,
    pub rating_form: RatingFormStore,
    pub scraping: ScrapingStore,
    pub toast: ToastStore,
    pub ui: UiStore,
    writer: PersistWriter,
}

impl AppStores {
    /// Build all stores with their defaults. Must run inside a tokio runtime.
    ///
    /// Stores read as defaults until [`hydrate_all`](Self::hydrate_all) runs.
    pub fn new(storage: Arc<dyn StorageAdapter>) -> Result<Self, StoreError> {
        let writer = PersistWriter::spawn(storage)?;
        Ok(Self {
            app: AppStore::with_defaults(writer.clone()),
            auth: AuthStore::with_defaults(writer.clone()),
            auth_wrapper: AuthWrapperStore::default(),
            camera_modal: CameraModalStore::with_defaults(writer.clone()),
            connectivity: ConnectivityStore::with_defaults(writer.clone()),
            market_details: MarketDetailsStore::with_defaults(writer.clone()),
            market_item: MarketItemStore::default(),
            markets_screen: MarketsScreenStore::with_defaults(writer.clone()),
            my_ratings_screen: MyRatingsScreenStore::with_defaults(writer.clone()),
            oauth: OAuthStore::with_defaults(writer.clone()),
            photo_upload: PhotoUploadStore::default(),
            rating_form: RatingFormStore::with_defaults(writer.clone()),
            scraping: ScrapingStore::default(),
            toast: ToastStore::with_defaults(writer.clone()),
            ui: UiStore::with_defaults(writer.clone()),
            writer,
        })
    }

    /// Build all stores on the storage backend `config` selects.
    pub fn from_config(config: &Config) -> Result<Self, StoreError> {
        Self::new(config.storage())
    }

    /// Hydrate every persisted store concurrently. Best effort: a store whose
    /// data is missing or broken simply keeps its defaults.
    pub async fn hydrate_all(&self) -> Vec<(&'static str, HydrationOutcome)> {
        let (app, auth, camera_modal, connectivity, market_details, markets_screen) = tokio::join!(
            self.app.hydrate(),
            self.auth.hydrate(),
            self.camera_modal.hydrate(),
            self.connectivity.hydrate(),
            self.market_details.hydrate(),
            self.markets_screen.hydrate(),
        );
        let (my_ratings_screen, oauth, rating_form, toast, ui) = tokio::join!(
            self.my_ratings_screen.hydrate(),
            self.oauth.hydrate(),
            self.rating_form.hydrate(),
            self.toast.hydrate(),
            self.ui.hydrate(),
        );

        let report = vec![
            (self.app.name(), app),
            (self.auth.name(), auth),
            (self.camera_modal.name(), camera_modal),
            (self.connectivity.name(), connectivity),
            (self.market_details.name(), market_details),
            (self.markets_screen.name(), markets_screen),
            (self.my_ratings_screen.name(), my_ratings_screen),
            (self.oauth.name(), oauth),
            (self.rating_form.name(), rating_form),
            (self.toast.name(), toast),
            (self.ui.name(), ui),
        ];
        let restored = report
            .iter()
            .filter(|(_, outcome)| *outcome == HydrationOutcome::Restored)
            .count();
        tracing::info!(restored, total = report.len(), "hydrated app stores");
        report
    }

    /// Wait until every queued write has reached storage.
    pub async fn flush(&self) {
        self.writer.flush().await;
    }

    pub fn persisted_keys() -> &'static [(&'static str, PersistPolicy)] {
        PERSISTED_STORES
    }
}

#[cfg(test)]
pub(crate) fn test_writer() -> (Arc<crate::store::MemoryStorage>, PersistWriter) {
    let storage = Arc::new(crate::store::MemoryStorage::new());
    let writer = PersistWriter::spawn(storage.clone()).expect("tokio runtime");
    (storage, writer)
}
