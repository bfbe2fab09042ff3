//! Error types shared across the crate.

use thiserror::Error;

/// Failures reported by a [`StorageAdapter`](crate::store::StorageAdapter).
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Failures while wiring up or persisting a store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no tokio runtime available to run the persistence writer")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Failures talking to the Loppestars backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{endpoint} failed: {status}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("missing Supabase Edge Function token")]
    MissingToken,

    #[error("{0} did not report success")]
    Rejected(&'static str),

    #[error("invalid base URL: {0}")]
    BaseUrl(String),
}

/// Failures while loading [`Config`](crate::config::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
