//! Runtime configuration.
//!
//! Values come from an optional TOML file and are then overridden by
//! environment variables, which is how the mobile build injects them.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::ConfigError;
use crate::store::{FileStorage, MemoryStorage, StorageAdapter};

pub const DEFAULT_API_BASE_URL: &str = "https://loppestars.spoons.dk";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend origin, without a trailing slash.
    pub api_base_url: String,
    /// Token the Edge Function proxy expects in the query string.
    pub functions_token: Option<String>,
    /// Where persisted stores live; `None` keeps them in memory.
    pub storage_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            functions_token: None,
            storage_dir: None,
        }
    }
}

impl Config {
    /// Read a TOML file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Defaults plus environment overrides.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from any variable source. Empty values are ignored.
    ///
    /// `SUPABASE_FUNCTIONS_TOKEN` wins over `EXPO_PUBLIC_SUPABASE_ANON_KEY`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(url) = var("API_BASE_URL") {
            self.api_base_url = url;
        }
        if let Some(token) =
            var("SUPABASE_FUNCTIONS_TOKEN").or_else(|| var("EXPO_PUBLIC_SUPABASE_ANON_KEY"))
        {
            self.functions_token = Some(token);
        }
        if let Some(dir) = var("LOPPESTARS_STORAGE_DIR") {
            self.storage_dir = Some(PathBuf::from(dir));
        }
        self.api_base_url = self.api_base_url.trim_end_matches('/').to_string();
        self
    }

    /// Storage backend for persisted stores: files under `storage_dir`, or
    /// an in-memory map when no directory is configured.
    pub fn storage(&self) -> Arc<dyn StorageAdapter> {
        match &self.storage_dir {
            Some(dir) => {
                tracing::debug!(dir = %dir.display(), "persisting stores to disk");
                Arc::new(FileStorage::new(dir.clone()))
            }
            None => Arc::new(MemoryStorage::new()),
        }
    }
}
