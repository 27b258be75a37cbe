//! SIM selection configuration types

use crate::card::SimLabels;
use crate::error::SimError;
use crate::storage::memory::MemorySettingsStore;
use crate::storage::SettingsStore;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Runtime configuration for the SIM modal
#[derive(Debug, Clone, Default)]
pub struct SimConfig {
    /// Where the per-shop selection is kept
    pub store: StoreBackend,

    /// Labels for synthetic entries
    pub labels: SimLabels,
}

/// Settings store backend configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StoreBackend {
    /// In-memory store (non-persistent)
    #[default]
    Memory,

    /// SQLite file or in-memory database
    Sqlite { database_url: String },
}

fn default_store() -> String {
    "sqlite".to_string()
}

fn default_database_url() -> String {
    "sqlite:dokan.db".to_string()
}

/// `[sim]` section of dokan.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimTomlConfig {
    /// Store backend: "memory" or "sqlite"
    #[serde(default = "default_store")]
    pub store: String,

    #[serde(default = "default_database_url")]
    pub database_url: String,

    #[serde(default)]
    pub labels: SimLabels,
}

impl Default for SimTomlConfig {
    fn default() -> Self {
        Self {
            store: default_store(),
            database_url: default_database_url(),
            labels: SimLabels::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    sim: SimTomlConfig,
}

impl SimTomlConfig {
    /// Read the `[sim]` section from a TOML file; missing file gives defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let file: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(file.sim)
    }

    /// Convert TOML config to runtime config
    pub fn to_runtime_config(&self) -> Result<SimConfig, SimError> {
        let store = match self.store.as_str() {
            "memory" => StoreBackend::Memory,
            "sqlite" => StoreBackend::Sqlite {
                database_url: self.database_url.clone(),
            },
            other => return Err(SimError::UnknownBackend(other.to_string())),
        };

        Ok(SimConfig {
            store,
            labels: self.labels.clone(),
        })
    }
}

impl SimConfig {
    /// Build the configured settings store
    pub async fn open_store(&self) -> Result<Arc<dyn SettingsStore>> {
        match &self.store {
            StoreBackend::Memory => Ok(Arc::new(MemorySettingsStore::new())),
            #[cfg(feature = "sqlite")]
            StoreBackend::Sqlite { database_url } => {
                let store = crate::storage::sqlite::SqliteSettingsStore::connect(database_url).await?;
                Ok(Arc::new(store))
            }
            #[cfg(not(feature = "sqlite"))]
            StoreBackend::Sqlite { .. } => Err(SimError::UnknownBackend("sqlite".to_string()).into()),
        }
    }
}
