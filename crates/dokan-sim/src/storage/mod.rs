//! Storage backends for per-shop SIM settings

use crate::record::SimSettingRecord;
use anyhow::Result;
use async_trait::async_trait;

pub mod memory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

/// Trait for settings store backends
///
/// Holds at most one record per shop id.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Get the record for a shop
    async fn get(&self, shop_id: &str) -> Result<Option<SimSettingRecord>>;

    /// Insert the shop's record, or update it if one exists
    ///
    /// Returns the stored row. An update keeps the existing `id` and
    /// `created_at`.
    async fn put(&self, record: SimSettingRecord) -> Result<SimSettingRecord>;

    /// Delete the record for a shop
    async fn delete(&self, shop_id: &str) -> Result<()>;

    /// Get storage backend name
    fn name(&self) -> &'static str;
}
