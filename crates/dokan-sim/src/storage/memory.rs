//! In-memory settings store

use crate::record::SimSettingRecord;
use crate::storage::SettingsStore;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct Inner {
    records: HashMap<String, SimSettingRecord>,
    next_id: i64,
}

/// In-memory settings store
///
/// Non-persistent; selections are lost on restart.
#[derive(Clone, Default)]
pub struct MemorySettingsStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of shops with a stored selection
    pub async fn size(&self) -> usize {
        self.inner.read().await.records.len()
    }
}

#[async_trait]
impl SettingsStore for MemorySettingsStore {
    async fn get(&self, shop_id: &str) -> Result<Option<SimSettingRecord>> {
        let inner = self.inner.read().await;
        Ok(inner.records.get(shop_id).cloned())
    }

    async fn put(&self, mut record: SimSettingRecord) -> Result<SimSettingRecord> {
        let mut inner = self.inner.write().await;

        let existing = inner
            .records
            .get(&record.shop_id)
            .map(|r| (r.id, r.created_at.clone()));

        match existing {
            Some((id, created_at)) => {
                record.id = id;
                record.created_at = created_at;
            }
            None => {
                inner.next_id += 1;
                record.id = inner.next_id;
            }
        }

        inner.records.insert(record.shop_id.clone(), record.clone());
        Ok(record)
    }

    async fn delete(&self, shop_id: &str) -> Result<()> {
        let mut inner = self.inner.write().await;
        inner.records.remove(shop_id);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(shop_id: &str, sim: &str, stamp: &str) -> SimSettingRecord {
        SimSettingRecord {
            id: 0,
            shop_id: shop_id.to_string(),
            selected_sim_id: sim.to_string(),
            sim_display_name: "GP".to_string(),
            subscription_id: Some(1),
            is_no_sim_option: false,
            created_at: stamp.to_string(),
            updated_at: stamp.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_then_update() {
        let store = MemorySettingsStore::new();

        let first = store
            .put(record("shop-1", "sim_1", "2024-01-01 10:00:00"))
            .await
            .unwrap();
        assert_eq!(first.id, 1);

        let second = store
            .put(record("shop-1", "sim_2", "2024-01-02 10:00:00"))
            .await
            .unwrap();
        assert_eq!(second.id, 1);
        assert_eq!(second.selected_sim_id, "sim_2");
        assert_eq!(second.created_at, "2024-01-01 10:00:00");
        assert_eq!(second.updated_at, "2024-01-02 10:00:00");

        assert_eq!(store.size().await, 1);
        assert_eq!(store.get("shop-1").await.unwrap(), Some(second));
    }

    #[tokio::test]
    async fn test_shops_are_independent() {
        let store = MemorySettingsStore::new();
        store.put(record("shop-1", "sim_1", "2024-01-01 10:00:00")).await.unwrap();
        let other = store
            .put(record("shop-2", "sim_2", "2024-01-01 10:00:00"))
            .await
            .unwrap();

        assert_eq!(other.id, 2);
        assert_eq!(store.size().await, 2);
        assert!(store.get("shop-3").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete() {
        let store = MemorySettingsStore::new();
        store.put(record("shop-1", "sim_1", "2024-01-01 10:00:00")).await.unwrap();
        store.delete("shop-1").await.unwrap();
        assert!(store.get("shop-1").await.unwrap().is_none());
        assert_eq!(store.name(), "memory");
    }
}
