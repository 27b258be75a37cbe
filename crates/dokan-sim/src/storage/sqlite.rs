//! SQLite settings store

use crate::record::SimSettingRecord;
use crate::storage::SettingsStore;
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS sim_settings (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        shop_id TEXT NOT NULL UNIQUE,
        selected_sim_id TEXT NOT NULL,
        sim_display_name TEXT NOT NULL,
        subscription_id INTEGER,
        is_no_sim_option INTEGER NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
"#;

const COLUMNS: &str = "id, shop_id, selected_sim_id, sim_display_name, subscription_id, \
                       is_no_sim_option, created_at, updated_at";

/// Settings store backed by a `sim_settings` table
#[derive(Clone)]
pub struct SqliteSettingsStore {
    pool: SqlitePool,
}

impl SqliteSettingsStore {
    /// Connect to `database_url`, creating the file and table if needed
    ///
    /// An in-memory database lives only as long as its connection, so it
    /// gets exactly one that is never reaped.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("Invalid SQLite URL: {}", database_url))?
            .create_if_missing(true);

        let pool_options = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(4)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .context("Failed to create SQLite connection pool")?;

        Self::from_pool(pool).await
    }

    /// Use an existing pool, creating the table if needed
    pub async fn from_pool(pool: SqlitePool) -> Result<Self> {
        sqlx::query(CREATE_TABLE)
            .execute(&pool)
            .await
            .context("Failed to create sim_settings table")?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl SettingsStore for SqliteSettingsStore {
    async fn get(&self, shop_id: &str) -> Result<Option<SimSettingRecord>> {
        let sql = format!("SELECT {} FROM sim_settings WHERE shop_id = ? LIMIT 1", COLUMNS);
        sqlx::query_as::<_, SimSettingRecord>(&sql)
            .bind(shop_id)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Failed to load SIM setting for shop {}", shop_id))
    }

    async fn put(&self, record: SimSettingRecord) -> Result<SimSettingRecord> {
        let sql = format!(
            "INSERT INTO sim_settings \
                 (shop_id, selected_sim_id, sim_display_name, subscription_id, \
                  is_no_sim_option, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?) \
             ON CONFLICT(shop_id) DO UPDATE SET \
                 selected_sim_id = excluded.selected_sim_id, \
                 sim_display_name = excluded.sim_display_name, \
                 subscription_id = excluded.subscription_id, \
                 is_no_sim_option = excluded.is_no_sim_option, \
                 updated_at = excluded.updated_at \
             RETURNING {}",
            COLUMNS
        );

        sqlx::query_as::<_, SimSettingRecord>(&sql)
            .bind(&record.shop_id)
            .bind(&record.selected_sim_id)
            .bind(&record.sim_display_name)
            .bind(record.subscription_id)
            .bind(record.is_no_sim_option)
            .bind(&record.created_at)
            .bind(&record.updated_at)
            .fetch_one(&self.pool)
            .await
            .with_context(|| format!("Failed to save SIM setting for shop {}", record.shop_id))
    }

    async fn delete(&self, shop_id: &str) -> Result<()> {
        sqlx::query("DELETE FROM sim_settings WHERE shop_id = ?")
            .bind(shop_id)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Failed to delete SIM setting for shop {}", shop_id))?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "sqlite"
    }
}
