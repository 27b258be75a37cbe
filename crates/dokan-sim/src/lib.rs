//! # Dokan SIM
//!
//! Picks the SIM card used to send SMS notifications for a shop.
//!
//! ## Features
//!
//! - **Directory normalization**: raw card info from the device is turned
//!   into [`SimSelection`]s with display and phone fallbacks
//! - **No-SIM sentinel**: "do not send SMS" is always selectable
//! - **Persisted choice**: one [`SimSettingRecord`] per shop, upserted on
//!   every selection, in memory or SQLite
//! - **Graceful failure**: directory or store errors fall back to the
//!   sentinel and surface a [`Notice`]
//!
//! ## Example
//!
//! ```rust
//! use dokan_sim::{SimSelector, SimModalState, StaticSimDirectory, MemorySettingsStore};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let directory = Arc::new(StaticSimDirectory::empty());
//!     let store = Arc::new(MemorySettingsStore::new());
//!     let mut selector = SimSelector::new("shop-1", directory, store);
//!
//!     selector.open(None).await;
//!     assert!(matches!(selector.state(), SimModalState::Ready { .. }));
//! }
//! ```

pub mod card;
pub mod config;
pub mod directory;
pub mod error;
pub mod record;
pub mod selector;
pub mod storage;

pub use card::{normalize_cards, RawSimInfo, SimLabels, SimSelection, NO_SIM_ID};
pub use config::{SimConfig, StoreBackend};
pub use directory::{SimDirectory, StaticSimDirectory};
pub use error::SimError;
pub use record::SimSettingRecord;
pub use selector::{Notice, SimModalState, SimSelector};
pub use storage::memory::MemorySettingsStore;
#[cfg(feature = "sqlite")]
pub use storage::sqlite::SqliteSettingsStore;
pub use storage::SettingsStore;
