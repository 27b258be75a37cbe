//! Persisted per-shop SIM setting

use crate::card::SimSelection;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Format used for `created_at` / `updated_at`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a timestamp for storage
pub fn format_timestamp(at: DateTime<Local>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// The single settings row kept per shop
///
/// `id` is assigned by the store on first insert; `created_at` is kept on
/// every later update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlite", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct SimSettingRecord {
    pub id: i64,
    pub shop_id: String,
    pub selected_sim_id: String,
    pub sim_display_name: String,
    pub subscription_id: Option<i64>,
    /// Stored as 0/1
    pub is_no_sim_option: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl SimSettingRecord {
    /// A not-yet-stored record capturing `selection` for `shop_id`
    pub fn for_selection(shop_id: &str, selection: &SimSelection, now: DateTime<Local>) -> Self {
        let stamp = format_timestamp(now);
        Self {
            id: 0,
            shop_id: shop_id.to_string(),
            selected_sim_id: selection.id.clone(),
            sim_display_name: selection.display_name.clone(),
            subscription_id: selection.subscription_id,
            is_no_sim_option: selection.is_no_sim_option,
            created_at: stamp.clone(),
            updated_at: stamp,
        }
    }

    /// Whether a listed card is the one this record points at
    ///
    /// The no-SIM flag matches the sentinel regardless of the stored id.
    pub fn matches(&self, selection: &SimSelection) -> bool {
        if self.is_no_sim_option {
            selection.is_no_sim_option
        } else {
            !selection.is_no_sim_option && selection.id == self.selected_sim_id
        }
    }
}
