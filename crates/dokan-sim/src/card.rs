//! SIM card types and directory normalization

use serde::{Deserialize, Serialize};

/// Id of the synthetic "do not send SMS" option
pub const NO_SIM_ID: &str = "no_sim";

/// A selectable entry in the SIM modal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimSelection {
    pub id: String,
    pub display_name: String,
    pub subscription_id: Option<i64>,
    pub phone_number: String,
    /// Always `true` for detected cards; the directory reports no
    /// active/inactive distinction
    pub is_active: bool,
    pub is_no_sim_option: bool,
}

impl SimSelection {
    /// The "do not send SMS" sentinel
    pub fn no_sim(labels: &SimLabels) -> Self {
        Self {
            id: NO_SIM_ID.to_string(),
            display_name: labels.no_sim.clone(),
            subscription_id: None,
            phone_number: String::new(),
            is_active: true,
            is_no_sim_option: true,
        }
    }
}

/// Card info as reported by the device, every field optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSimInfo {
    #[serde(default)]
    pub subscription_id: Option<i64>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub carrier_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
}

/// User-facing strings for synthetic values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimLabels {
    /// Display name of the no-SIM sentinel
    #[serde(default = "default_no_sim")]
    pub no_sim: String,

    /// Phone shown when the device does not report a number
    #[serde(default = "default_unknown_number")]
    pub unknown_number: String,
}

fn default_no_sim() -> String {
    "No SIM (don't send SMS)".to_string()
}

fn default_unknown_number() -> String {
    "Unknown number".to_string()
}

impl Default for SimLabels {
    fn default() -> Self {
        Self {
            no_sim: default_no_sim(),
            unknown_number: default_unknown_number(),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Turns raw directory entries into selectable cards
///
/// Display name falls back to the carrier name, then `SIM {n}` (1-based
/// position). Phone falls back from `phoneNumber` to `number` to the
/// unknown-number label. Cards without a subscription id get a slot id (`sim_slot_{n}`).
pub fn normalize_cards(raw: &[RawSimInfo], labels: &SimLabels) -> Vec<SimSelection> {
    raw.iter()
        .enumerate()
        .map(|(index, info)| {
            let position = index + 1;

            let display_name = non_blank(&info.display_name)
                .or_else(|| non_blank(&info.carrier_name))
                .map(str::to_string)
                .unwrap_or_else(|| format!("SIM {}", position));

            let phone_number = non_blank(&info.phone_number)
                .or_else(|| non_blank(&info.number))
                .map(str::to_string)
                .unwrap_or_else(|| labels.unknown_number.clone());

            let id = match info.subscription_id {
                Some(subscription_id) => format!("sim_{}", subscription_id),
                None => format!("sim_slot_{}", position),
            };

            SimSelection {
                id,
                display_name,
                subscription_id: info.subscription_id,
                phone_number,
                is_active: true,
                is_no_sim_option: false,
            }
        })
        .collect()
}
