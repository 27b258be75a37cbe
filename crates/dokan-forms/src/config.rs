// File: src/config.rs
// Purpose: Configuration parsing from dokan.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Registration screen configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub form: FormConfig,

    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Live validation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    /// Quiet period after the last keystroke before live validation runs
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

/// Named color tokens handed to the rendering layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_primary")]
    pub primary: String,

    #[serde(default = "default_success")]
    pub success: String,

    #[serde(default = "default_warning")]
    pub warning: String,

    #[serde(default = "default_danger")]
    pub danger: String,

    #[serde(default = "default_text")]
    pub text: String,

    #[serde(default = "default_muted")]
    pub muted: String,

    #[serde(default = "default_background")]
    pub background: String,
}

// Default values
fn default_debounce_ms() -> u64 {
    300
}

fn default_primary() -> String {
    "#2563EB".to_string()
}

fn default_success() -> String {
    "#16A34A".to_string()
}

fn default_warning() -> String {
    "#F59E0B".to_string()
}

fn default_danger() -> String {
    "#DC2626".to_string()
}

fn default_text() -> String {
    "#111827".to_string()
}

fn default_muted() -> String {
    "#6B7280".to_string()
}

fn default_background() -> String {
    "#FFFFFF".to_string()
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl FormConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary: default_primary(),
            success: default_success(),
            warning: default_warning(),
            danger: default_danger(),
            text: default_text(),
            muted: default_muted(),
            background: default_background(),
        }
    }
}

impl ThemeConfig {
    /// Progress bar tint: success once every field is complete
    pub fn progress_color(&self, progress: f32) -> &str {
        if progress >= 1.0 {
            &self.success
        } else {
            &self.primary
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./dokan.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("dokan.toml")
    }
}
