//! User configuration (`config.json`)
//!
//! ```json
//! {
//!   "install_location": "/games/yomi",
//!   "auto_update_client": false,
//!   "auto_update_mods": true,
//!   "catalog_url": "http://mods.yomitussle.tk"
//! }
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, config};

/// Catalog server used when none is configured
pub const DEFAULT_CATALOG_URL: &str = "http://mods.yomitussle.tk";

/// Settable keys, as accepted by `modsync config set`
pub const KEYS: &[&str] = &[
    "install-location",
    "auto-update-client",
    "auto-update-mods",
    "catalog-url",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Game directory; its `mods` subdirectory is the active content root
    pub install_location: String,
    pub auto_update_client: bool,
    pub auto_update_mods: bool,
    /// Catalog server URL, or a local mirror directory
    pub catalog_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            install_location: String::new(),
            auto_update_client: false,
            auto_update_mods: false,
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
        }
    }
}

impl Config {
    pub fn install_path(&self) -> Option<PathBuf> {
        let trimmed = self.install_location.trim();
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }

    /// Catalog location with blank values falling back to the default server
    pub fn catalog_location(&self) -> &str {
        let trimmed = self.catalog_url.trim();
        if trimmed.is_empty() {
            DEFAULT_CATALOG_URL
        } else {
            trimmed
        }
    }

    /// Set one field from its CLI key (`-` and `_` are interchangeable)
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key.replace('_', "-").as_str() {
            "install-location" => self.install_location = value.trim().to_string(),
            "auto-update-client" => self.auto_update_client = parse_flag(key, value)?,
            "auto-update-mods" => self.auto_update_mods = parse_flag(key, value)?,
            "catalog-url" => self.catalog_url = value.trim().to_string(),
            _ => {
                return Err(config::invalid(format!(
                    "unknown key '{key}' (expected one of: {})",
                    KEYS.join(", ")
                )));
            }
        }
        Ok(())
    }

    /// Key/value pairs in display order
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("install-location", self.install_location.clone()),
            ("auto-update-client", self.auto_update_client.to_string()),
            ("auto-update-mods", self.auto_update_mods.to_string()),
            ("catalog-url", self.catalog_location().to_string()),
        ]
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(config::invalid(format!(
            "'{other}' is not a valid value for {key} (expected true or false)"
        ))),
    }
}
