//! Remote catalog manifest

use serde::{Deserialize, Serialize};

use super::serialization::deserialize_text;
use super::{Bundle, Mod};
use crate::error::{Result, config};

/// The published catalog of mods and bundles
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    #[serde(deserialize_with = "deserialize_mods")]
    pub mods: Vec<Mod>,
    #[serde(deserialize_with = "deserialize_bundles")]
    pub bundles: Vec<Bundle>,
    #[serde(deserialize_with = "deserialize_text")]
    pub version: String,
}

impl Manifest {
    /// Parse the manifest document served at `/mod_manifest`
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| config::parse_failed("mod_manifest.json", e.to_string()))
    }
}

fn deserialize_mods<'de, D>(deserializer: D) -> std::result::Result<Vec<Mod>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<Vec<Mod>> = Option::deserialize(deserializer)?;
    Ok(raw.unwrap_or_default())
}

fn deserialize_bundles<'de, D>(deserializer: D) -> std::result::Result<Vec<Bundle>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<Vec<Bundle>> = Option::deserialize(deserializer)?;
    Ok(raw.unwrap_or_default())
}
