//! Profile domain type

use serde::{Deserialize, Serialize};

use super::serialization::{deserialize_names, deserialize_text};

/// A named activation preset of mods and bundles
///
/// `disabled == false` marks the profile as part of the active configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(deserialize_with = "deserialize_text")]
    pub name: String,
    #[serde(deserialize_with = "deserialize_names")]
    pub mods: Vec<String>,
    #[serde(deserialize_with = "deserialize_names")]
    pub bundles: Vec<String>,
    pub disabled: bool,
}

impl Profile {
    /// Create an inactive profile, deduplicating the member lists
    pub fn new(name: impl Into<String>, mods: Vec<String>, bundles: Vec<String>) -> Self {
        Self {
            name: name.into(),
            mods: dedup(mods),
            bundles: dedup(bundles),
            disabled: true,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.disabled
    }
}

fn dedup(names: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        if !name.is_empty() && !out.contains(&name) {
            out.push(name);
        }
    }
    out
}
