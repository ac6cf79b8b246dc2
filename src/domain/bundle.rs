//! Bundle domain type

use serde::{Deserialize, Serialize};

use super::serialization::{deserialize_names, deserialize_text};

/// A named, versioned grouping of mods
///
/// A bundle has no payload of its own. Its `disabled` flag is tracked
/// separately from the state of its members, so a bundle can be marked
/// enabled while one of its mods is individually disabled. Anything that
/// needs ground truth recomputes it from the members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bundle {
    #[serde(deserialize_with = "deserialize_text")]
    pub name: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub friendly_name: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub description: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub author: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub version: String,
    /// Member mod names, in the order operations replay over them
    #[serde(deserialize_with = "deserialize_names")]
    pub mods: Vec<String>,
    pub disabled: bool,
}

impl Bundle {
    pub fn new(name: impl Into<String>, version: impl Into<String>, mods: &[&str]) -> Self {
        let name = name.into();
        Self {
            friendly_name: name.clone(),
            name,
            version: version.into(),
            mods: mods.iter().map(|m| (*m).to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn display_name(&self) -> &str {
        if self.friendly_name.is_empty() {
            &self.name
        } else {
            &self.friendly_name
        }
    }

    pub fn contains(&self, mod_name: &str) -> bool {
        self.mods.iter().any(|m| m == mod_name)
    }
}
