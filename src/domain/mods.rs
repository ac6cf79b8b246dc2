//! Mod domain type

use serde::{Deserialize, Serialize};

use super::serialization::{deserialize_names, deserialize_requires, deserialize_text};

/// A single installable content unit
///
/// The same type describes a catalog entry and an installed entry; `disabled`
/// only carries meaning for the latter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mod {
    /// Stable key, unique within the catalog and within the installed set
    #[serde(deserialize_with = "deserialize_text")]
    pub name: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub friendly_name: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub description: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub author: String,
    /// Opaque version string, compared for equality only
    #[serde(deserialize_with = "deserialize_text")]
    pub version: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub link: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub id: String,
    /// Names of the mods this one needs, in install order
    #[serde(deserialize_with = "deserialize_requires")]
    pub requires: Vec<String>,
    pub overwrites: bool,
    pub client_side: bool,
    /// Load ordering hint for the game; not interpreted here
    pub priority: i32,
    #[serde(deserialize_with = "deserialize_names")]
    pub incompatible: Vec<String>,
    #[serde(deserialize_with = "deserialize_names")]
    pub tags: Vec<String>,
    pub disabled: bool,
    /// Installed but not published in the manifest (sideloaded)
    #[serde(skip)]
    pub is_local: bool,
}

impl Mod {
    /// Create a catalog entry with just a name and version
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            friendly_name: name.clone(),
            name,
            version: version.into(),
            ..Self::default()
        }
    }

    /// Name shown to users, falling back to the key
    pub fn display_name(&self) -> &str {
        if self.friendly_name.is_empty() {
            &self.name
        } else {
            &self.friendly_name
        }
    }

    /// Whether this mod lists `name` as a requirement
    pub fn requires_mod(&self, name: &str) -> bool {
        self.requires.iter().any(|r| r == name)
    }

    /// Whether this mod declares `name` incompatible
    pub fn declares_incompatible(&self, name: &str) -> bool {
        self.incompatible.iter().any(|i| i == name)
    }

    pub fn is_enabled(&self) -> bool {
        !self.disabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_catalog_entry() {
        let json = r#"{
            "name": "speedmod",
            "friendly_name": "Speed Mod",
            "version": "1.2",
            "requires": ["corelib"],
            "incompatible": ["slowmod"],
            "client_side": true,
            "priority": 3,
            "tags": ["Gameplay"]
        }"#;
        let m: Mod = serde_json::from_str(json).unwrap();
        assert_eq!(m.name, "speedmod");
        assert_eq!(m.display_name(), "Speed Mod");
        assert_eq!(m.requires, vec!["corelib".to_string()]);
        assert!(m.declares_incompatible("slowmod"));
        assert!(m.client_side);
        assert_eq!(m.priority, 3);
        assert!(!m.disabled);
        assert!(!m.is_local);
    }

    #[test]
    fn test_sentinel_requires_normalized() {
        let m: Mod = serde_json::from_str(r#"{"name": "a", "requires": [""]}"#).unwrap();
        assert!(m.requires.is_empty());
    }

    #[test]
    fn test_null_fields_tolerated() {
        let m: Mod = serde_json::from_str(
            r#"{"name": "a", "description": null, "incompatible": null, "tags": null}"#,
        )
        .unwrap();
        assert!(m.description.is_empty());
        assert!(m.incompatible.is_empty());
        assert!(m.tags.is_empty());
    }

    #[test]
    fn test_is_local_not_serialized() {
        let mut m = Mod::new("a", "1");
        m.is_local = true;
        let json = serde_json::to_string(&m).unwrap();
        assert!(!json.contains("is_local"));
        assert!(json.contains("\"friendly_name\""));
    }

    #[test]
    fn test_display_name_fallback() {
        let mut m = Mod::new("a", "1");
        m.friendly_name.clear();
        assert_eq!(m.display_name(), "a");
    }
}
