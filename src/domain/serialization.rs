//! Serde helpers shared by the domain types

use serde::{Deserialize, Deserializer};

/// Deserialize a `requires` list, normalizing the "no dependencies" sentinel
///
/// Catalog producers write `[""]` (or `null`) for a mod without dependencies.
/// Both become an empty list here, and stray empty entries are dropped, so no
/// caller ever sees an empty dependency name.
pub fn deserialize_requires<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(normalize_names(raw.unwrap_or_default()))
}

/// Deserialize a name list that may be `null`
pub fn deserialize_names<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(raw.unwrap_or_default())
}

/// Deserialize a string that may be `null`
pub fn deserialize_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.unwrap_or_default())
}

fn normalize_names(names: Vec<String>) -> Vec<String> {
    names
        .into_iter()
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .collect()
}
