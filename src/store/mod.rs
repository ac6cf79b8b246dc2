//! Persistence gateway for the state documents
//!
//! Every document is a single JSON file, always rewritten in full. The
//! [`Store`] trait only moves raw text; [`load`] and [`save`] do the
//! (de)serialization so that every backend behaves the same.
//!
//! ## Documents
//!
//! ```text
//! <home>/
//! ├── config.json            # Config
//! ├── mod_manifest.json      # Cached catalog manifest
//! ├── installed_mods.json    # Installed mods
//! ├── installed_bundles.json # Installed bundles
//! ├── mod_profiles.json      # Profiles
//! └── mods/                  # Staged packages (see content roots)
//! ```

mod json;

pub use json::JsonStore;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Result, config, fs};

/// One of the persisted documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Document {
    Config,
    Manifest,
    InstalledMods,
    InstalledBundles,
    Profiles,
}

impl Document {
    pub const fn file_name(self) -> &'static str {
        match self {
            Document::Config => "config.json",
            Document::Manifest => "mod_manifest.json",
            Document::InstalledMods => "installed_mods.json",
            Document::InstalledBundles => "installed_bundles.json",
            Document::Profiles => "mod_profiles.json",
        }
    }
}

/// Raw document storage
pub trait Store {
    /// Contents of the document, or `None` when it was never written
    fn read(&self, document: Document) -> Result<Option<String>>;

    /// Replace the document with `contents`
    fn write(&self, document: Document, contents: &str) -> Result<()>;
}

/// Load and parse a document, falling back to `T::default()` when it is absent
pub fn load<T>(store: &dyn Store, document: Document) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    match store.read(document)? {
        None => Ok(T::default()),
        Some(text) if text.trim().is_empty() => Ok(T::default()),
        Some(text) => serde_json::from_str(&text)
            .map_err(|e| config::parse_failed(document.file_name(), e.to_string())),
    }
}

/// Serialize and write a document
pub fn save<T>(store: &dyn Store, document: Document, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| fs::persistence_failed(document.file_name(), e.to_string()))?;
    tracing::debug!(document = document.file_name(), "Saving document");
    store.write(document, &text)
}
