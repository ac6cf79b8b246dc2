//! The catalog snapshot
//!
//! One owning structure for every entity the engine reasons about:
//! the remote manifest plus the locally persisted installed mods,
//! installed bundles and profiles. Everything else refers to entities
//! by name and re-queries the snapshot; nothing keeps its own copy.

pub mod container;
pub mod lookup;
pub mod search;

pub use container::{Named, NamedList};
pub use search::SearchFilter;

use crate::domain::{Bundle, Manifest, Mod, Profile};

/// In-memory state of the manifest and the three local documents
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Remote catalog (possibly a cached copy)
    pub manifest: Manifest,

    /// Installed mods in installation order
    pub installed_mods: Vec<Mod>,

    /// Installed bundles in installation order
    pub installed_bundles: Vec<Bundle>,

    /// Saved profiles
    pub profiles: Vec<Profile>,
}

impl Catalog {
    /// Assemble a snapshot and derive the runtime-only `is_local` flags
    pub fn new(
        manifest: Manifest,
        installed_mods: Vec<Mod>,
        installed_bundles: Vec<Bundle>,
        profiles: Vec<Profile>,
    ) -> Self {
        let mut catalog = Self {
            manifest,
            installed_mods: dedup_by_name(installed_mods),
            installed_bundles: dedup_by_name(installed_bundles),
            profiles: dedup_by_name(profiles),
        };
        catalog.refresh_local_flags();
        catalog
    }

    /// Swap in a freshly fetched manifest
    pub fn set_manifest(&mut self, manifest: Manifest) {
        self.manifest = manifest;
        self.refresh_local_flags();
    }

    /// Recompute `is_local` for every installed mod against the manifest
    pub fn refresh_local_flags(&mut self) {
        let manifest = &self.manifest;
        for installed in &mut self.installed_mods {
            installed.is_local = manifest.mods.find_named(&installed.name).is_none();
        }
    }
}

/// Keep the last entry for every name, preserving first-seen order
fn dedup_by_name<T: Named>(entries: Vec<T>) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(entries.len());
    for entry in entries {
        if let Some(existing) = out.find_named_mut(entry.name()) {
            *existing = entry;
        } else {
            out.push(entry);
        }
    }
    out
}
