//! Workspace: everything one modsync invocation operates on
//!
//! The workspace owns the configuration, the catalog snapshot, the network
//! status, the content roots and the persistence store. The engine borrows it
//! mutably for the duration of one top-level operation.
//!
//! ## Home Directory
//!
//! ```text
//! <data dir>/modsync/   # or --home / MODSYNC_HOME
//! ├── config.json
//! ├── mod_manifest.json
//! ├── installed_mods.json
//! ├── installed_bundles.json
//! ├── mod_profiles.json
//! └── mods/             # staging root
//! ```

mod network;

pub use network::NetworkStatus;

use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::content::ContentRoots;
use crate::domain::{Bundle, Manifest, Mod, Profile};
use crate::error::{Result, config, fs as fs_err};
use crate::store::{self, Document, JsonStore, Store};

/// Name of the home directory under the platform data directory
pub const HOME_DIR_NAME: &str = "modsync";

/// Staging subdirectory of the home directory
pub const STAGING_DIR: &str = "mods";

pub struct Workspace {
    /// Home directory holding the documents and the staging root
    pub home: PathBuf,

    pub config: Config,

    pub catalog: Catalog,

    /// Runtime only; starts online for every invocation
    pub network: NetworkStatus,

    pub content: ContentRoots,

    store: Box<dyn Store>,
}

impl std::fmt::Debug for Workspace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workspace")
            .field("home", &self.home)
            .field("config", &self.config)
            .field("network", &self.network)
            .field("content", &self.content)
            .finish_non_exhaustive()
    }
}

impl Workspace {
    /// Default home directory (`<platform data dir>/modsync`)
    pub fn default_home() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join(HOME_DIR_NAME))
            .ok_or_else(|| config::invalid("no data directory for this platform; pass --home"))
    }

    /// Open the workspace at `home`, creating it (and a default config) if needed
    pub fn open(home: &Path) -> Result<Self> {
        fs::create_dir_all(home)
            .map_err(|e| fs_err::write_failed(home.display().to_string(), e.to_string()))?;
        Self::open_with(home, Box::new(JsonStore::new(home)))
    }

    /// Open the workspace over an arbitrary store
    pub fn open_with(home: &Path, store: Box<dyn Store>) -> Result<Self> {
        let config = match store.read(Document::Config)? {
            Some(_) => store::load::<Config>(store.as_ref(), Document::Config)?,
            None => {
                let config = Config::default();
                store::save(store.as_ref(), Document::Config, &config)?;
                tracing::info!(home = %home.display(), "Created default configuration");
                config
            }
        };

        let manifest = match store.read(Document::Manifest)? {
            Some(text) if !text.trim().is_empty() => Manifest::from_json(&text)?,
            _ => Manifest::default(),
        };
        let installed_mods: Vec<Mod> = store::load(store.as_ref(), Document::InstalledMods)?;
        let installed_bundles: Vec<Bundle> =
            store::load(store.as_ref(), Document::InstalledBundles)?;
        let profiles: Vec<Profile> = store::load(store.as_ref(), Document::Profiles)?;

        let content = ContentRoots::new(home.join(STAGING_DIR), config.install_path().as_deref());

        Ok(Self {
            home: home.to_path_buf(),
            config,
            catalog: Catalog::new(manifest, installed_mods, installed_bundles, profiles),
            network: NetworkStatus::default(),
            content,
            store,
        })
    }

    /// True when a manifest was loaded from the cache or fetched
    pub fn has_manifest(&self) -> bool {
        !self.catalog.manifest.version.is_empty()
            || !self.catalog.manifest.mods.is_empty()
            || !self.catalog.manifest.bundles.is_empty()
    }

    /// Replace the configuration and re-derive the content roots
    pub fn set_config(&mut self, config: Config) -> Result<()> {
        store::save(self.store.as_ref(), Document::Config, &config)?;
        self.content = ContentRoots::new(
            self.home.join(STAGING_DIR),
            config.install_path().as_deref(),
        );
        self.config = config;
        Ok(())
    }

    /// Install a freshly fetched manifest, caching the document as served
    pub fn set_manifest(&mut self, raw: &str) -> Result<()> {
        let manifest = Manifest::from_json(raw)?;
        self.store.write(Document::Manifest, raw)?;
        self.catalog.set_manifest(manifest);
        Ok(())
    }

    /// Write one of the three state documents from the snapshot
    pub fn persist(&self, document: Document) -> Result<()> {
        let store = self.store.as_ref();
        match document {
            Document::InstalledMods => store::save(store, document, &self.catalog.installed_mods),
            Document::InstalledBundles => {
                store::save(store, document, &self.catalog.installed_bundles)
            }
            Document::Profiles => store::save(store, document, &self.catalog.profiles),
            Document::Config => store::save(store, document, &self.config),
            Document::Manifest => store::save(store, document, &self.catalog.manifest),
        }
    }
}
