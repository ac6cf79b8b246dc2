//! Test fixtures and utilities for reducing test setup duplication.
//!
//! This module provides in-memory stand-ins for the persistence store and
//! the catalog transport, package archive builders, and a ready-made
//! environment with an available install location.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{TestEnv, published};
//!
//! #[test]
//! fn my_test() {
//!     let mut env = TestEnv::new()
//!         .publish(published("speed", "1", &["core"]))
//!         .publish(published("core", "1", &[]));
//!
//!     env.run(|e| e.install_mod("speed", true)).unwrap();
//!     assert!(env.is_enabled("core"));
//! }
//! ```

#![allow(clippy::expect_used)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fs;
use std::io::{Cursor, Write};
use std::path::PathBuf;
use std::rc::Rc;

use tempfile::TempDir;

use crate::catalog::NamedList;
use crate::domain::{Bundle, Manifest, Mod, Profile};
use crate::engine::{self, Engine, Outcome};
use crate::error::{Result, network};
use crate::fetcher::CatalogFetcher;
use crate::store::{Document, Store};
use crate::workspace::Workspace;

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// A catalog entry with a version and requirements
#[must_use]
pub fn published(name: &str, version: &str, requires: &[&str]) -> Mod {
    let mut m = Mod::new(name, version);
    m.requires = requires.iter().map(|r| (*r).to_string()).collect();
    m
}

/// A zip archive holding `metadata` as its `_metadata` entry (or no such entry)
#[must_use]
pub fn raw_package_bytes(metadata: Option<&str>) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Stored);

    if let Some(metadata) = metadata {
        writer
            .start_file("_metadata", options)
            .expect("Failed to start metadata entry");
        writer
            .write_all(metadata.as_bytes())
            .expect("Failed to write metadata");
    }
    writer
        .start_file("mod.pck", options)
        .expect("Failed to start payload entry");
    writer.write_all(b"payload").expect("Failed to write payload");

    writer.finish().expect("Failed to finish zip").into_inner()
}

/// A valid package for `m`
#[must_use]
pub fn package_bytes(m: &Mod) -> Vec<u8> {
    let json = serde_json::to_string(m).expect("Failed to serialize mod");
    raw_package_bytes(Some(&json))
}

/// In-memory [`Store`] that counts writes per document
///
/// Clones share the same documents, so a test can keep a handle after
/// moving one into a [`Workspace`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: Rc<RefCell<HashMap<Document, String>>>,
    writes: Rc<RefCell<HashMap<Document, usize>>>,
}

impl MemoryStore {
    pub fn writes(&self, document: Document) -> usize {
        self.writes.borrow().get(&document).copied().unwrap_or(0)
    }

    pub fn total_state_writes(&self) -> usize {
        [
            Document::InstalledMods,
            Document::InstalledBundles,
            Document::Profiles,
        ]
        .into_iter()
        .map(|d| self.writes(d))
        .sum()
    }
}

impl Store for MemoryStore {
    fn read(&self, document: Document) -> Result<Option<String>> {
        Ok(self.documents.borrow().get(&document).cloned())
    }

    fn write(&self, document: Document, contents: &str) -> Result<()> {
        self.documents
            .borrow_mut()
            .insert(document, contents.to_string());
        *self.writes.borrow_mut().entry(document).or_insert(0) += 1;
        Ok(())
    }
}

/// In-memory [`CatalogFetcher`] serving a manifest and generated packages
#[derive(Debug, Default)]
pub struct MemoryFetcher {
    manifest: RefCell<Manifest>,
    packages: RefCell<HashMap<String, Vec<u8>>>,
    client_version: RefCell<String>,
    unreachable: Cell<bool>,
    downloads: RefCell<Vec<String>>,
}

impl MemoryFetcher {
    #[must_use]
    pub fn new() -> Self {
        let fetcher = Self::default();
        fetcher.manifest.borrow_mut().version = "1".to_string();
        fetcher
    }

    pub fn publish(&self, m: Mod) {
        self.packages
            .borrow_mut()
            .insert(m.name.clone(), package_bytes(&m));
        self.manifest.borrow_mut().mods.replace_or_push(m);
    }

    pub fn publish_bundle(&self, bundle: Bundle) {
        self.manifest.borrow_mut().bundles.replace_or_push(bundle);
    }

    /// Publish a new version of an existing mod and bump the manifest version
    pub fn bump(&self, name: &str, version: &str) {
        let updated = {
            let manifest = self.manifest.borrow();
            let mut m = manifest
                .mods
                .find_named(name)
                .cloned()
                .expect("bumped mod must be published");
            m.version = version.to_string();
            m
        };
        self.publish(updated);
        let mut manifest = self.manifest.borrow_mut();
        let next = manifest.version.parse::<u64>().unwrap_or(0) + 1;
        manifest.version = next.to_string();
    }

    /// Serve junk instead of a zip archive for `name`
    pub fn corrupt(&self, name: &str) {
        self.packages
            .borrow_mut()
            .insert(name.to_string(), b"not a zip".to_vec());
    }

    pub fn set_client_version(&self, version: &str) {
        *self.client_version.borrow_mut() = version.to_string();
    }

    pub fn set_unreachable(&self, unreachable: bool) {
        self.unreachable.set(unreachable);
    }

    /// Copy of the manifest as currently published
    pub fn snapshot(&self) -> Manifest {
        self.manifest.borrow().clone()
    }

    /// Names of the packages downloaded so far, in order
    pub fn downloads(&self) -> Vec<String> {
        self.downloads.borrow().clone()
    }

    fn check_reachable(&self) -> Result<()> {
        if self.unreachable.get() {
            Err(network::unavailable("connection refused"))
        } else {
            Ok(())
        }
    }
}

impl CatalogFetcher for MemoryFetcher {
    fn manifest_version(&self) -> Result<String> {
        self.check_reachable()?;
        Ok(self.manifest.borrow().version.clone())
    }

    fn manifest(&self) -> Result<String> {
        self.check_reachable()?;
        Ok(serde_json::to_string(&*self.manifest.borrow()).expect("Failed to serialize manifest"))
    }

    fn mod_package(&self, name: &str) -> Result<Vec<u8>> {
        self.check_reachable()?;
        self.downloads.borrow_mut().push(name.to_string());
        self.packages
            .borrow()
            .get(name)
            .cloned()
            .ok_or_else(|| network::unavailable(format!("HTTP 404 for mod/{name}")))
    }

    fn client_version(&self) -> Result<String> {
        self.check_reachable()?;
        Ok(self.client_version.borrow().clone())
    }
}

/// Lays out a mirror catalog directory
#[derive(Debug)]
pub struct MirrorBuilder {
    root: PathBuf,
    manifest: Manifest,
    client_version: String,
}

impl MirrorBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            manifest: Manifest {
                version: "1".to_string(),
                ..Manifest::default()
            },
            client_version: String::new(),
        }
    }

    #[must_use]
    pub fn publish(mut self, m: Mod) -> Self {
        self.manifest.mods.replace_or_push(m);
        self
    }

    #[must_use]
    pub fn client_version(mut self, version: &str) -> Self {
        self.client_version = version.to_string();
        self
    }

    /// Write the mirror and return its root
    ///
    /// # Panics
    ///
    /// Panics if any file cannot be written.
    pub fn build(self) -> PathBuf {
        let packages = self.root.join("mod");
        fs::create_dir_all(&packages).expect("Failed to create mirror");
        for m in &self.manifest.mods {
            fs::write(packages.join(format!("{}.zip", m.name)), package_bytes(m))
                .expect("Failed to write package");
        }
        fs::write(
            self.root.join("mod_manifest"),
            serde_json::to_string_pretty(&self.manifest).expect("Failed to serialize manifest"),
        )
        .expect("Failed to write manifest");
        fs::write(self.root.join("manifest_version"), &self.manifest.version)
            .expect("Failed to write manifest version");
        fs::write(self.root.join("client_version"), &self.client_version)
            .expect("Failed to write client version");
        self.root
    }
}

/// A workspace over a [`MemoryStore`] with an available install location,
/// plus a [`MemoryFetcher`] whose manifest is already loaded
pub struct TestEnv {
    pub temp: TempDir,
    pub ws: Workspace,
    pub store: MemoryStore,
    pub fetcher: MemoryFetcher,
}

impl TestEnv {
    #[must_use]
    pub fn new() -> Self {
        let temp = create_temp_dir();
        let game = temp.path().join("game");
        fs::create_dir_all(game.join("mods")).expect("Failed to create game dir");

        let store = MemoryStore::default();
        let home = temp.path().join("home");
        let mut ws =
            Workspace::open_with(&home, Box::new(store.clone())).expect("Failed to open workspace");
        let mut config = ws.config.clone();
        config.install_location = game.display().to_string();
        ws.set_config(config).expect("Failed to set config");

        let fetcher = MemoryFetcher::new();
        ws.catalog.set_manifest(fetcher.snapshot());

        Self {
            temp,
            ws,
            store,
            fetcher,
        }
    }

    /// Publish a mod and reload the manifest
    #[must_use]
    pub fn publish(self, m: Mod) -> Self {
        self.fetcher.publish(m);
        self.reload()
    }

    #[must_use]
    pub fn publish_bundle(self, bundle: Bundle) -> Self {
        self.fetcher.publish_bundle(bundle);
        self.reload()
    }

    #[must_use]
    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.ws.catalog.profiles.replace_or_push(profile);
        self
    }

    #[must_use]
    pub fn reload(mut self) -> Self {
        self.sync_manifest();
        self
    }

    pub fn sync_manifest(&mut self) {
        self.ws.catalog.set_manifest(self.fetcher.snapshot());
    }

    /// Run one top-level engine operation
    pub fn run<F>(&mut self, op: F) -> Result<Outcome>
    where
        F: FnOnce(&mut Engine<'_>) -> Result<()>,
    {
        engine::run(&mut self.ws, &self.fetcher, op)
    }

    pub fn game_mods(&self) -> PathBuf {
        self.temp.path().join("game").join("mods")
    }

    pub fn installed(&self, name: &str) -> Option<&Mod> {
        self.ws.catalog.find_installed(name)
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.ws.catalog.is_enabled(name)
    }

    pub fn is_disabled(&self, name: &str) -> bool {
        self.installed(name).is_some_and(|m| m.disabled)
    }

    pub fn is_active_file(&self, name: &str) -> bool {
        self.ws.content.is_active(name)
    }

    pub fn is_staged(&self, name: &str) -> bool {
        self.ws.content.is_staged(name)
    }

    /// Drop a package into the install location as if sideloaded
    pub fn sideload(&self, file_name: &str, m: &Mod) -> PathBuf {
        let path = self.game_mods().join(file_name);
        fs::write(&path, package_bytes(m)).expect("Failed to sideload package");
        path
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_temp_dir() {
        let temp = create_temp_dir();
        assert!(temp.path().exists());
    }

    #[test]
    fn test_memory_store_counts_writes() {
        let store = MemoryStore::default();
        let handle = store.clone();
        store.write(Document::Profiles, "[]").unwrap();
        store.write(Document::Profiles, "[]").unwrap();
        assert_eq!(handle.writes(Document::Profiles), 2);
        assert_eq!(handle.read(Document::Profiles).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_memory_fetcher_bump() {
        let fetcher = MemoryFetcher::new();
        fetcher.publish(published("a", "1", &[]));
        fetcher.bump("a", "2");
        assert_eq!(fetcher.snapshot().version, "2");
        assert_eq!(fetcher.snapshot().mods[0].version, "2");
    }

    #[test]
    fn test_env_has_available_install_location() {
        let env = TestEnv::new();
        assert!(env.ws.content.is_available());
        assert!(env.game_mods().is_dir());
    }
}
