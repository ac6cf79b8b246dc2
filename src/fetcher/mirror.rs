//! Local directory catalog
//!
//! A mirror answers the same requests as the server from plain files, and
//! applies publish requests by editing those files. Passphrases are not
//! checked: whoever can write the directory owns the mirror.

use std::fs;
use std::path::{Path, PathBuf};

use super::{CatalogFetcher, CatalogPublisher, ModUpload};
use crate::catalog::NamedList;
use crate::content::{check_mod_name, package_file_name};
use crate::domain::{Bundle, Manifest};
use crate::error::{Result, network};
use crate::package;

const MANIFEST_FILE: &str = "mod_manifest";
const MANIFEST_VERSION_FILE: &str = "manifest_version";
const CLIENT_VERSION_FILE: &str = "client_version";
const PACKAGE_DIR: &str = "mod";

#[derive(Debug, Clone)]
pub struct MirrorFetcher {
    root: PathBuf,
}

impl MirrorFetcher {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read_text(&self, file: &str) -> Result<String> {
        let path = self.root.join(file);
        fs::read_to_string(&path)
            .map_err(|e| network::unavailable(format!("{}: {e}", path.display())))
    }

    fn write_text(&self, file: &str, contents: &str) -> Result<()> {
        let path = self.root.join(file);
        fs::write(&path, contents)
            .map_err(|e| network::rejected(format!("{}: {e}", path.display())))
    }

    fn package_path(&self, name: &str) -> Result<PathBuf> {
        check_mod_name(name)?;
        Ok(self.root.join(PACKAGE_DIR).join(package_file_name(name)))
    }

    fn load_manifest(&self) -> Result<Manifest> {
        if !self.root.join(MANIFEST_FILE).exists() {
            return Ok(Manifest::default());
        }
        Manifest::from_json(&self.read_text(MANIFEST_FILE)?)
    }

    /// Write the manifest back with a bumped version
    fn publish_manifest(&self, mut manifest: Manifest) -> Result<()> {
        manifest.version = next_version(&manifest.version);
        let text = serde_json::to_string_pretty(&manifest)
            .map_err(|e| network::rejected(e.to_string()))?;
        fs::create_dir_all(&self.root).map_err(|e| network::rejected(e.to_string()))?;
        self.write_text(MANIFEST_FILE, &text)?;
        self.write_text(MANIFEST_VERSION_FILE, &manifest.version)
    }
}

fn next_version(current: &str) -> String {
    current
        .trim()
        .parse::<u64>()
        .map_or_else(|_| "1".to_string(), |v| (v + 1).to_string())
}

impl CatalogFetcher for MirrorFetcher {
    fn manifest_version(&self) -> Result<String> {
        Ok(self.read_text(MANIFEST_VERSION_FILE)?.trim().to_string())
    }

    fn manifest(&self) -> Result<String> {
        self.read_text(MANIFEST_FILE)
    }

    fn mod_package(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.package_path(name)?;
        fs::read(&path).map_err(|e| network::unavailable(format!("{}: {e}", path.display())))
    }

    fn client_version(&self) -> Result<String> {
        Ok(self.read_text(CLIENT_VERSION_FILE)?.trim().to_string())
    }
}

impl CatalogPublisher for MirrorFetcher {
    fn upload_mod(&self, upload: &ModUpload<'_>) -> Result<String> {
        let mut descriptor = package::read_metadata_file(upload.package)?;
        if descriptor.name != upload.name {
            return Err(network::rejected(format!(
                "package describes '{}', not '{}'",
                descriptor.name, upload.name
            )));
        }
        descriptor.tags = upload.tags.to_vec();
        descriptor.disabled = false;

        let target = self.package_path(upload.name)?;
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| network::rejected(e.to_string()))?;
        }
        fs::copy(upload.package, &target).map_err(|e| network::rejected(e.to_string()))?;

        let mut manifest = self.load_manifest()?;
        manifest.mods.replace_or_push(descriptor);
        self.publish_manifest(manifest)?;
        Ok(format!("Uploaded mod '{}'", upload.name))
    }

    fn upload_bundle(&self, bundle: &Bundle, _passphrase: &str, _bundle_passphrase: &str) -> Result<String> {
        let mut manifest = self.load_manifest()?;
        if let Some(missing) = bundle
            .mods
            .iter()
            .find(|m| !manifest.mods.contains_named(m))
        {
            return Err(network::rejected(format!("unknown mod '{missing}' in bundle")));
        }
        let mut published = bundle.clone();
        published.disabled = false;
        manifest.bundles.replace_or_push(published);
        self.publish_manifest(manifest)?;
        Ok(format!("Uploaded bundle '{}'", bundle.name))
    }

    fn delete_mod(&self, name: &str, _passphrase: &str) -> Result<String> {
        let path = self.package_path(name)?;
        let mut manifest = self.load_manifest()?;
        if manifest.mods.remove_named(name).is_none() {
            return Err(network::rejected(format!("no mod named '{name}'")));
        }
        if path.exists() {
            fs::remove_file(&path).map_err(|e| network::rejected(e.to_string()))?;
        }
        self.publish_manifest(manifest)?;
        Ok(format!("Deleted mod '{name}'"))
    }

    fn delete_bundle(&self, name: &str, _passphrase: &str) -> Result<String> {
        let mut manifest = self.load_manifest()?;
        if manifest.bundles.remove_named(name).is_none() {
            return Err(network::rejected(format!("no bundle named '{name}'")));
        }
        self.publish_manifest(manifest)?;
        Ok(format!("Deleted bundle '{name}'"))
    }
}
