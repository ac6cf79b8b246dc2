//! Catalog refresh and reconciliation with the disk

use super::{Engine, Entity, Notice, Transition};
use crate::catalog::NamedList;
use crate::error::Result;
use crate::package;

/// What a `sync` pass should do besides refreshing the manifest
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// Running client version, compared against the published one
    pub client_version: Option<String>,
    pub update_mods: bool,
}

impl Engine<'_> {
    /// Fetch the manifest when the cached copy is missing or outdated
    ///
    /// Returns whether a new manifest was downloaded. This is the one call
    /// that retries the network after the workspace went offline; a
    /// successful round trip clears the offline flag for the rest of the
    /// invocation.
    pub fn refresh_manifest(&mut self) -> Result<bool> {
        let cached = self.ws.has_manifest();
        let download = if cached {
            let remote = self.fetch_anyway(|f| f.manifest_version())?;
            let remote = remote.trim();
            !remote.is_empty() && remote != self.ws.catalog.manifest.version
        } else {
            true
        };

        if download {
            let raw = self.fetch_anyway(|f| f.manifest())?;
            self.ws.set_manifest(&raw)?;
            let version = self.ws.catalog.manifest.version.clone();
            self.changed(Entity::Manifest, &version, Transition::Refreshed);
            tracing::info!(%version, "Downloaded catalog manifest");
        } else {
            tracing::debug!("Cached manifest is current");
        }
        self.ws.network.mark_online();
        Ok(download)
    }

    /// Compare the running client version with the published one
    ///
    /// A differing version is reported as a [`Notice::ClientUpdate`].
    pub fn check_client_update(&mut self, current: &str) -> Result<Option<String>> {
        let latest = self.fetch(|f| f.client_version())?;
        let latest = latest.trim().to_string();
        if latest.is_empty() || latest == current {
            return Ok(None);
        }
        self.notice(Notice::ClientUpdate {
            current: current.to_string(),
            latest: latest.clone(),
        });
        Ok(Some(latest))
    }

    /// Reconcile the installed set with packages found in the active root
    ///
    /// Unknown packages are adopted (registered enabled, staged, renamed to
    /// `<name>.zip`). Then every local mod whose staged package is gone is
    /// dropped, and every local mod missing from the active root is marked
    /// disabled. Unreadable archives are skipped.
    pub fn detect_local_mods(&mut self) -> Result<()> {
        if !self.content_available("detect local mods", "*") {
            return Ok(());
        }

        for path in self.ws.content.active_packages()? {
            let descriptor = match package::read_metadata_file(&path) {
                Ok(descriptor) => descriptor,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable package");
                    continue;
                }
            };
            if self.ws.catalog.is_installed(&descriptor.name) {
                continue;
            }

            let name = descriptor.name.clone();
            self.ws.content.adopt(&path, &name)?;
            let mut entry = descriptor;
            entry.disabled = false;
            self.ws.catalog.installed_mods.push(entry);
            self.dirty.mods = true;
            self.changed(Entity::Mod, &name, Transition::Adopted);
            tracing::info!(%name, path = %path.display(), "Registered local mod");
        }

        self.ws.catalog.refresh_local_flags();

        let mut removed: Vec<String> = Vec::new();
        let mut disabled: Vec<String> = Vec::new();
        for m in self.ws.catalog.installed_mods.iter().filter(|m| m.is_local) {
            if !self.ws.content.is_staged(&m.name) {
                removed.push(m.name.clone());
            } else if !m.disabled && !self.ws.content.is_active(&m.name) {
                disabled.push(m.name.clone());
            }
        }

        for name in disabled {
            if let Some(m) = self.ws.catalog.find_installed_mut(&name) {
                m.disabled = true;
            }
            self.dirty.mods = true;
            self.changed(Entity::Mod, &name, Transition::Disabled);
            tracing::info!(%name, "Local mod is not in the install location, marked disabled");
        }
        for name in removed {
            self.ws.catalog.installed_mods.remove_named(&name);
            self.dirty.mods = true;
            self.changed(Entity::Mod, &name, Transition::Removed);
            tracing::info!(%name, "Local mod package is gone, forgot it");
        }
        Ok(())
    }

    /// The startup pass: client check, manifest refresh, local detection, auto-update
    ///
    /// Network failures do not fail the pass; they leave the workspace
    /// offline and the remaining network steps are skipped.
    pub fn sync(&mut self, options: &SyncOptions) -> Result<()> {
        if let Some(current) = options.client_version.as_deref() {
            match self.check_client_update(current) {
                Err(e) if e.is_network() => {}
                other => {
                    other?;
                }
            }
        }

        match self.refresh_manifest() {
            Err(e) if e.is_network() => {}
            other => {
                other?;
            }
        }

        self.detect_local_mods()?;

        if options.update_mods && !self.ws.network.offline {
            match self.update_all() {
                Err(e) if e.is_network() => {}
                other => other?,
            }
        }
        Ok(())
    }
}
