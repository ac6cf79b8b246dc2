//! Bundle transitions
//!
//! A bundle has no payload of its own: every transition replays the matching
//! mod transition over the members, in order, then updates the bundle entry.

use super::{Engine, Entity, Transition};
use crate::catalog::NamedList;
use crate::error::Result;

impl Engine<'_> {
    /// Register a published bundle and install its members
    pub fn install_bundle(&mut self, name: &str, enable: bool) -> Result<()> {
        if !self.content_available("install bundle", name) {
            return Ok(());
        }
        let Some(published) = self.ws.catalog.find_bundle_in_manifest(name).cloned() else {
            tracing::warn!(name, "Bundle is not in the catalog, skipping install");
            return Ok(());
        };

        let mut entry = published.clone();
        entry.disabled = !enable;
        self.ws.catalog.installed_bundles.replace_or_push(entry);
        self.dirty.bundles = true;
        let transition = if enable {
            Transition::Installed
        } else {
            Transition::InstalledDisabled
        };
        self.changed(Entity::Bundle, name, transition);

        for member in &published.mods {
            let result = self.install_mod(member, enable);
            self.tolerate_malformed(member, result)?;
        }
        tracing::info!(name, enabled = enable, "Installed bundle");
        Ok(())
    }

    /// Forget a bundle and uninstall its members (silently guarded unless `force`)
    pub fn uninstall_bundle(&mut self, name: &str, force: bool) -> Result<()> {
        let Some(bundle) = self.ws.catalog.installed_bundles.remove_named(name) else {
            tracing::debug!(name, "Bundle not installed, nothing to uninstall");
            return Ok(());
        };
        self.dirty.bundles = true;
        self.changed(Entity::Bundle, name, Transition::Uninstalled);

        for member in &bundle.mods {
            self.uninstall_mod(member, force, true)?;
        }
        tracing::info!(name, "Uninstalled bundle");
        Ok(())
    }

    /// Disable every member (cascading into requirements) and mark the bundle disabled
    pub fn disable_bundle(&mut self, name: &str, force: bool) -> Result<()> {
        let Some(bundle) = self.ws.catalog.find_installed_bundle(name).cloned() else {
            return Ok(());
        };
        for member in &bundle.mods {
            self.disable_mod(member, force, true, true)?;
        }
        self.set_bundle_disabled(name, true);
        Ok(())
    }

    /// Enable installed members, install missing ones, mark the bundle enabled
    pub fn enable_bundle(&mut self, name: &str) -> Result<()> {
        let Some(bundle) = self.ws.catalog.find_installed_bundle(name).cloned() else {
            tracing::debug!(name, "Bundle not installed, nothing to enable");
            return Ok(());
        };
        for member in &bundle.mods {
            let result = if self.ws.catalog.is_installed(member) {
                self.enable_mod(member)
            } else {
                self.install_mod(member, true)
            };
            self.tolerate_malformed(member, result)?;
        }
        self.set_bundle_disabled(name, false);
        Ok(())
    }

    /// Re-install a bundle from the catalog, keeping it enabled if it is in use
    pub fn update_bundle(&mut self, name: &str) -> Result<()> {
        let catalog = &self.ws.catalog;
        let enable = catalog
            .find_installed_bundle(name)
            .is_some_and(|b| !b.disabled)
            || catalog
                .active_profiles()
                .any(|p| p.bundles.iter().any(|b| b == name));
        self.install_bundle(name, enable)
    }

    fn set_bundle_disabled(&mut self, name: &str, disabled: bool) {
        let Some(bundle) = self.ws.catalog.find_installed_bundle_mut(name) else {
            return;
        };
        if bundle.disabled == disabled {
            return;
        }
        bundle.disabled = disabled;
        self.dirty.bundles = true;
        let transition = if disabled {
            Transition::Disabled
        } else {
            Transition::Enabled
        };
        self.changed(Entity::Bundle, name, transition);
        tracing::info!(name, disabled, "Updated bundle state");
    }
}
