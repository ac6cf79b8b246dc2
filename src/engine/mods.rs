//! Mod transitions

use super::{Engine, Entity, GuardedAction, Notice, Transition};
use crate::catalog::NamedList;
use crate::content::{self, package_file_name};
use crate::domain::Mod;
use crate::error::Result;
use crate::{package, resolver};

impl Engine<'_> {
    /// Download, stage and register `name` and every missing requirement
    ///
    /// A no-op without an active content root, while offline, or when the
    /// manifest does not publish `name`. Requirements are installed first
    /// with the same `enable`; a malformed requirement package is skipped
    /// with a notice, a malformed target package fails the call.
    pub fn install_mod(&mut self, name: &str, enable: bool) -> Result<()> {
        if !self.content_available("install", name) {
            return Ok(());
        }
        if self.ws.network.offline {
            tracing::warn!(name, "Offline, skipping install");
            return Ok(());
        }
        let Some(published) = self.ws.catalog.find_in_manifest(name).cloned() else {
            tracing::warn!(name, "Mod is not in the catalog, skipping install");
            return Ok(());
        };

        for dep in resolver::install_closure(&self.ws.catalog, &published) {
            let result = self.download_and_register(&dep, enable);
            self.tolerate_malformed(&dep, result)?;
        }
        self.download_and_register(name, enable)
    }

    fn download_and_register(&mut self, name: &str, enable: bool) -> Result<()> {
        content::check_mod_name(name)?;
        tracing::debug!(name, enable, "Downloading package");
        let bytes = self.fetch(|f| f.mod_package(name))?;
        let mut descriptor = package::read_metadata(&bytes, &package_file_name(name))?;

        if descriptor.name != name {
            tracing::warn!(name, packaged = %descriptor.name, "Package describes another name, keeping the catalog name");
            descriptor.name = name.to_string();
        }
        if let Some(published) = self.ws.catalog.find_in_manifest(name) {
            if published.version != descriptor.version {
                tracing::debug!(name, packaged = %descriptor.version, published = %published.version, "Using the catalog version");
                descriptor.version.clone_from(&published.version);
            }
        }
        descriptor.disabled = !enable;
        descriptor.is_local = false;

        self.ws.content.stage(name, &bytes)?;
        if enable {
            self.ws.content.activate(name)?;
        } else {
            self.ws.content.deactivate(name)?;
        }

        self.ws.catalog.installed_mods.replace_or_push(descriptor);
        self.dirty.mods = true;
        let transition = if enable {
            Transition::Installed
        } else {
            Transition::InstalledDisabled
        };
        self.changed(Entity::Mod, name, transition);
        tracing::info!(name, enabled = enable, "Installed mod");
        Ok(())
    }

    /// Remove an installed mod and every requirement nothing else needs
    ///
    /// Without `force`, any installed mod that requires `name` blocks the
    /// call; the block is reported as a notice unless `silent`.
    pub fn uninstall_mod(&mut self, name: &str, force: bool, silent: bool) -> Result<()> {
        if !self.content_available("uninstall", name) {
            return Ok(());
        }
        let Some(target) = self.ws.catalog.find_installed(name).cloned() else {
            tracing::debug!(name, "Not installed, nothing to uninstall");
            return Ok(());
        };

        if !force {
            if let Some(dependent) = resolver::find_dependent(&self.ws.catalog, name, |_| true) {
                let dependent = dependent.name.clone();
                tracing::debug!(name, %dependent, "Uninstall blocked by dependent");
                if !silent {
                    self.notice(Notice::DependencyOf {
                        name: name.to_string(),
                        dependent,
                        action: GuardedAction::Uninstall,
                    });
                }
                return Ok(());
            }
        }

        self.ws.content.unstage(name)?;
        self.ws.content.deactivate(name)?;
        self.ws.catalog.installed_mods.remove_named(name);
        self.dirty.mods = true;
        self.changed(Entity::Mod, name, Transition::Uninstalled);
        tracing::info!(name, "Uninstalled mod");

        for orphan in resolver::orphans_after_uninstall(&self.ws.catalog, &target) {
            self.uninstall_mod(&orphan, false, true)?;
        }
        Ok(())
    }

    /// Disable an installed mod, removing it from the active root
    ///
    /// Without `force`, an enabled installed mod that requires `name` blocks
    /// the call, unless that mod is itself being disabled further up this
    /// cascade. With `cascade`, requirements are disabled first.
    pub fn disable_mod(&mut self, name: &str, force: bool, silent: bool, cascade: bool) -> Result<()> {
        if !self.content_available("disable", name) {
            return Ok(());
        }
        let Some(target) = self.ws.catalog.find_installed(name).cloned() else {
            return Ok(());
        };
        if target.disabled || self.disabling.contains(name) {
            return Ok(());
        }

        if !force {
            let disabling = &self.disabling;
            let dependent = resolver::find_dependent(&self.ws.catalog, name, |m| {
                m.is_enabled() && !disabling.contains(&m.name)
            })
            .map(|m| m.name.clone());
            if let Some(dependent) = dependent {
                tracing::debug!(name, %dependent, "Disable blocked by enabled dependent");
                if !silent {
                    self.notice(Notice::DependencyOf {
                        name: name.to_string(),
                        dependent,
                        action: GuardedAction::Disable,
                    });
                }
                return Ok(());
            }
        }

        if cascade {
            self.disabling.insert(name.to_string());
            let result = target
                .requires
                .iter()
                .try_for_each(|dep| self.disable_mod(dep, force, silent, cascade));
            self.disabling.remove(name);
            result?;
        }

        self.ws.content.deactivate(name)?;
        if let Some(m) = self.ws.catalog.find_installed_mut(name) {
            m.disabled = true;
        }
        self.dirty.mods = true;
        self.changed(Entity::Mod, name, Transition::Disabled);
        tracing::info!(name, "Disabled mod");
        Ok(())
    }

    /// Enable an installed mod and, first, everything it requires
    ///
    /// Disabled requirements are enabled, missing ones installed. No
    /// compatibility check happens here.
    pub fn enable_mod(&mut self, name: &str) -> Result<()> {
        if !self.content_available("enable", name) {
            return Ok(());
        }
        let Some(target) = self.ws.catalog.find_installed(name).cloned() else {
            tracing::debug!(name, "Not installed, nothing to enable");
            return Ok(());
        };
        if target.is_enabled() || self.enabling.contains(name) {
            return Ok(());
        }

        self.enabling.insert(name.to_string());
        let result = self.enable_requirements(&target);
        self.enabling.remove(name);
        result?;

        self.ws.content.activate(name)?;
        if let Some(m) = self.ws.catalog.find_installed_mut(name) {
            m.disabled = false;
        }
        self.dirty.mods = true;
        self.changed(Entity::Mod, name, Transition::Enabled);
        tracing::info!(name, "Enabled mod");
        Ok(())
    }

    fn enable_requirements(&mut self, target: &Mod) -> Result<()> {
        for dep in &target.requires {
            match self.ws.catalog.find_installed(dep).map(Mod::is_enabled) {
                Some(true) => {}
                Some(false) => self.enable_mod(dep)?,
                None => self.install_mod(dep, true)?,
            }
        }
        Ok(())
    }

    /// Re-install the latest package of `name`
    ///
    /// The result is enabled when the mod belongs to an active profile or is
    /// currently enabled; otherwise it is installed disabled.
    pub fn update_mod(&mut self, name: &str) -> Result<()> {
        let enable = self.ws.catalog.is_enabled(name)
            || self.ws.catalog.active_closure().contains(name);
        self.install_mod(name, enable)
    }

    /// Re-install every installed mod with a newer catalog version, keeping its state
    pub fn update_all(&mut self) -> Result<()> {
        let stale: Vec<(String, bool)> = self
            .ws
            .catalog
            .installed_mods
            .iter()
            .filter(|m| self.ws.catalog.has_update(&m.name))
            .map(|m| (m.name.clone(), m.is_enabled()))
            .collect();

        if stale.is_empty() {
            tracing::debug!("All installed mods are up to date");
        }
        for (name, enabled) in stale {
            self.install_mod(&name, enabled)?;
        }
        Ok(())
    }
}
