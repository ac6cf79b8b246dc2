//! Profile transitions and composition

use super::{Engine, Entity, Transition};
use crate::catalog::NamedList;
use crate::domain::{Bundle, Profile};
use crate::error::{Result, catalog};

impl Engine<'_> {
    /// Make `name` the active profile
    ///
    /// Disables every installed mod (forced, silent, cascading) and bundle,
    /// marks every other profile disabled and the target active, then applies
    /// each active profile: missing or stale members are installed, the rest
    /// enabled.
    pub fn enable_profile(&mut self, name: &str) -> Result<()> {
        if self.ws.catalog.find_profile(name).is_none() {
            tracing::warn!(name, "No such profile, nothing to enable");
            return Ok(());
        }

        for installed in self.ws.catalog.installed_mods.names() {
            self.disable_mod(&installed, true, true, true)?;
        }
        for bundle in self.ws.catalog.installed_bundles.names() {
            self.disable_bundle(&bundle, true)?;
        }

        let mut flipped: Vec<(String, Transition)> = Vec::new();
        for profile in &mut self.ws.catalog.profiles {
            let disabled = profile.name != name;
            if profile.disabled != disabled {
                profile.disabled = disabled;
                let transition = if disabled {
                    Transition::Disabled
                } else {
                    Transition::Enabled
                };
                flipped.push((profile.name.clone(), transition));
            }
        }
        if !flipped.is_empty() {
            self.dirty.profiles = true;
        }
        for (profile, transition) in flipped {
            self.changed(Entity::Profile, &profile, transition);
        }

        let active: Vec<Profile> = self.ws.catalog.active_profiles().cloned().collect();
        for profile in &active {
            self.apply_profile(profile)?;
        }
        tracing::info!(name, "Enabled profile");
        Ok(())
    }

    fn apply_profile(&mut self, profile: &Profile) -> Result<()> {
        for m in &profile.mods {
            let result = if self.ws.catalog.is_missing_or_stale(m) {
                self.install_mod(m, true)
            } else {
                self.enable_mod(m)
            };
            self.tolerate_malformed(m, result)?;
        }
        for b in &profile.bundles {
            if self.ws.catalog.is_bundle_missing_or_stale(b) {
                self.install_bundle(b, true)?;
            } else {
                self.enable_bundle(b)?;
            }
        }
        Ok(())
    }

    /// Disable the members of an active profile and mark it disabled
    pub fn disable_profile(&mut self, name: &str) -> Result<()> {
        let Some(profile) = self.ws.catalog.find_profile(name).cloned() else {
            return Ok(());
        };
        if profile.disabled {
            return Ok(());
        }

        for m in &profile.mods {
            self.disable_mod(m, true, true, true)?;
        }
        for b in &profile.bundles {
            self.disable_bundle(b, true)?;
        }

        if let Some(p) = self.ws.catalog.find_profile_mut(name) {
            p.disabled = true;
        }
        self.dirty.profiles = true;
        self.changed(Entity::Profile, name, Transition::Disabled);
        tracing::info!(name, "Disabled profile");
        Ok(())
    }

    /// Bring a profile's members up to date
    ///
    /// An active profile is re-enabled. An inactive one only gets its missing
    /// or stale members installed, disabled.
    pub fn update_profile(&mut self, name: &str) -> Result<()> {
        let Some(profile) = self.ws.catalog.find_profile(name).cloned() else {
            return Ok(());
        };
        if profile.is_active() {
            return self.enable_profile(name);
        }

        for m in &profile.mods {
            if self.ws.catalog.is_missing_or_stale(m) {
                let result = self.install_mod(m, false);
                self.tolerate_malformed(m, result)?;
            }
        }
        for b in &profile.bundles {
            if self.ws.catalog.is_bundle_missing_or_stale(b) {
                self.install_bundle(b, false)?;
            }
        }
        Ok(())
    }

    /// Forget a profile; its members keep their current state
    pub fn delete_profile(&mut self, name: &str) -> Result<()> {
        if self.ws.catalog.profiles.remove_named(name).is_none() {
            return Ok(());
        }
        self.dirty.profiles = true;
        self.changed(Entity::Profile, name, Transition::Deleted);
        tracing::info!(name, "Deleted profile");
        Ok(())
    }

    /// Save a profile, replacing any profile with the same name; it starts disabled
    pub fn create_profile(&mut self, name: &str, mods: Vec<String>, bundles: Vec<String>) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(catalog::invalid_profile("profile name is empty"));
        }
        let profile = Profile::new(name, mods, bundles);
        self.ws.catalog.profiles.replace_or_push(profile);
        self.dirty.profiles = true;
        self.changed(Entity::Profile, name, Transition::Created);
        tracing::info!(name, "Created profile");
        Ok(())
    }

    /// Save the current setup as a profile
    ///
    /// Captures the enabled bundles plus the enabled mods that none of those
    /// bundles already covers.
    pub fn capture_profile(&mut self, name: &str) -> Result<()> {
        let catalog = &self.ws.catalog;
        let bundles: Vec<&Bundle> = catalog
            .installed_bundles
            .iter()
            .filter(|b| !b.disabled)
            .collect();
        let mods: Vec<String> = catalog
            .enabled_mods()
            .filter(|m| !bundles.iter().any(|b| b.contains(&m.name)))
            .map(|m| m.name.clone())
            .collect();
        let bundles: Vec<String> = bundles.iter().map(|b| b.name.clone()).collect();
        self.create_profile(name, mods, bundles)
    }

    /// Import a profile document, returning the profile name
    ///
    /// Missing lists become empty; the imported profile starts disabled and
    /// replaces any profile with the same name.
    pub fn import_profile(&mut self, json: &str) -> Result<String> {
        let parsed: Profile = serde_json::from_str(json)
            .map_err(|e| catalog::invalid_profile(format!("not a profile document: {e}")))?;
        let name = parsed.name.trim().to_string();
        self.create_profile(&name, parsed.mods, parsed.bundles)?;
        Ok(name)
    }

    /// Serialize a profile for sharing
    pub fn export_profile(&self, name: &str) -> Result<String> {
        let profile = self
            .ws
            .catalog
            .find_profile(name)
            .ok_or_else(|| catalog::profile_not_found(name))?;
        let mut json = serde_json::to_string_pretty(profile)?;
        json.push('\n');
        Ok(json)
    }
}
