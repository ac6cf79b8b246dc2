//! Read-only queries over the catalog snapshot
//!
//! Everything here is pure: it inspects the manifest and the local documents
//! and never mutates them. Version comparison is exact string inequality.

use std::collections::HashSet;

use super::{Catalog, NamedList};
use crate::domain::{Bundle, Mod, Profile};

impl Catalog {
    pub fn find_in_manifest(&self, name: &str) -> Option<&Mod> {
        self.manifest.mods.find_named(name)
    }

    pub fn find_installed(&self, name: &str) -> Option<&Mod> {
        self.installed_mods.find_named(name)
    }

    pub fn find_installed_mut(&mut self, name: &str) -> Option<&mut Mod> {
        self.installed_mods.find_named_mut(name)
    }

    pub fn find_bundle_in_manifest(&self, name: &str) -> Option<&Bundle> {
        self.manifest.bundles.find_named(name)
    }

    pub fn find_installed_bundle(&self, name: &str) -> Option<&Bundle> {
        self.installed_bundles.find_named(name)
    }

    pub fn find_installed_bundle_mut(&mut self, name: &str) -> Option<&mut Bundle> {
        self.installed_bundles.find_named_mut(name)
    }

    pub fn find_profile(&self, name: &str) -> Option<&Profile> {
        self.profiles.find_named(name)
    }

    pub fn find_profile_mut(&mut self, name: &str) -> Option<&mut Profile> {
        self.profiles.find_named_mut(name)
    }

    /// Installed entry if there is one, otherwise the manifest entry
    pub fn resolve_mod(&self, name: &str) -> Option<&Mod> {
        self.find_installed(name)
            .or_else(|| self.find_in_manifest(name))
    }

    /// Installed entry if there is one, otherwise the manifest entry
    pub fn resolve_bundle(&self, name: &str) -> Option<&Bundle> {
        self.find_installed_bundle(name)
            .or_else(|| self.find_bundle_in_manifest(name))
    }

    /// Resolve a bundle member name, preferring the installed entry
    pub fn resolve_bundle_member(&self, name: &str) -> Option<&Mod> {
        self.resolve_mod(name)
    }

    pub fn is_installed(&self, name: &str) -> bool {
        self.installed_mods.contains_named(name)
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.find_installed(name).is_some_and(Mod::is_enabled)
    }

    pub fn is_bundle_installed(&self, name: &str) -> bool {
        self.installed_bundles.contains_named(name)
    }

    /// Installed but absent from the manifest
    pub fn is_local(&self, name: &str) -> bool {
        self.is_installed(name) && self.find_in_manifest(name).is_none()
    }

    /// True iff the mod is both published and installed with a different version
    pub fn has_update(&self, name: &str) -> bool {
        match (self.find_in_manifest(name), self.find_installed(name)) {
            (Some(published), Some(installed)) => published.version != installed.version,
            _ => false,
        }
    }

    /// Missing from the installed set, or installed with an update pending
    pub fn is_missing_or_stale(&self, name: &str) -> bool {
        !self.is_installed(name) || self.has_update(name)
    }

    /// Bundle freshness derives from its own version and from every member
    pub fn bundle_has_update(&self, name: &str) -> bool {
        let (Some(published), Some(installed)) = (
            self.find_bundle_in_manifest(name),
            self.find_installed_bundle(name),
        ) else {
            return false;
        };

        if published.version != installed.version {
            return true;
        }

        installed.mods.iter().any(|m| self.is_missing_or_stale(m))
    }

    pub fn is_bundle_missing_or_stale(&self, name: &str) -> bool {
        !self.is_bundle_installed(name) || self.bundle_has_update(name)
    }

    /// Any listed mod or bundle is missing or stale
    pub fn profile_has_update(&self, name: &str) -> bool {
        let Some(profile) = self.find_profile(name) else {
            return false;
        };

        profile.mods.iter().any(|m| self.is_missing_or_stale(m))
            || profile
                .bundles
                .iter()
                .any(|b| self.is_bundle_missing_or_stale(b))
    }

    pub fn is_profile_active(&self, name: &str) -> bool {
        self.find_profile(name).is_some_and(Profile::is_active)
    }

    pub fn active_profiles(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.iter().filter(|p| p.is_active())
    }

    /// Every mod reachable from the active profiles
    ///
    /// Listed mods, members of listed bundles, and the transitive `requires`
    /// of both, resolved installed-first.
    pub fn active_closure(&self) -> HashSet<String> {
        let mut pending: Vec<String> = Vec::new();
        for profile in self.active_profiles() {
            pending.extend(profile.mods.iter().cloned());
            for bundle_name in &profile.bundles {
                if let Some(bundle) = self.resolve_bundle(bundle_name) {
                    pending.extend(bundle.mods.iter().cloned());
                }
            }
        }

        let mut closure = HashSet::new();
        while let Some(name) = pending.pop() {
            if !closure.insert(name.clone()) {
                continue;
            }
            if let Some(m) = self.resolve_mod(&name) {
                pending.extend(m.requires.iter().cloned());
            }
        }
        closure
    }

    /// Installed mods that are currently enabled
    pub fn enabled_mods(&self) -> impl Iterator<Item = &Mod> {
        self.installed_mods.iter().filter(|m| m.is_enabled())
    }
}
