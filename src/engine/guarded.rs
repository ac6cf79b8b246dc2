//! User-facing entry points that consult the compatibility checker
//!
//! The plain transitions never look at `incompatible`. These wrappers run
//! the pairwise check first (unless forced) over everything the transition
//! would turn on, requirements included, and report a conflict as a
//! blocking notice the caller can override by retrying with `force`.

use super::{Engine, Notice};
use crate::compat;
use crate::error::Result;

impl Engine<'_> {
    /// Install a mod, enabled only if it and the requirements it pulls in
    /// are compatible with the enabled set
    pub fn install_mod_checked(&mut self, name: &str, force: bool) -> Result<()> {
        let catalog = &self.ws.catalog;
        let conflict = if force {
            None
        } else {
            catalog
                .find_in_manifest(name)
                .and_then(|root| compat::set_conflict(catalog, &compat::install_set(catalog, root)))
        };

        let enable = conflict.is_none();
        if let Some(conflict) = conflict {
            tracing::info!(name, member = %conflict.member, conflicts_with = %conflict.enabled, "Incompatible with an enabled mod, installing disabled");
            self.notice(Notice::Incompatible {
                name: name.to_string(),
                member: conflict.member,
                conflicts_with: conflict.enabled,
            });
        }
        self.install_mod(name, enable)
    }

    /// Enable a mod unless it, or a requirement it would turn on, conflicts
    pub fn enable_mod_checked(&mut self, name: &str, force: bool) -> Result<()> {
        if !force {
            let catalog = &self.ws.catalog;
            let conflict = catalog
                .find_installed(name)
                .and_then(|root| compat::set_conflict(catalog, &compat::enable_set(catalog, root)));
            if let Some(conflict) = conflict {
                self.notice(Notice::Incompatible {
                    name: name.to_string(),
                    member: conflict.member,
                    conflicts_with: conflict.enabled,
                });
                return Ok(());
            }
        }
        self.enable_mod(name)
    }

    /// Install a bundle, enabled only if no member conflicts with the enabled set
    pub fn install_bundle_checked(&mut self, name: &str, force: bool) -> Result<()> {
        let conflict = if force {
            None
        } else {
            self.ws
                .catalog
                .find_bundle_in_manifest(name)
                .and_then(|bundle| compat::bundle_install_conflict(&self.ws.catalog, bundle))
        };

        let enable = conflict.is_none();
        if let Some(conflict) = conflict {
            self.notice(Notice::BundleIncompatible {
                bundle: name.to_string(),
                member: conflict.member,
                conflicts_with: conflict.enabled,
            });
        }
        self.install_bundle(name, enable)
    }

    /// Enable a bundle unless a member conflicts with an enabled mod
    pub fn enable_bundle_checked(&mut self, name: &str, force: bool) -> Result<()> {
        if !force {
            let conflict = self
                .ws
                .catalog
                .find_installed_bundle(name)
                .and_then(|bundle| compat::bundle_conflict(&self.ws.catalog, bundle));
            if let Some(conflict) = conflict {
                self.notice(Notice::BundleIncompatible {
                    bundle: name.to_string(),
                    member: conflict.member,
                    conflicts_with: conflict.enabled,
                });
                return Ok(());
            }
        }
        self.enable_bundle(name)
    }

    /// Enable a profile unless two of its own mods conflict
    pub fn enable_profile_checked(&mut self, name: &str, force: bool) -> Result<()> {
        if !force {
            let conflict = self
                .ws
                .catalog
                .find_profile(name)
                .and_then(|profile| compat::profile_conflict(&self.ws.catalog, profile));
            if let Some(conflict) = conflict {
                self.notice(Notice::ProfileIncompatible {
                    profile: name.to_string(),
                    member: conflict.member,
                    conflicts_with: conflict.enabled,
                });
                return Ok(());
            }
        }
        self.enable_profile(name)
    }
}
