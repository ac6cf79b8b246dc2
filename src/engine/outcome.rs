//! What an operation did, and what it needs the user to decide

use crate::error::{ModsyncError, conflict};
use crate::store::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Mod,
    Bundle,
    Profile,
    Manifest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Installed,
    InstalledDisabled,
    Uninstalled,
    Enabled,
    Disabled,
    /// Sideloaded package registered from the active root
    Adopted,
    /// Local entry dropped because its package is gone
    Removed,
    Created,
    Deleted,
    Refreshed,
}

/// A name-keyed state change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub entity: Entity,
    pub name: String,
    pub transition: Transition,
}

/// The guarded action a dependency notice blocked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardedAction {
    Uninstall,
    Disable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// `name` is still required by `dependent`
    DependencyOf {
        name: String,
        dependent: String,
        action: GuardedAction,
    },
    /// Enabling `name` would turn on `member` (itself or a requirement),
    /// which clashes with `conflicts_with`
    Incompatible {
        name: String,
        member: String,
        conflicts_with: String,
    },
    BundleIncompatible {
        bundle: String,
        member: String,
        conflicts_with: String,
    },
    ProfileIncompatible {
        profile: String,
        member: String,
        conflicts_with: String,
    },
    MalformedPackage {
        name: String,
        reason: String,
    },
    ClientUpdate {
        current: String,
        latest: String,
    },
}

impl Notice {
    /// Blocking notices stopped (part of) the request and can be overridden
    pub fn is_blocking(&self) -> bool {
        matches!(
            self,
            Notice::DependencyOf { .. }
                | Notice::Incompatible { .. }
                | Notice::BundleIncompatible { .. }
                | Notice::ProfileIncompatible { .. }
        )
    }

    /// The error a declined blocking notice turns into
    pub fn to_error(&self) -> Option<ModsyncError> {
        match self {
            Notice::DependencyOf {
                name,
                dependent,
                action: GuardedAction::Uninstall,
            } => Some(conflict::required_for_uninstall(name, dependent)),
            Notice::DependencyOf {
                name,
                dependent,
                action: GuardedAction::Disable,
            } => Some(conflict::required_for_disable(name, dependent)),
            Notice::Incompatible {
                member,
                conflicts_with,
                ..
            }
            | Notice::BundleIncompatible {
                member,
                conflicts_with,
                ..
            }
            | Notice::ProfileIncompatible {
                member,
                conflicts_with,
                ..
            } => Some(conflict::incompatible(member, conflicts_with)),
            Notice::MalformedPackage { .. } | Notice::ClientUpdate { .. } => None,
        }
    }
}

/// Accumulated result of one top-level operation
#[derive(Debug, Default, Clone)]
pub struct Outcome {
    pub changes: Vec<Change>,
    pub notices: Vec<Notice>,
    /// Documents written when the operation finished
    pub written: Vec<Document>,
}

impl Outcome {
    pub fn is_noop(&self) -> bool {
        self.changes.is_empty() && self.written.is_empty()
    }

    pub fn blocking_notices(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter().filter(|n| n.is_blocking())
    }

    /// Changes to mods, in the order they happened
    pub fn mod_changes(&self) -> impl Iterator<Item = (&str, Transition)> {
        self.changes
            .iter()
            .filter(|c| c.entity == Entity::Mod)
            .map(|c| (c.name.as_str(), c.transition))
    }
}
