//! Reporting operation outcomes

use console::{Style, Term};

use crate::engine::{Change, Entity, GuardedAction, Notice, Outcome, Transition};

fn entity_label(entity: Entity) -> &'static str {
    match entity {
        Entity::Mod => "mod",
        Entity::Bundle => "bundle",
        Entity::Profile => "profile",
        Entity::Manifest => "catalog",
    }
}

/// One line describing a change, e.g. `Installed mod speedmod`
pub fn describe_change(change: &Change) -> String {
    let entity = entity_label(change.entity);
    let name = &change.name;
    match change.transition {
        Transition::Installed => format!("Installed {entity} {name}"),
        Transition::InstalledDisabled => format!("Installed {entity} {name} (disabled)"),
        Transition::Uninstalled => format!("Uninstalled {entity} {name}"),
        Transition::Enabled => format!("Enabled {entity} {name}"),
        Transition::Disabled => format!("Disabled {entity} {name}"),
        Transition::Adopted => format!("Registered local {entity} {name}"),
        Transition::Removed => format!("Forgot local {entity} {name} (package missing)"),
        Transition::Created => format!("Saved {entity} {name}"),
        Transition::Deleted => format!("Deleted {entity} {name}"),
        Transition::Refreshed => format!("Refreshed {entity} to version {name}"),
    }
}

pub fn describe_notice(notice: &Notice) -> String {
    match notice {
        Notice::DependencyOf {
            name,
            dependent,
            action: GuardedAction::Uninstall,
        } => format!("'{name}' is a dependency of '{dependent}'. Uninstall it anyway?"),
        Notice::DependencyOf {
            name,
            dependent,
            action: GuardedAction::Disable,
        } => format!("'{name}' is a dependency of '{dependent}'. Disable it anyway?"),
        Notice::Incompatible {
            name,
            member,
            conflicts_with,
        } if name == member => {
            format!("'{name}' is incompatible with '{conflicts_with}'. Enable it anyway?")
        }
        Notice::Incompatible {
            name,
            member,
            conflicts_with,
        } => format!(
            "'{name}' needs '{member}', which is incompatible with '{conflicts_with}'. Enable it anyway?"
        ),
        Notice::BundleIncompatible {
            bundle,
            member,
            conflicts_with,
        } => format!(
            "Bundle '{bundle}': '{member}' is incompatible with '{conflicts_with}'. Enable it anyway?"
        ),
        Notice::ProfileIncompatible {
            profile,
            member,
            conflicts_with,
        } => format!(
            "Profile '{profile}': '{member}' is incompatible with '{conflicts_with}'. Enable it anyway?"
        ),
        Notice::MalformedPackage { name, reason } => {
            format!("Skipped '{name}': {reason}")
        }
        Notice::ClientUpdate { current, latest } => {
            format!("modsync {latest} is available (running {current})")
        }
    }
}

/// Print an informational notice to stderr
pub fn print_notice(notice: &Notice) {
    let style = if notice.is_blocking() {
        Style::new().yellow().bold()
    } else {
        Style::new().yellow()
    };
    let _ = Term::stderr().write_line(&format!(
        "{} {}",
        style.apply_to("warning:"),
        describe_notice(notice)
    ));
}

/// Print every change, then every informational notice
///
/// Blocking notices are left to the caller, which decides whether to ask.
pub fn print_outcome(outcome: &Outcome) {
    for change in &outcome.changes {
        let marker = match change.transition {
            Transition::Uninstalled | Transition::Removed | Transition::Deleted => {
                Style::new().red().apply_to("-")
            }
            Transition::Disabled | Transition::InstalledDisabled => {
                Style::new().yellow().apply_to("~")
            }
            _ => Style::new().green().apply_to("+"),
        };
        println!("{marker} {}", describe_change(change));
    }
    for notice in outcome.notices.iter().filter(|n| !n.is_blocking()) {
        print_notice(notice);
    }
}
