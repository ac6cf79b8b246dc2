//! Orphan detection after an uninstall

use crate::catalog::Catalog;
use crate::domain::Mod;

use super::graph::required_by_others;

/// Requirements of `removed` that no other installed mod still requires
///
/// `removed` is the entry that was just taken out of (or is about to leave)
/// the installed set. The result keeps the order of `removed.requires`. Each
/// orphan is uninstalled in turn, and that uninstall repeats this computation
/// against the then-current installed set.
pub fn orphans_after_uninstall(catalog: &Catalog, removed: &Mod) -> Vec<String> {
    let still_required = required_by_others(catalog, &removed.name);
    let mut orphans: Vec<String> = Vec::new();
    for dep in &removed.requires {
        if still_required.contains(dep) || orphans.contains(dep) {
            continue;
        }
        orphans.push(dep.clone());
    }
    orphans
}
