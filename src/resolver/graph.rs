//! Reverse lookups over the `requires` edges of the installed set

use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::domain::Mod;

/// Every name required by an installed mod other than `except`
pub fn required_by_others(catalog: &Catalog, except: &str) -> HashSet<String> {
    catalog
        .installed_mods
        .iter()
        .filter(|m| m.name != except)
        .flat_map(|m| m.requires.iter().cloned())
        .collect()
}

/// First other installed mod accepted by `counts` whose `requires` lists `name`
///
/// Uninstalling counts every dependent; disabling only enabled ones, since a
/// disabled dependent keeps a requirement installed but not enabled.
pub fn find_dependent<'a>(
    catalog: &'a Catalog,
    name: &str,
    counts: impl Fn(&Mod) -> bool,
) -> Option<&'a Mod> {
    catalog
        .installed_mods
        .iter()
        .filter(|m| m.name != name && counts(m))
        .find(|m| m.requires_mod(name))
}
