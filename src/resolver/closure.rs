//! Install closure: which missing requirements to download, and in what order
//!
//! ## Algorithm
//!
//! Depth-first walk over `requires`, threading a visited set through the
//! recursion as a cycle guard. A name is skipped when it was already visited
//! in this walk, when it is already installed, or when the manifest does not
//! publish it. Otherwise its own requirements are scheduled first and the
//! name itself afterwards, so the deepest dependencies come out first.
//!
//! ```text
//! speed -> [core, ui]      core -> [base]      ui -> [base]
//!
//! install_closure(speed) = [base, core, ui]
//! ```

use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::domain::Mod;

/// Context for one closure walk
struct ClosureContext<'a> {
    catalog: &'a Catalog,
    /// Names already looked at in this walk (never persisted)
    visited: HashSet<String>,
    /// Download order, dependencies before dependents
    order: Vec<String>,
}

impl ClosureContext<'_> {
    fn walk(&mut self, m: &Mod) {
        for dep in &m.requires {
            if !self.visited.insert(dep.clone()) {
                continue;
            }
            if self.catalog.is_installed(dep) {
                continue;
            }
            let Some(published) = self.catalog.find_in_manifest(dep) else {
                tracing::warn!(dependency = %dep, required_by = %m.name, "Dependency is not in the catalog");
                continue;
            };
            self.walk(published);
            self.order.push(published.name.clone());
        }
    }

    fn walk_enable(&mut self, m: &Mod) {
        let catalog = self.catalog;
        for dep in &m.requires {
            if !self.visited.insert(dep.clone()) {
                continue;
            }
            match catalog.find_installed(dep) {
                Some(installed) if installed.is_enabled() => {}
                Some(installed) => {
                    self.walk_enable(installed);
                    self.order.push(installed.name.clone());
                }
                None => {
                    if let Some(published) = catalog.find_in_manifest(dep) {
                        self.walk(published);
                        self.order.push(published.name.clone());
                    }
                }
            }
        }
    }
}

/// Compute the missing requirements of `root` in download order
///
/// The root itself is never part of its own closure, even through a cycle.
pub fn install_closure(catalog: &Catalog, root: &Mod) -> Vec<String> {
    let mut ctx = ClosureContext {
        catalog,
        visited: HashSet::from([root.name.clone()]),
        order: Vec::new(),
    };
    ctx.walk(root);
    ctx.order
}

/// Requirements that enabling `root` turns on, dependencies first
///
/// Disabled installed requirements are followed through their own
/// requirements; a missing one contributes itself and its install closure.
/// Enabled requirements stop the walk.
pub fn enable_closure(catalog: &Catalog, root: &Mod) -> Vec<String> {
    let mut ctx = ClosureContext {
        catalog,
        visited: HashSet::from([root.name.clone()]),
        order: Vec::new(),
    };
    ctx.walk_enable(root);
    ctx.order
}
