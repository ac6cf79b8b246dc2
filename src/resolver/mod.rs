//! Dependency resolution for mods
//!
//! This module handles:
//! - Computing the install closure of a mod (missing requirements, deepest first)
//! - Computing what enabling a mod turns on along with it
//! - Finding installed mods that depend on a given mod
//! - Computing the orphans an uninstall leaves behind
//!
//! There is no version-range solving here: requirements are plain names,
//! and a requirement is satisfied by any installed mod with that name.

pub mod closure;
pub mod graph;
pub mod orphans;

pub use closure::{enable_closure, install_closure};
pub use graph::find_dependent;
pub use orphans::orphans_after_uninstall;
