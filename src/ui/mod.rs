//! Terminal presentation layer
//!
//! This module handles:
//! - Listings and detail views of mods, bundles and profiles
//! - Reporting what an operation changed and what it needs confirmed
//!
//! The engine never prints; commands hand its data to these functions.

mod display;
mod outcome;

pub use display::{
    ModStatus, print_bundle_detail, print_bundles, print_config, print_mod_detail, print_mods,
    print_profile_detail, print_profiles,
};
pub use outcome::{describe_change, describe_notice, print_notice, print_outcome};
