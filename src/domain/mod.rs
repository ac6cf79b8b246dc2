//! Domain models for modsync
//!
//! This module contains the catalog entities: mods, bundles, profiles and the
//! published manifest. They are plain data plus the serde rules that keep the
//! persisted documents in snake_case and normalize legacy quirks on load.

pub mod bundle;
pub mod manifest;
pub mod mods;
pub mod profile;
pub mod serialization;

pub use bundle::Bundle;
pub use manifest::Manifest;
pub use mods::Mod;
pub use profile::Profile;
