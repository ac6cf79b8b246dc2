//! Command implementations for the modsync CLI

pub mod bundle;
pub mod completions;
pub mod config;
pub mod helpers;
pub mod list;
pub mod mods;
pub mod profile;
pub mod publish;
pub mod show;
pub mod sync;
pub mod version;

pub use helpers::Globals;
