//! Error types and handling for modsync
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`catalog`]: Unknown mods, bundles and profiles
//! - [`network`]: Catalog transport errors
//! - [`package`]: Package archive errors
//! - [`conflict`]: Dependency and compatibility conflicts the user declined to override
//! - [`config`]: Configuration errors
//! - [`fs`]: File system and persistence errors

pub mod catalog;
pub mod config;
pub mod conflict;
pub mod fs;
pub mod network;
pub mod package;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for modsync operations
#[derive(Error, Diagnostic, Debug)]
pub enum ModsyncError {
    // Catalog errors
    #[error("Mod '{name}' not found")]
    #[diagnostic(
        code(modsync::catalog::mod_not_found),
        help("Run 'modsync sync' to refresh the catalog, then check the name with 'modsync list'")
    )]
    ModNotFound { name: String },

    #[error("Bundle '{name}' not found")]
    #[diagnostic(
        code(modsync::catalog::bundle_not_found),
        help("Run 'modsync list --bundles' to see available bundles")
    )]
    BundleNotFound { name: String },

    #[error("Profile '{name}' not found")]
    #[diagnostic(
        code(modsync::catalog::profile_not_found),
        help("Run 'modsync list --profiles' to see saved profiles")
    )]
    ProfileNotFound { name: String },

    #[error("Invalid profile: {message}")]
    #[diagnostic(code(modsync::catalog::invalid_profile))]
    InvalidProfile { message: String },

    // Network errors
    #[error("Catalog unavailable: {message}")]
    #[diagnostic(
        code(modsync::network::unavailable),
        help("Check your connection and run 'modsync sync' again")
    )]
    NetworkUnavailable { message: String },

    #[error("Catalog rejected the request: {message}")]
    #[diagnostic(code(modsync::network::rejected))]
    PublishRejected { message: String },

    // Package errors
    #[error("Malformed package '{path}': {reason}")]
    #[diagnostic(
        code(modsync::package::malformed),
        help("A package must be a zip archive containing a '_metadata' JSON entry")
    )]
    MalformedPackage { path: String, reason: String },

    #[error("Package for '{name}' is not staged")]
    #[diagnostic(
        code(modsync::package::not_staged),
        help("Reinstall the mod to download its package again")
    )]
    PackageNotStaged { name: String },

    #[error("'{name}' is not a valid mod name")]
    #[diagnostic(
        code(modsync::package::invalid_name),
        help("Mod names must be a single path segment without '/' or '\\'")
    )]
    InvalidModName { name: String },

    // Conflict errors
    #[error("'{name}' is a dependency of '{dependent}' and cannot be {action}")]
    #[diagnostic(
        code(modsync::conflict::dependency),
        help("Pass --force to {action_verb} it anyway")
    )]
    DependencyConflict {
        name: String,
        dependent: String,
        action: String,
        action_verb: String,
    },

    #[error("'{name}' is incompatible with '{other}'")]
    #[diagnostic(
        code(modsync::conflict::incompatible),
        help("Pass --force to enable them together anyway")
    )]
    CompatibilityConflict { name: String, other: String },

    // Configuration errors
    #[error("Install location is not set or has no mods directory: {path}")]
    #[diagnostic(
        code(modsync::config::content_root_unavailable),
        help("Run 'modsync config set install-location <GAME_DIR>'")
    )]
    ContentRootUnavailable { path: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(modsync::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(modsync::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(modsync::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}")]
    #[diagnostic(code(modsync::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(modsync::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to persist '{document}': {reason}")]
    #[diagnostic(
        code(modsync::fs::persistence_failed),
        help("The in-memory state was changed but could not be saved; check permissions on the modsync home directory")
    )]
    PersistenceFailed { document: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(modsync::fs::io_error))]
    IoError { message: String },
}

impl ModsyncError {
    /// True for transport failures that flip the workspace offline
    pub fn is_network(&self) -> bool {
        matches!(self, ModsyncError::NetworkUnavailable { .. })
    }

    /// True for errors scoped to a single package archive
    pub fn is_malformed_package(&self) -> bool {
        matches!(self, ModsyncError::MalformedPackage { .. })
    }
}

impl From<std::io::Error> for ModsyncError {
    fn from(err: std::io::Error) -> Self {
        ModsyncError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ModsyncError {
    fn from(err: serde_json::Error) -> Self {
        ModsyncError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<zip::result::ZipError> for ModsyncError {
    fn from(err: zip::result::ZipError) -> Self {
        ModsyncError::MalformedPackage {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for ModsyncError {
    fn from(err: reqwest::Error) -> Self {
        ModsyncError::NetworkUnavailable {
            message: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for ModsyncError {
    fn from(err: inquire::InquireError) -> Self {
        ModsyncError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ModsyncError>;
