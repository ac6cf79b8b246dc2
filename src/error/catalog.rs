//! Catalog lookup errors

use super::ModsyncError;

/// Creates a mod not found error
pub fn mod_not_found(name: impl Into<String>) -> ModsyncError {
    ModsyncError::ModNotFound { name: name.into() }
}

/// Creates a bundle not found error
pub fn bundle_not_found(name: impl Into<String>) -> ModsyncError {
    ModsyncError::BundleNotFound { name: name.into() }
}

/// Creates a profile not found error
pub fn profile_not_found(name: impl Into<String>) -> ModsyncError {
    ModsyncError::ProfileNotFound { name: name.into() }
}

/// Creates an invalid profile error
pub fn invalid_profile(message: impl Into<String>) -> ModsyncError {
    ModsyncError::InvalidProfile {
        message: message.into(),
    }
}
