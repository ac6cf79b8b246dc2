//! Package archive errors

use super::ModsyncError;

/// Creates a malformed package error
pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> ModsyncError {
    ModsyncError::MalformedPackage {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an error for an installed mod whose staged package is gone
pub fn not_staged(name: impl Into<String>) -> ModsyncError {
    ModsyncError::PackageNotStaged { name: name.into() }
}

/// Creates an error for a mod name that cannot be a package file name
pub fn invalid_name(name: impl Into<String>) -> ModsyncError {
    ModsyncError::InvalidModName { name: name.into() }
}
