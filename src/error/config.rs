//! Configuration errors

use super::ModsyncError;

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> ModsyncError {
    ModsyncError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> ModsyncError {
    ModsyncError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates an error for a missing or unset install location
pub fn content_root_unavailable(path: impl Into<String>) -> ModsyncError {
    ModsyncError::ContentRootUnavailable { path: path.into() }
}
