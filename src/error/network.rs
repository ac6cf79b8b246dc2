//! Catalog transport errors

use super::ModsyncError;

/// Creates a network unavailable error
pub fn unavailable(message: impl Into<String>) -> ModsyncError {
    ModsyncError::NetworkUnavailable {
        message: message.into(),
    }
}

/// Creates an error for a mutation the catalog server refused
pub fn rejected(message: impl Into<String>) -> ModsyncError {
    ModsyncError::PublishRejected {
        message: message.into(),
    }
}
