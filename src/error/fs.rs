//! File system and persistence errors

use super::ModsyncError;

/// Creates a file not found error
pub fn not_found(path: impl Into<String>) -> ModsyncError {
    ModsyncError::FileNotFound { path: path.into() }
}

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> ModsyncError {
    ModsyncError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> ModsyncError {
    ModsyncError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a persistence failure for one of the state documents
pub fn persistence_failed(document: impl Into<String>, reason: impl Into<String>) -> ModsyncError {
    ModsyncError::PersistenceFailed {
        document: document.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> ModsyncError {
    ModsyncError::IoError {
        message: message.into(),
    }
}
