//! Conflicts the user declined to override

use super::ModsyncError;

/// Creates a dependency conflict error for a blocked uninstall
pub fn required_for_uninstall(
    name: impl Into<String>,
    dependent: impl Into<String>,
) -> ModsyncError {
    ModsyncError::DependencyConflict {
        name: name.into(),
        dependent: dependent.into(),
        action: "uninstalled".to_string(),
        action_verb: "uninstall".to_string(),
    }
}

/// Creates a dependency conflict error for a blocked disable
pub fn required_for_disable(
    name: impl Into<String>,
    dependent: impl Into<String>,
) -> ModsyncError {
    ModsyncError::DependencyConflict {
        name: name.into(),
        dependent: dependent.into(),
        action: "disabled".to_string(),
        action_verb: "disable".to_string(),
    }
}

/// Creates a compatibility conflict error
pub fn incompatible(name: impl Into<String>, other: impl Into<String>) -> ModsyncError {
    ModsyncError::CompatibilityConflict {
        name: name.into(),
        other: other.into(),
    }
}
