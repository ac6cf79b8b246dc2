//! Connectivity state of the current invocation

/// Once offline, later network steps of the invocation are skipped until a
/// manifest refresh reaches the catalog again
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkStatus {
    pub offline: bool,
    /// Message of the failure that flipped the status
    pub last_error: Option<String>,
}

impl NetworkStatus {
    pub fn mark_offline(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(error = %message, "Catalog unreachable, continuing offline");
        self.offline = true;
        self.last_error = Some(message);
    }

    pub fn mark_online(&mut self) {
        if self.offline {
            tracing::info!("Catalog reachable again");
        }
        self.offline = false;
    }
}
