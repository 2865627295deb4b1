//! Store configuration.

use std::time::Duration;

/// Default bound on the permission-request suspension (2 minutes).
pub const DEFAULT_PERMISSION_TIMEOUT: Duration = Duration::from_secs(120);

/// Configuration shared by the platform bridges.
///
/// Constructor-injected; there is no ambient mutable state. The availability
/// override exists for tests and takes precedence over the live platform
/// probe.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub availability_override: Option<bool>,
    pub permission_timeout: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            availability_override: None,
            permission_timeout: DEFAULT_PERMISSION_TIMEOUT,
        }
    }
}

impl StoreConfig {
    /// Force the availability check to the given value.
    pub fn with_availability_override(mut self, available: bool) -> Self {
        self.availability_override = Some(available);
        self
    }

    /// Bound the wait for the permission-UI callback.
    pub fn with_permission_timeout(mut self, timeout: Duration) -> Self {
        self.permission_timeout = timeout;
        self
    }
}
