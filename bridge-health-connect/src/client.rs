//! Host-injected Health Connect hooks.

use async_trait::async_trait;
use bridge_traits::{GrantedSet, PermissionSender, PermissionUiLauncher, Result};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// One Health Connect record in its native shape.
///
/// Health Connect models every record class as a time range plus a single
/// measurement; `metadata_id` is the store-assigned identifier present only
/// on records read back, and `origin` is the package that wrote the record.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectRecord {
    pub record_class: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub value: f64,
    pub metadata_id: Option<String>,
    pub origin: Option<String>,
}

/// On-device Health Connect client operations.
///
/// Implemented by the host's binding to the Health Connect SDK; faked in
/// tests. Errors should carry the native exception text so that the store
/// can classify security faults.
#[async_trait]
pub trait HealthConnectClient: Send + Sync {
    /// The set of `android.permission.health.*` identifiers currently
    /// granted to the calling app.
    async fn granted_permissions(&self) -> Result<GrantedSet>;

    /// Insert a batch of records in one call, returning the store-assigned
    /// identifiers of the records actually persisted.
    async fn insert_records(&self, records: Vec<ConnectRecord>) -> Result<Vec<String>>;

    /// Read all records of `record_class` within the closed time range.
    async fn read_records(
        &self,
        record_class: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<ConnectRecord>>;
}

/// Host hook-set: availability probe plus lazy factories.
///
/// `create_launcher` receives the handoff sender the launcher's result
/// callback must deliver the granted identifier set into.
pub trait HealthConnectPlatform: Send + Sync {
    /// Whether the Health Connect SDK is installed and usable on this
    /// device/OS version.
    fn sdk_available(&self) -> bool;

    fn create_client(&self) -> Result<Arc<dyn HealthConnectClient>>;

    fn create_launcher(&self, grants: PermissionSender) -> Result<Arc<dyn PermissionUiLauncher>>;
}
