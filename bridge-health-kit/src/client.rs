//! Host-injected HealthKit hooks.

use async_trait::async_trait;
use bridge_traits::{GrantedSet, PermissionSender, PermissionUiLauncher, Result};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// One HealthKit sample in its native shape.
///
/// `uuid` is the store-assigned identifier present only on samples read
/// back; `source_name` is the app or device that recorded the sample.
#[derive(Debug, Clone, PartialEq)]
pub struct KitSample {
    pub sample_type: String,
    pub unit: String,
    pub value: f64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub uuid: Option<String>,
    pub source_name: Option<String>,
}

/// On-device HealthKit client operations.
///
/// Implemented by the host's binding to `HKHealthStore`; faked in tests.
#[async_trait]
pub trait HealthKitClient: Send + Sync {
    /// The authorization identifiers currently granted.
    ///
    /// HealthKit does not reveal read-authorization status to apps; this
    /// returns the set the host shim can observe (share grants, plus read
    /// grants where the host tracks the user's response itself).
    async fn granted_permissions(&self) -> Result<GrantedSet>;

    /// Save a batch of samples in one call, returning the UUIDs of the
    /// samples actually persisted.
    async fn save_samples(&self, samples: Vec<KitSample>) -> Result<Vec<String>>;

    /// Query all samples of `sample_type` within the closed date range.
    async fn query_samples(
        &self,
        sample_type: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<KitSample>>;
}

/// Host hook-set: availability probe plus lazy factories.
pub trait HealthKitPlatform: Send + Sync {
    /// `HKHealthStore.isHealthDataAvailable()`.
    fn health_data_available(&self) -> bool;

    fn create_client(&self) -> Result<Arc<dyn HealthKitClient>>;

    fn create_launcher(&self, grants: PermissionSender) -> Result<Arc<dyn PermissionUiLauncher>>;
}
