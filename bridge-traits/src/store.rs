//! The platform-neutral health store capability trait.

use crate::error::Result;
use crate::permissions::{Permission, PermissionWithStatus};
use crate::records::{ReadRequest, Record};
use crate::results::WriteResponse;
use async_trait::async_trait;

/// Unified capability set implemented by each platform bridge.
///
/// One concrete implementation exists per native backend (Health Connect,
/// HealthKit), selected at build time by the host. All operations that touch
/// the native store are preconditioned on availability and return
/// [`BridgeError::NotAvailable`](crate::BridgeError::NotAvailable) when the
/// store is unsupported on the device.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::{HealthStore, Permission, HealthRecordType};
///
/// async fn grant_steps(store: &dyn HealthStore) -> bridge_traits::Result<bool> {
///     store.initialise().await?;
///     let statuses = store
///         .request_permissions(&[Permission::write(HealthRecordType::Steps)])
///         .await?;
///     Ok(statuses.iter().all(|s| s.granted))
/// }
/// ```
#[async_trait]
pub trait HealthStore: Send + Sync {
    /// Create and cache the native client handle and the permission-request
    /// UI launcher. Idempotent: repeated calls have no further effect.
    async fn initialise(&self) -> Result<()>;

    /// Whether the native health store is present and supported here.
    ///
    /// A configured availability override takes precedence over the live
    /// platform probe.
    async fn is_available(&self) -> bool;

    /// Resolve granted status for each requested permission against the
    /// native store's currently granted identifier set.
    async fn check_permissions(
        &self,
        permissions: &[Permission],
    ) -> Result<Vec<PermissionWithStatus>>;

    /// Trigger the native permission-request UI for the union of identifiers
    /// the requested permissions expand to, await the user's response, and
    /// resolve statuses against the delivered grant set.
    ///
    /// At most one request may be outstanding per store instance; the wait
    /// is bounded by the configured permission timeout.
    async fn request_permissions(
        &self,
        permissions: &[Permission],
    ) -> Result<Vec<PermissionWithStatus>>;

    /// Convert and persist a batch of records. Records that do not convert
    /// to this platform's native form are silently dropped; the batch is
    /// submitted as a single native insert. Native faults are folded into
    /// [`WriteResponse::Failed`].
    async fn write_data(&self, records: Vec<Record>) -> Result<WriteResponse>;

    /// Run a ranged query for the requested record type. Unsupported types
    /// yield an empty result without touching the native store; native
    /// faults degrade to an empty result.
    async fn read_records(&self, request: &ReadRequest) -> Result<Vec<Record>>;
}
