//! Health service façade and bootstrap helpers.
//!
//! This crate wires a host-provided platform bridge (Health Connect on
//! Android, HealthKit on Apple platforms) into one entry point. Hosts enable
//! the feature matching their target (`health-connect` / `health-kit`) and
//! construct the service with the platform hook-set; everything else
//! delegates to the bridge's [`HealthStore`] implementation.
//!
//! ```ignore
//! use core_health::HealthService;
//! use bridge_traits::{HealthRecordType, Permission, StoreConfig};
//!
//! let service = HealthService::health_connect(platform_hooks, StoreConfig::default());
//! service.initialise().await?;
//! let statuses = service
//!     .request_permissions(&[Permission::write(HealthRecordType::Steps)])
//!     .await?;
//! ```

pub mod error;

pub use error::{CoreError, Result};

use bridge_traits::{
    HealthStore, Permission, PermissionWithStatus, ReadRequest, Record, StoreConfig, WriteResponse,
};
use std::sync::Arc;

#[cfg(feature = "health-connect")]
use bridge_health_connect::{HealthConnectPlatform, HealthConnectStore};
#[cfg(feature = "health-kit")]
use bridge_health_kit::{HealthKitPlatform, HealthKitStore};

/// Primary façade exposed to host applications.
///
/// Thin composition over one [`HealthStore`]; adds no logic beyond
/// construction wiring.
#[derive(Clone)]
pub struct HealthService {
    store: Arc<dyn HealthStore>,
}

impl HealthService {
    /// Create a service from an explicit store implementation.
    pub fn new(store: Arc<dyn HealthStore>) -> Self {
        Self { store }
    }

    /// Bootstrap over the Android Health Connect bridge.
    #[cfg(feature = "health-connect")]
    pub fn health_connect(platform: Arc<dyn HealthConnectPlatform>, config: StoreConfig) -> Self {
        Self::new(Arc::new(HealthConnectStore::new(platform, config)))
    }

    /// Bootstrap over the Apple HealthKit bridge.
    #[cfg(feature = "health-kit")]
    pub fn health_kit(platform: Arc<dyn HealthKitPlatform>, config: StoreConfig) -> Self {
        Self::new(Arc::new(HealthKitStore::new(platform, config)))
    }

    /// Access the underlying platform store.
    pub fn store(&self) -> Arc<dyn HealthStore> {
        Arc::clone(&self.store)
    }

    pub async fn initialise(&self) -> Result<()> {
        Ok(self.store.initialise().await?)
    }

    pub async fn is_available(&self) -> bool {
        self.store.is_available().await
    }

    pub async fn check_permissions(
        &self,
        permissions: &[Permission],
    ) -> Result<Vec<PermissionWithStatus>> {
        Ok(self.store.check_permissions(permissions).await?)
    }

    pub async fn request_permissions(
        &self,
        permissions: &[Permission],
    ) -> Result<Vec<PermissionWithStatus>> {
        Ok(self.store.request_permissions(permissions).await?)
    }

    pub async fn write_data(&self, records: Vec<Record>) -> Result<WriteResponse> {
        Ok(self.store.write_data(records).await?)
    }

    pub async fn read_records(&self, request: &ReadRequest) -> Result<Vec<Record>> {
        Ok(self.store.read_records(request).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bridge_traits::{BridgeError, HealthRecordType};
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        Store {}

        #[async_trait]
        impl HealthStore for Store {
            async fn initialise(&self) -> bridge_traits::Result<()>;
            async fn is_available(&self) -> bool;
            async fn check_permissions(
                &self,
                permissions: &[Permission],
            ) -> bridge_traits::Result<Vec<PermissionWithStatus>>;
            async fn request_permissions(
                &self,
                permissions: &[Permission],
            ) -> bridge_traits::Result<Vec<PermissionWithStatus>>;
            async fn write_data(&self, records: Vec<Record>) -> bridge_traits::Result<WriteResponse>;
            async fn read_records(&self, request: &ReadRequest) -> bridge_traits::Result<Vec<Record>>;
        }
    }

    #[tokio::test]
    async fn writes_delegate_to_the_store() {
        let mut store = MockStore::new();
        store
            .expect_write_data()
            .with(eq(Vec::new()))
            .times(1)
            .returning(|_| Ok(WriteResponse::Success));

        let service = HealthService::new(Arc::new(store));
        let response = service.write_data(Vec::new()).await.unwrap();
        assert!(response.is_success());
    }

    #[tokio::test]
    async fn bridge_errors_surface_as_core_errors() {
        let mut store = MockStore::new();
        store
            .expect_check_permissions()
            .returning(|_| Err(BridgeError::NotAvailable));

        let service = HealthService::new(Arc::new(store));
        let err = service
            .check_permissions(&[bridge_traits::Permission::read(HealthRecordType::Steps)])
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::Bridge(BridgeError::NotAvailable));
    }
}
