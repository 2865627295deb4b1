//! HealthKit platform adapter.

use crate::client::{HealthKitClient, HealthKitPlatform};
use crate::convert;
use crate::permissions::{native_identifiers, parse_denied_identifier};
use async_trait::async_trait;
use bridge_traits::permissions::{required_identifiers, resolve_statuses};
use bridge_traits::{
    BridgeError, HealthStore, Permission, PermissionHandoff, PermissionUiLauncher,
    PermissionWithStatus, ReadRequest, Record, Result, StoreConfig, WriteResponse,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, instrument};

/// [`HealthStore`] implementation over an injected HealthKit client.
///
/// Mirrors the Health Connect adapter: lazy client/launcher initialisation,
/// fail-fast on uninitialised use, one outstanding permission request.
pub struct HealthKitStore {
    platform: Arc<dyn HealthKitPlatform>,
    config: StoreConfig,
    client: RwLock<Option<Arc<dyn HealthKitClient>>>,
    launcher: RwLock<Option<Arc<dyn PermissionUiLauncher>>>,
    handoff: PermissionHandoff,
}

impl HealthKitStore {
    /// Production constructor: hooks into the host's HealthKit binding.
    pub fn new(platform: Arc<dyn HealthKitPlatform>, config: StoreConfig) -> Self {
        Self {
            platform,
            config,
            client: RwLock::new(None),
            launcher: RwLock::new(None),
            handoff: PermissionHandoff::new(),
        }
    }

    /// Test constructor: explicit handles instead of lazy factories.
    pub fn from_parts(
        platform: Arc<dyn HealthKitPlatform>,
        client: Option<Arc<dyn HealthKitClient>>,
        launcher: Option<Arc<dyn PermissionUiLauncher>>,
        config: StoreConfig,
    ) -> Self {
        Self {
            platform,
            config,
            client: RwLock::new(client),
            launcher: RwLock::new(launcher),
            handoff: PermissionHandoff::new(),
        }
    }

    /// Sender for the permission handoff, for wiring custom launchers.
    pub fn permission_sender(&self) -> bridge_traits::PermissionSender {
        self.handoff.sender()
    }

    async fn verify_availability(&self) -> Result<()> {
        if self.is_available().await {
            Ok(())
        } else {
            Err(BridgeError::NotAvailable)
        }
    }

    async fn client(&self) -> Result<Arc<dyn HealthKitClient>> {
        self.client.read().await.clone().ok_or_else(|| {
            BridgeError::NotInitialised(
                "HealthKit client not created; call initialise() first".to_string(),
            )
        })
    }

    fn classify_write_error(err: BridgeError) -> BridgeError {
        match err {
            BridgeError::OperationFailed(message)
                if message.contains("errorAuthorizationDenied")
                    || message.contains("not authorized") =>
            {
                BridgeError::NoWriteAccess {
                    permission: parse_denied_identifier(&message),
                }
            }
            other => other,
        }
    }
}

#[async_trait]
impl HealthStore for HealthKitStore {
    async fn initialise(&self) -> Result<()> {
        {
            let mut client = self.client.write().await;
            if client.is_none() {
                *client = Some(self.platform.create_client()?);
                debug!("Created HealthKit client");
            }
        }
        {
            let mut launcher = self.launcher.write().await;
            if launcher.is_none() {
                *launcher = Some(self.platform.create_launcher(self.handoff.sender())?);
                debug!("Created authorization sheet launcher");
            }
        }
        Ok(())
    }

    async fn is_available(&self) -> bool {
        match self.config.availability_override {
            Some(available) => available,
            None => self.platform.health_data_available(),
        }
    }

    #[instrument(skip(self, permissions))]
    async fn check_permissions(
        &self,
        permissions: &[Permission],
    ) -> Result<Vec<PermissionWithStatus>> {
        self.verify_availability().await?;
        let client = self.client().await?;
        let granted = client.granted_permissions().await?;
        debug!(granted = granted.len(), "Fetched authorization status");
        Ok(resolve_statuses(permissions, &granted, native_identifiers))
    }

    #[instrument(skip(self, permissions))]
    async fn request_permissions(
        &self,
        permissions: &[Permission],
    ) -> Result<Vec<PermissionWithStatus>> {
        self.verify_availability().await?;
        let needed = required_identifiers(permissions, native_identifiers);

        let launcher = self.launcher.read().await.clone();
        let Some(launcher) = launcher else {
            error!("requestPermissions called before initialise()");
            return Err(BridgeError::NotInitialised(
                "authorization launcher not created; call initialise() first".to_string(),
            ));
        };

        // A timed-out request's late answer may still be parked in the slot.
        self.handoff.clear_stale().await;

        debug!(identifiers = needed.len(), "Presenting authorization sheet");
        launcher.launch(needed).await?;

        let granted = self.handoff.wait(self.config.permission_timeout).await?;
        debug!(granted = granted.len(), "Authorization request resolved");
        Ok(resolve_statuses(permissions, &granted, native_identifiers))
    }

    #[instrument(skip(self, records), fields(records = records.len()))]
    async fn write_data(&self, records: Vec<Record>) -> Result<WriteResponse> {
        self.verify_availability().await?;
        let client = self.client().await?;

        let batch: Vec<_> = records.iter().filter_map(convert::to_native).collect();
        let dropped = records.len() - batch.len();
        if dropped > 0 {
            debug!(dropped, "Dropped records with no HealthKit sample form");
        }
        let submitted = batch.len();
        if submitted == 0 {
            return Ok(WriteResponse::Success);
        }

        match client.save_samples(batch).await {
            Ok(uuids) => {
                debug!(written = uuids.len(), submitted, "Save completed");
                Ok(WriteResponse::from_counts(uuids.len(), submitted))
            }
            Err(err) => {
                let cause = Self::classify_write_error(err);
                error!(%cause, "HealthKit save failed");
                Ok(WriteResponse::Failed(cause))
            }
        }
    }

    #[instrument(skip(self, request), fields(record_type = %request.record_type()))]
    async fn read_records(&self, request: &ReadRequest) -> Result<Vec<Record>> {
        self.verify_availability().await?;
        let Some(sample_type) = convert::sample_type(request.record_type()) else {
            debug!("Record type has no HealthKit sample form, returning no data");
            return Ok(Vec::new());
        };
        let client = self.client().await?;

        match client
            .query_samples(sample_type, request.start(), request.end())
            .await
        {
            Ok(samples) => {
                let records: Vec<_> = samples
                    .iter()
                    .filter_map(|sample| convert::from_native(sample, request.record_type()))
                    .collect();
                debug!(read = records.len(), "Query completed");
                Ok(records)
            }
            Err(err) => {
                error!(%err, "HealthKit query failed");
                Ok(Vec::new())
            }
        }
    }
}
