//! Health Connect platform adapter.

use crate::client::{HealthConnectClient, HealthConnectPlatform};
use crate::convert;
use crate::permissions::{native_identifiers, parse_denied_permission};
use async_trait::async_trait;
use bridge_traits::permissions::{required_identifiers, resolve_statuses};
use bridge_traits::{
    BridgeError, HealthStore, Permission, PermissionHandoff, PermissionUiLauncher,
    PermissionWithStatus, ReadRequest, Record, Result, StoreConfig, WriteResponse,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, instrument};

/// [`HealthStore`] implementation over an injected Health Connect client.
///
/// The client handle and the permission-UI launcher are created lazily by
/// [`initialise`](HealthStore::initialise) and cached; operations invoked
/// before initialisation fail fast with
/// [`BridgeError::NotInitialised`]. One permission request may be
/// outstanding at a time.
pub struct HealthConnectStore {
    platform: Arc<dyn HealthConnectPlatform>,
    config: StoreConfig,
    client: RwLock<Option<Arc<dyn HealthConnectClient>>>,
    launcher: RwLock<Option<Arc<dyn PermissionUiLauncher>>>,
    handoff: PermissionHandoff,
}

impl HealthConnectStore {
    /// Production constructor: hooks into the host's Health Connect binding.
    pub fn new(platform: Arc<dyn HealthConnectPlatform>, config: StoreConfig) -> Self {
        Self {
            platform,
            config,
            client: RwLock::new(None),
            launcher: RwLock::new(None),
            handoff: PermissionHandoff::new(),
        }
    }

    /// Test constructor: explicit handles instead of lazy factories.
    ///
    /// Pass `None` to exercise the uninitialised paths.
    pub fn from_parts(
        platform: Arc<dyn HealthConnectPlatform>,
        client: Option<Arc<dyn HealthConnectClient>>,
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

    async fn client(&self) -> Result<Arc<dyn HealthConnectClient>> {
        self.client.read().await.clone().ok_or_else(|| {
            BridgeError::NotInitialised(
                "Health Connect client not created; call initialise() first".to_string(),
            )
        })
    }

    fn classify_write_error(err: BridgeError) -> BridgeError {
        match err {
            BridgeError::OperationFailed(message) if message.contains("SecurityException") => {
                BridgeError::NoWriteAccess {
                    permission: parse_denied_permission(&message),
                }
            }
            other => other,
        }
    }
}

#[async_trait]
impl HealthStore for HealthConnectStore {
    async fn initialise(&self) -> Result<()> {
        {
            let mut client = self.client.write().await;
            if client.is_none() {
                *client = Some(self.platform.create_client()?);
                debug!("Created Health Connect client");
            }
        }
        {
            let mut launcher = self.launcher.write().await;
            if launcher.is_none() {
                *launcher = Some(self.platform.create_launcher(self.handoff.sender())?);
                debug!("Created permission request launcher");
            }
        }
        Ok(())
    }

    async fn is_available(&self) -> bool {
        match self.config.availability_override {
            Some(available) => available,
            None => self.platform.sdk_available(),
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
        debug!(granted = granted.len(), "Fetched granted permissions");
        Ok(resolve_statuses(
            permissions,
            &granted,
            native_identifiers,
        ))
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
            // Blocking on a channel that can never fill would hang the
            // caller for good; fail instead.
            error!("requestPermissions called before initialise()");
            return Err(BridgeError::NotInitialised(
                "permission launcher not created; call initialise() first".to_string(),
            ));
        };

        // A timed-out request's late answer may still be parked in the slot.
        self.handoff.clear_stale().await;

        debug!(identifiers = needed.len(), "Launching permission request UI");
        launcher.launch(needed).await?;

        let granted = self.handoff.wait(self.config.permission_timeout).await?;
        debug!(granted = granted.len(), "Permission request resolved");
        Ok(resolve_statuses(
            permissions,
            &granted,
            native_identifiers,
        ))
    }

    #[instrument(skip(self, records), fields(records = records.len()))]
    async fn write_data(&self, records: Vec<Record>) -> Result<WriteResponse> {
        self.verify_availability().await?;
        let client = self.client().await?;

        let batch: Vec<_> = records.iter().filter_map(convert::to_native).collect();
        let dropped = records.len() - batch.len();
        if dropped > 0 {
            debug!(dropped, "Dropped records with no Health Connect form");
        }
        let submitted = batch.len();
        if submitted == 0 {
            return Ok(WriteResponse::Success);
        }

        match client.insert_records(batch).await {
            Ok(ids) => {
                debug!(written = ids.len(), submitted, "Insert completed");
                Ok(WriteResponse::from_counts(ids.len(), submitted))
            }
            Err(err) => {
                let cause = Self::classify_write_error(err);
                error!(%cause, "Health Connect insert failed");
                Ok(WriteResponse::Failed(cause))
            }
        }
    }

    #[instrument(skip(self, request), fields(record_type = %request.record_type()))]
    async fn read_records(&self, request: &ReadRequest) -> Result<Vec<Record>> {
        self.verify_availability().await?;
        let Some(class) = convert::record_class(request.record_type()) else {
            debug!("Record type has no Health Connect form, returning no data");
            return Ok(Vec::new());
        };
        let client = self.client().await?;

        match client
            .read_records(class, request.start(), request.end())
            .await
        {
            Ok(natives) => {
                let records: Vec<_> = natives
                    .iter()
                    .filter_map(|native| convert::from_native(native, request.record_type()))
                    .collect();
                debug!(read = records.len(), "Read completed");
                Ok(records)
            }
            Err(err) => {
                // Read failures surface as "no data", never as errors.
                error!(%err, "Health Connect read failed");
                Ok(Vec::new())
            }
        }
    }
}
