//! End-to-end flow over the Health Connect bridge with faked native hooks.

use async_trait::async_trait;
use bridge_health_connect::{
    ConnectRecord, HealthConnectClient, HealthConnectPlatform, HealthConnectStore,
};
use bridge_traits::{
    BridgeError, GrantedSet, HealthRecordType, Permission, PermissionSender, PermissionUiLauncher,
    ReadRequest, Record, Result as BridgeResult, StoreConfig, WriteResponse,
};
use chrono::{DateTime, TimeZone, Utc};
use core_health::HealthService;
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap()
}

/// In-memory Health Connect store: inserted records are queryable.
#[derive(Default)]
struct MemoryClient {
    granted: Mutex<GrantedSet>,
    records: Mutex<Vec<ConnectRecord>>,
}

#[async_trait]
impl HealthConnectClient for MemoryClient {
    async fn granted_permissions(&self) -> BridgeResult<GrantedSet> {
        Ok(self.granted.lock().unwrap().clone())
    }

    async fn insert_records(&self, records: Vec<ConnectRecord>) -> BridgeResult<Vec<String>> {
        let mut stored = self.records.lock().unwrap();
        let mut ids = Vec::with_capacity(records.len());
        for mut record in records {
            let id = uuid::Uuid::new_v4().to_string();
            record.metadata_id = Some(id.clone());
            record.origin = Some("com.example.host".to_string());
            stored.push(record);
            ids.push(id);
        }
        Ok(ids)
    }

    async fn read_records(
        &self,
        record_class: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> BridgeResult<Vec<ConnectRecord>> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.record_class == record_class && r.start_time >= start && r.end_time <= end)
            .cloned()
            .collect())
    }
}

/// Launcher that grants everything it is asked for and mirrors the grants
/// into the client, the way the native UI updates the store's state.
struct GrantAllLauncher {
    grants: PermissionSender,
    client: Arc<MemoryClient>,
}

#[async_trait]
impl PermissionUiLauncher for GrantAllLauncher {
    async fn launch(&self, native_identifiers: BTreeSet<String>) -> BridgeResult<()> {
        let granted: GrantedSet = native_identifiers.into_iter().collect();
        *self.client.granted.lock().unwrap() = granted.clone();
        self.grants.deliver(granted);
        Ok(())
    }
}

struct FakePlatform {
    client: Arc<MemoryClient>,
}

impl HealthConnectPlatform for FakePlatform {
    fn sdk_available(&self) -> bool {
        true
    }

    fn create_client(&self) -> BridgeResult<Arc<dyn HealthConnectClient>> {
        Ok(self.client.clone())
    }

    fn create_launcher(
        &self,
        grants: PermissionSender,
    ) -> BridgeResult<Arc<dyn PermissionUiLauncher>> {
        Ok(Arc::new(GrantAllLauncher {
            grants,
            client: self.client.clone(),
        }))
    }
}

fn service() -> (HealthService, Arc<MemoryClient>) {
    let client = Arc::new(MemoryClient::default());
    let store = HealthConnectStore::new(
        Arc::new(FakePlatform {
            client: client.clone(),
        }),
        StoreConfig::default(),
    );
    (HealthService::new(Arc::new(store)), client)
}

#[tokio::test]
async fn full_grant_write_read_flow() {
    let (service, _client) = service();

    service.initialise().await.unwrap();
    assert!(service.is_available().await);

    let requested = [
        Permission::write(HealthRecordType::Steps),
        Permission::read(HealthRecordType::Steps),
    ];

    // Nothing granted yet.
    let before = service.check_permissions(&requested).await.unwrap();
    assert!(before.iter().all(|s| !s.granted));

    // The fake UI grants everything requested.
    let after = service.request_permissions(&requested).await.unwrap();
    assert!(after.iter().all(|s| s.granted));

    // checkPermissions agrees with the delivered grants.
    let rechecked = service.check_permissions(&requested).await.unwrap();
    assert_eq!(rechecked, after);

    let written = service
        .write_data(vec![Record::quantity(
            HealthRecordType::Steps,
            at(8),
            at(9),
            1200.0,
        )])
        .await
        .unwrap();
    assert_eq!(written, WriteResponse::Success);

    let request = ReadRequest::new(HealthRecordType::Steps, at(0), at(12)).unwrap();
    let records = service.read_records(&request).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].record_type(), HealthRecordType::Steps);
    // Source metadata attached from the native origin on the way back.
    assert_eq!(
        records[0].text_field(bridge_traits::records::fields::SOURCE),
        Some("com.example.host")
    );
}

#[tokio::test]
async fn operations_surface_bridge_preconditions() {
    let client = Arc::new(MemoryClient::default());
    let store = HealthConnectStore::new(
        Arc::new(FakePlatform { client }),
        StoreConfig::default().with_availability_override(false),
    );
    let service = HealthService::new(Arc::new(store));

    let err = service.write_data(Vec::new()).await.unwrap_err();
    assert_eq!(err, core_health::CoreError::Bridge(BridgeError::NotAvailable));
}

#[tokio::test]
async fn read_outside_written_range_is_empty() {
    let (service, _client) = service();
    service.initialise().await.unwrap();

    let written = service
        .write_data(vec![Record::quantity(
            HealthRecordType::Weight,
            at(7),
            at(7),
            80.5,
        )])
        .await
        .unwrap();
    assert!(written.is_success());

    let request = ReadRequest::new(HealthRecordType::Weight, at(9), at(12)).unwrap();
    let records = service.read_records(&request).await.unwrap();
    assert!(records.is_empty());
}
