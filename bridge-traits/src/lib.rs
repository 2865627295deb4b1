//! # Health Bridge Traits
//!
//! Platform abstraction contract for the unified health data layer.
//!
//! ## Overview
//!
//! This crate defines the contract between the core façade and the
//! platform-specific health store bridges. The neutral record, permission,
//! and result models live here, alongside the capability trait each backend
//! implements and the handoff primitive that bridges the asynchronous
//! permission-UI callback into a single suspension point.
//!
//! ## Traits
//!
//! - [`HealthStore`](store::HealthStore) - Unified initialise / availability /
//!   permission / write / read capability set, one implementation per backend
//! - [`PermissionUiLauncher`](launcher::PermissionUiLauncher) - Host-provided
//!   trigger for the native permission-request UI
//!
//! ## Platform bridges
//!
//! | Platform | Implementation Crate    | Native backend |
//! |----------|-------------------------|----------------|
//! | Android  | `bridge-health-connect` | Health Connect |
//! | iOS      | `bridge-health-kit`     | HealthKit      |
//!
//! ## Error Handling
//!
//! All bridges use [`BridgeError`](error::BridgeError). Availability and
//! misuse errors fail fast to the caller; native faults during writes fold
//! into [`WriteResponse::Failed`](results::WriteResponse), and faults during
//! reads degrade to an empty result set.
//!
//! ## Thread Safety
//!
//! All traits require `Send + Sync`; bridge instances are shared across
//! async tasks behind `Arc`.

pub mod config;
pub mod error;
pub mod handoff;
pub mod launcher;
pub mod permissions;
pub mod records;
pub mod results;
pub mod store;

pub use error::{BridgeError, Result};

// Re-export commonly used types
pub use config::{StoreConfig, DEFAULT_PERMISSION_TIMEOUT};
pub use handoff::{GrantedSet, PermissionHandoff, PermissionSender};
pub use launcher::PermissionUiLauncher;
pub use permissions::{AccessMode, Permission, PermissionWithStatus};
pub use records::{FieldValue, HealthRecordType, ReadRequest, Record, Unit};
pub use results::WriteResponse;
pub use store::HealthStore;
