//! # Health Connect Bridge
//!
//! [`HealthStore`](bridge_traits::HealthStore) implementation backed by the
//! Android Health Connect client.
//!
//! ## Overview
//!
//! The native Health Connect SDK lives on the host side; this crate talks to
//! it through two injected hook traits:
//! - [`HealthConnectClient`] - granted-permission query, batch insert, ranged
//!   read against the on-device store
//! - [`HealthConnectPlatform`] - SDK availability probe plus factories for
//!   the client handle and the permission-request UI launcher
//!
//! [`HealthConnectStore`] owns both handles, initialises them lazily, and
//! translates the neutral record and permission models to and from Health
//! Connect's record classes and `android.permission.health.*` identifiers.
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_health_connect::HealthConnectStore;
//! use bridge_traits::{HealthStore, StoreConfig};
//! use std::sync::Arc;
//!
//! let store = HealthConnectStore::new(platform_hooks, StoreConfig::default());
//! store.initialise().await?;
//! ```

mod client;
mod convert;
mod permissions;
mod store;

pub use client::{ConnectRecord, HealthConnectClient, HealthConnectPlatform};
pub use convert::{from_native, record_class, to_native};
pub use permissions::{native_identifiers, parse_denied_permission, PERMISSION_PREFIX};
pub use store::HealthConnectStore;
