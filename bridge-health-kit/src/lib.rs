//! # HealthKit Bridge
//!
//! [`HealthStore`](bridge_traits::HealthStore) implementation backed by the
//! Apple HealthKit store.
//!
//! ## Overview
//!
//! The native HealthKit framework lives on the host side; this crate talks
//! to it through two injected hook traits:
//! - [`HealthKitClient`] - authorization query, sample save, ranged sample
//!   query against the on-device store
//! - [`HealthKitPlatform`] - `isHealthDataAvailable` probe plus factories
//!   for the client handle and the authorization-sheet launcher
//!
//! [`HealthKitStore`] owns both handles, initialises them lazily, and
//! translates the neutral record and permission models to and from
//! HealthKit's `HKQuantityTypeIdentifier*` sample types and `read.*` /
//! `share.*` authorization identifiers.
//!
//! Sleep sessions are HealthKit category samples, which this bridge does
//! not read; their permissions still map so that request flows covering
//! sleep stay well-defined.

mod client;
mod convert;
mod permissions;
mod store;

pub use client::{HealthKitClient, HealthKitPlatform, KitSample};
pub use convert::{from_native, sample_type, to_native, unit_label};
pub use permissions::{native_identifiers, parse_denied_identifier, type_identifier};
pub use store::HealthKitStore;
