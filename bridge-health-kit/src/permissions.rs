//! Neutral permission to HealthKit authorization identifier mapping.

use bridge_traits::{AccessMode, HealthRecordType, Permission};
use std::collections::BTreeSet;

/// The HealthKit object type identifier for a neutral record type.
///
/// Total: every record type has an identifier, including SleepSession
/// (a category type), even though this bridge does not read category
/// samples.
pub fn type_identifier(record_type: HealthRecordType) -> &'static str {
    match record_type {
        HealthRecordType::Steps => "HKQuantityTypeIdentifierStepCount",
        HealthRecordType::Weight => "HKQuantityTypeIdentifierBodyMass",
        HealthRecordType::Height => "HKQuantityTypeIdentifierHeight",
        HealthRecordType::HeartRate => "HKQuantityTypeIdentifierHeartRate",
        HealthRecordType::ActiveEnergyBurned => "HKQuantityTypeIdentifierActiveEnergyBurned",
        HealthRecordType::BloodGlucose => "HKQuantityTypeIdentifierBloodGlucose",
        HealthRecordType::BodyTemperature => "HKQuantityTypeIdentifierBodyTemperature",
        HealthRecordType::SleepSession => "HKCategoryTypeIdentifierSleepAnalysis",
    }
}

/// Expands a neutral permission into the authorization identifiers it
/// requires: `read.<type>` for reads, `share.<type>` for writes.
pub fn native_identifiers(permission: Permission) -> BTreeSet<String> {
    let identifier = type_identifier(permission.record_type);
    let prefix = match permission.mode {
        AccessMode::Read => "read",
        AccessMode::Write => "share",
    };
    BTreeSet::from([format!("{prefix}.{identifier}")])
}

/// Extracts the object type identifier from an authorization-denied error
/// message, when present.
///
/// HealthKit errors carry the type in text such as `Authorization is not
/// determined for HKQuantityTypeIdentifierStepCount` or
/// `errorAuthorizationDenied: HKQuantityTypeIdentifierBodyMass`.
pub fn parse_denied_identifier(message: &str) -> Option<String> {
    for prefix in ["HKQuantityTypeIdentifier", "HKCategoryTypeIdentifier"] {
        if let Some(start) = message.find(prefix) {
            let tail = &message[start..];
            let end = tail
                .char_indices()
                .find(|(_, c)| !c.is_ascii_alphanumeric())
                .map(|(i, _)| i)
                .unwrap_or(tail.len());
            if end > prefix.len() {
                return Some(tail[..end].to_string());
            }
        }
    }
    None
}
