//! Neutral permission to `android.permission.health.*` identifier mapping.

use bridge_traits::{AccessMode, HealthRecordType, Permission};
use std::collections::BTreeSet;

pub const PERMISSION_PREFIX: &str = "android.permission.health.";

fn permission_suffix(record_type: HealthRecordType) -> &'static str {
    match record_type {
        HealthRecordType::Steps => "STEPS",
        HealthRecordType::Weight => "WEIGHT",
        HealthRecordType::Height => "HEIGHT",
        HealthRecordType::HeartRate => "HEART_RATE",
        HealthRecordType::ActiveEnergyBurned => "ACTIVE_CALORIES_BURNED",
        HealthRecordType::BloodGlucose => "BLOOD_GLUCOSE",
        HealthRecordType::BodyTemperature => "BODY_TEMPERATURE",
        HealthRecordType::SleepSession => "SLEEP",
    }
}

/// Expands a neutral permission into the native identifiers it requires.
///
/// Total over every (record type, mode) pair and never empty. A write
/// expands to the write identifier plus its read companion: Health Connect
/// write paths verify what they wrote, so write access without read access
/// is not usable.
pub fn native_identifiers(permission: Permission) -> BTreeSet<String> {
    let suffix = permission_suffix(permission.record_type);
    let read = format!("{PERMISSION_PREFIX}READ_{suffix}");
    match permission.mode {
        AccessMode::Read => BTreeSet::from([read]),
        AccessMode::Write => BTreeSet::from([format!("{PERMISSION_PREFIX}WRITE_{suffix}"), read]),
    }
}

/// Extracts the denied permission name from a native SecurityException
/// message, when present.
///
/// Health Connect embeds the full identifier in the exception text, e.g.
/// `java.lang.SecurityException: Caller doesn't have
/// android.permission.health.WRITE_STEPS to write to record type ...`.
pub fn parse_denied_permission(message: &str) -> Option<String> {
    let start = message.find(PERMISSION_PREFIX)?;
    let tail = &message[start..];
    let end = tail
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '.'))
        .map(|(i, _)| i)
        .unwrap_or(tail.len());
    let token = tail[..end].trim_end_matches('.');
    if token.len() > PERMISSION_PREFIX.len() {
        Some(token.to_string())
    } else {
        None
    }
}
