//! Neutral record to Health Connect record conversion.
//!
//! Both directions are partial functions: a record type with no Health
//! Connect counterpart, or a record missing the fields its class requires,
//! converts to `None`. Callers drop such records silently; partial
//! convertibility is expected across platforms.

use crate::client::ConnectRecord;
use bridge_traits::records::fields;
use bridge_traits::{FieldValue, HealthRecordType, Record};

/// The Health Connect record class backing a neutral record type, if any.
///
/// BodyTemperature has no mapping on this bridge.
pub fn record_class(record_type: HealthRecordType) -> Option<&'static str> {
    match record_type {
        HealthRecordType::Steps => Some("StepsRecord"),
        HealthRecordType::Weight => Some("WeightRecord"),
        HealthRecordType::Height => Some("HeightRecord"),
        HealthRecordType::HeartRate => Some("HeartRateRecord"),
        HealthRecordType::ActiveEnergyBurned => Some("ActiveCaloriesBurnedRecord"),
        HealthRecordType::BloodGlucose => Some("BloodGlucoseRecord"),
        HealthRecordType::SleepSession => Some("SleepSessionRecord"),
        HealthRecordType::BodyTemperature => None,
    }
}

/// Converts a neutral record into its Health Connect form.
///
/// Requires the time-range instants and a `value` quantity carried in the
/// record type's canonical unit.
pub fn to_native(record: &Record) -> Option<ConnectRecord> {
    let class = record_class(record.record_type())?;
    let start_time = record.instant_field(fields::START_TIME)?;
    let end_time = record.instant_field(fields::END_TIME)?;
    let (value, unit) = record.quantity_field(fields::VALUE)?;
    if unit != record.record_type().unit() || start_time > end_time {
        return None;
    }
    Some(ConnectRecord {
        record_class: class.to_string(),
        start_time,
        end_time,
        value,
        metadata_id: None,
        origin: None,
    })
}

/// Converts a native record read from the store back into neutral form,
/// attaching the originating package as source metadata when known.
///
/// The store-assigned `metadata_id` is deliberately not carried over.
pub fn from_native(native: &ConnectRecord, record_type: HealthRecordType) -> Option<Record> {
    if record_class(record_type) != Some(native.record_class.as_str()) {
        return None;
    }
    let mut record = Record::quantity(
        record_type,
        native.start_time,
        native.end_time,
        native.value,
    );
    if let Some(origin) = &native.origin {
        record = record.with_field(fields::SOURCE, FieldValue::Text(origin.clone()));
    }
    Some(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::Unit;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn round_trip_preserves_every_supported_type() {
        for record_type in HealthRecordType::ALL {
            if record_class(record_type).is_none() {
                continue;
            }
            let record = Record::quantity(record_type, at(8), at(9), 42.5);
            let native = to_native(&record).expect("supported type must convert");
            assert!(native.metadata_id.is_none());
            let back = from_native(&native, record_type).expect("native must convert back");
            assert_eq!(back, record);
        }
    }

    #[test]
    fn unsupported_type_converts_to_none() {
        let record = Record::quantity(HealthRecordType::BodyTemperature, at(8), at(8), 36.6);
        assert!(to_native(&record).is_none());
    }

    #[test]
    fn missing_value_field_converts_to_none() {
        let record = Record::new(HealthRecordType::Steps)
            .with_field(fields::START_TIME, FieldValue::Instant(at(8)))
            .with_field(fields::END_TIME, FieldValue::Instant(at(9)));
        assert!(to_native(&record).is_none());
    }

    #[test]
    fn mismatched_unit_converts_to_none() {
        let record = Record::new(HealthRecordType::Steps)
            .with_field(fields::START_TIME, FieldValue::Instant(at(8)))
            .with_field(fields::END_TIME, FieldValue::Instant(at(9)))
            .with_field(
                fields::VALUE,
                FieldValue::Quantity {
                    value: 1.0,
                    unit: Unit::Kilograms,
                },
            );
        assert!(to_native(&record).is_none());
    }

    #[test]
    fn inverted_record_range_converts_to_none() {
        let record = Record::quantity(HealthRecordType::Steps, at(9), at(8), 10.0);
        assert!(to_native(&record).is_none());
    }

    #[test]
    fn origin_comes_back_as_source_metadata() {
        let native = ConnectRecord {
            record_class: "WeightRecord".to_string(),
            start_time: at(7),
            end_time: at(7),
            value: 81.2,
            metadata_id: Some("uid-1".to_string()),
            origin: Some("com.example.scale".to_string()),
        };
        let record = from_native(&native, HealthRecordType::Weight).unwrap();
        assert_eq!(record.text_field(fields::SOURCE), Some("com.example.scale"));
    }

    #[test]
    fn class_mismatch_converts_to_none() {
        let native = ConnectRecord {
            record_class: "StepsRecord".to_string(),
            start_time: at(7),
            end_time: at(8),
            value: 100.0,
            metadata_id: None,
            origin: None,
        };
        assert!(from_native(&native, HealthRecordType::Weight).is_none());
    }
}
