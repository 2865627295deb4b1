//! Neutral record to HealthKit sample conversion.

use crate::client::KitSample;
use crate::permissions::type_identifier;
use bridge_traits::records::fields;
use bridge_traits::{FieldValue, HealthRecordType, Record, Unit};

/// The HealthKit quantity sample type backing a neutral record type, if any.
///
/// SleepSession is a category type and has no quantity sample form on this
/// bridge.
pub fn sample_type(record_type: HealthRecordType) -> Option<&'static str> {
    match record_type {
        HealthRecordType::SleepSession => None,
        other => Some(type_identifier(other)),
    }
}

/// The HealthKit unit string for a neutral unit.
pub fn unit_label(unit: Unit) -> &'static str {
    match unit {
        Unit::Count => "count",
        Unit::Kilograms => "kg",
        Unit::Meters => "m",
        Unit::BeatsPerMinute => "count/min",
        Unit::Kilocalories => "kcal",
        Unit::MillimolesPerLiter => "mmol/L",
        Unit::Celsius => "degC",
        Unit::Minutes => "min",
    }
}

/// Converts a neutral record into a HealthKit sample.
pub fn to_native(record: &Record) -> Option<KitSample> {
    let sample_type = sample_type(record.record_type())?;
    let start_date = record.instant_field(fields::START_TIME)?;
    let end_date = record.instant_field(fields::END_TIME)?;
    let (value, unit) = record.quantity_field(fields::VALUE)?;
    if unit != record.record_type().unit() || start_date > end_date {
        return None;
    }
    Some(KitSample {
        sample_type: sample_type.to_string(),
        unit: unit_label(unit).to_string(),
        value,
        start_date,
        end_date,
        uuid: None,
        source_name: None,
    })
}

/// Converts a sample read from the store back into neutral form, attaching
/// the recording source as metadata when known. The store-assigned UUID is
/// not carried over.
pub fn from_native(native: &KitSample, record_type: HealthRecordType) -> Option<Record> {
    if sample_type(record_type) != Some(native.sample_type.as_str())
        || native.unit != unit_label(record_type.unit())
    {
        return None;
    }
    let mut record = Record::quantity(
        record_type,
        native.start_date,
        native.end_date,
        native.value,
    );
    if let Some(source) = &native.source_name {
        record = record.with_field(fields::SOURCE, FieldValue::Text(source.clone()));
    }
    Some(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn round_trip_preserves_every_supported_type() {
        for record_type in HealthRecordType::ALL {
            if sample_type(record_type).is_none() {
                continue;
            }
            let record = Record::quantity(record_type, at(6), at(7), 12.25);
            let native = to_native(&record).expect("supported type must convert");
            let back = from_native(&native, record_type).expect("native must convert back");
            assert_eq!(back, record);
        }
    }

    #[test]
    fn sleep_session_has_no_sample_form() {
        let record = Record::quantity(HealthRecordType::SleepSession, at(22), at(23), 60.0);
        assert!(to_native(&record).is_none());
    }

    #[test]
    fn unit_mismatch_on_read_back_converts_to_none() {
        let native = KitSample {
            sample_type: "HKQuantityTypeIdentifierBodyMass".to_string(),
            unit: "lb".to_string(),
            value: 180.0,
            start_date: at(6),
            end_date: at(6),
            uuid: None,
            source_name: None,
        };
        assert!(from_native(&native, HealthRecordType::Weight).is_none());
    }

    #[test]
    fn source_name_comes_back_as_source_metadata() {
        let native = KitSample {
            sample_type: "HKQuantityTypeIdentifierHeartRate".to_string(),
            unit: "count/min".to_string(),
            value: 62.0,
            start_date: at(6),
            end_date: at(6),
            uuid: Some("uuid-3".to_string()),
            source_name: Some("Apple Watch".to_string()),
        };
        let record = from_native(&native, HealthRecordType::HeartRate).unwrap();
        assert_eq!(record.text_field(fields::SOURCE), Some("Apple Watch"));
    }
}
