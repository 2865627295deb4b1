//! Neutral health record model.
//!
//! Records are platform-agnostic value objects: a [`HealthRecordType`] tag
//! plus a map of named, typed fields. Each platform bridge converts records
//! to and from its own native representation; conversion is a partial
//! function (an unsupported or malformed record converts to `None`), since
//! full cross-platform type coverage is not expected.

use crate::error::{BridgeError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Kinds of health data understood by the neutral model.
///
/// Each value maps many-to-one onto native record classes per platform. The
/// permission mapping is total over this enum; the data mapping may be
/// partial on a given platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HealthRecordType {
    Steps,
    Weight,
    Height,
    HeartRate,
    ActiveEnergyBurned,
    BloodGlucose,
    BodyTemperature,
    SleepSession,
}

impl HealthRecordType {
    /// All record types, for exhaustive permission mapping checks.
    pub const ALL: [HealthRecordType; 8] = [
        HealthRecordType::Steps,
        HealthRecordType::Weight,
        HealthRecordType::Height,
        HealthRecordType::HeartRate,
        HealthRecordType::ActiveEnergyBurned,
        HealthRecordType::BloodGlucose,
        HealthRecordType::BodyTemperature,
        HealthRecordType::SleepSession,
    ];

    /// The canonical unit for this record type's `value` field.
    pub fn unit(self) -> Unit {
        match self {
            HealthRecordType::Steps => Unit::Count,
            HealthRecordType::Weight => Unit::Kilograms,
            HealthRecordType::Height => Unit::Meters,
            HealthRecordType::HeartRate => Unit::BeatsPerMinute,
            HealthRecordType::ActiveEnergyBurned => Unit::Kilocalories,
            HealthRecordType::BloodGlucose => Unit::MillimolesPerLiter,
            HealthRecordType::BodyTemperature => Unit::Celsius,
            HealthRecordType::SleepSession => Unit::Minutes,
        }
    }
}

impl fmt::Display for HealthRecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HealthRecordType::Steps => "steps",
            HealthRecordType::Weight => "weight",
            HealthRecordType::Height => "height",
            HealthRecordType::HeartRate => "heart_rate",
            HealthRecordType::ActiveEnergyBurned => "active_energy_burned",
            HealthRecordType::BloodGlucose => "blood_glucose",
            HealthRecordType::BodyTemperature => "body_temperature",
            HealthRecordType::SleepSession => "sleep_session",
        };
        write!(f, "{name}")
    }
}

/// Measurement units carried by quantity fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    Count,
    Kilograms,
    Meters,
    BeatsPerMinute,
    Kilocalories,
    MillimolesPerLiter,
    Celsius,
    Minutes,
}

/// A single typed field value inside a [`Record`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Quantity { value: f64, unit: Unit },
    Instant(DateTime<Utc>),
    Text(String),
}

/// Well-known field names used by the platform bridges.
pub mod fields {
    pub const START_TIME: &str = "start_time";
    pub const END_TIME: &str = "end_time";
    pub const VALUE: &str = "value";
    /// Source metadata attached when reading back from a native store
    /// (originating package or app name). Never required on writes.
    pub const SOURCE: &str = "source";
}

/// A neutral representation of one health data point.
///
/// Immutable after construction; built with [`Record::new`] and
/// [`Record::with_field`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    record_type: HealthRecordType,
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new(record_type: HealthRecordType) -> Self {
        Self {
            record_type,
            fields: BTreeMap::new(),
        }
    }

    /// A record with the common shape: a time range plus one quantity in the
    /// record type's canonical unit.
    pub fn quantity(
        record_type: HealthRecordType,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        value: f64,
    ) -> Self {
        Self::new(record_type)
            .with_field(fields::START_TIME, FieldValue::Instant(start))
            .with_field(fields::END_TIME, FieldValue::Instant(end))
            .with_field(
                fields::VALUE,
                FieldValue::Quantity {
                    value,
                    unit: record_type.unit(),
                },
            )
    }

    pub fn with_field(mut self, name: impl Into<String>, value: FieldValue) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    pub fn record_type(&self) -> HealthRecordType {
        self.record_type
    }

    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &BTreeMap<String, FieldValue> {
        &self.fields
    }

    pub fn instant_field(&self, name: &str) -> Option<DateTime<Utc>> {
        match self.fields.get(name) {
            Some(FieldValue::Instant(at)) => Some(*at),
            _ => None,
        }
    }

    pub fn quantity_field(&self, name: &str) -> Option<(f64, Unit)> {
        match self.fields.get(name) {
            Some(FieldValue::Quantity { value, unit }) => Some((*value, *unit)),
            _ => None,
        }
    }

    pub fn text_field(&self, name: &str) -> Option<&str> {
        match self.fields.get(name) {
            Some(FieldValue::Text(text)) => Some(text.as_str()),
            _ => None,
        }
    }
}

/// A ranged query against the native store.
///
/// The range is validated at construction: `start` must not be after `end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadRequest {
    record_type: HealthRecordType,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl ReadRequest {
    pub fn new(
        record_type: HealthRecordType,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Self> {
        if start > end {
            return Err(BridgeError::InvalidTimeRange { start, end });
        }
        Ok(Self {
            record_type,
            start,
            end,
        })
    }

    pub fn record_type(&self) -> HealthRecordType {
        self.record_type
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }
}
