use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors surfaced by the health store bridges.
///
/// Availability and misuse errors (`NotAvailable`, `NotInitialised`) are
/// returned to the immediate caller. Native faults during writes are folded
/// into [`WriteResponse::Failed`](crate::results::WriteResponse) instead of
/// propagating, and faults during reads degrade to an empty result set.
#[derive(Error, Debug, PartialEq)]
pub enum BridgeError {
    #[error("Health store is not available on this device")]
    NotAvailable,

    #[error("Health store not initialised: {0}")]
    NotInitialised(String),

    #[error("No write access to the health store{}", .permission.as_deref().map(|p| format!(" (permission: {p})")).unwrap_or_default())]
    NoWriteAccess { permission: Option<String> },

    #[error("No records were written")]
    NoRecordsWritten,

    #[error("Invalid time range: start {start} is after end {end}")]
    InvalidTimeRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("Operation timed out: {operation}")]
    OperationTimeout { operation: String },

    #[error("Bridge operation failed: {0}")]
    OperationFailed(String),
}

pub type Result<T> = std::result::Result<T, BridgeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn no_write_access_display_includes_permission() {
        let err = BridgeError::NoWriteAccess {
            permission: Some("android.permission.health.WRITE_STEPS".to_string()),
        };
        assert!(err
            .to_string()
            .contains("android.permission.health.WRITE_STEPS"));

        let bare = BridgeError::NoWriteAccess { permission: None };
        assert_eq!(bare.to_string(), "No write access to the health store");
    }

    #[test]
    fn invalid_time_range_display() {
        let start = Utc.with_ymd_and_hms(2024, 5, 2, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let err = BridgeError::InvalidTimeRange { start, end };
        assert!(err.to_string().contains("start"));
        assert!(err.to_string().contains("2024-05-02"));
    }
}
