//! Unified outcome types for store operations.

use crate::error::BridgeError;

/// Outcome of a batch write against a native health store.
///
/// A write always resolves to one of these three values; native faults are
/// classified and folded into `Failed` at the platform bridge boundary.
#[derive(Debug, PartialEq)]
pub enum WriteResponse {
    /// Every submitted record was persisted.
    Success,
    /// Some but not all submitted records were persisted.
    SomeFailed { written: usize, submitted: usize },
    /// Nothing was persisted; carries the underlying cause.
    Failed(BridgeError),
}

impl WriteResponse {
    /// Maps a submitted-vs-persisted count comparison onto an outcome.
    ///
    /// `submitted` is the size of the converted batch handed to the native
    /// store, `written` the number of identifiers it returned.
    pub fn from_counts(written: usize, submitted: usize) -> Self {
        if written == submitted {
            WriteResponse::Success
        } else if written == 0 {
            WriteResponse::Failed(BridgeError::NoRecordsWritten)
        } else {
            WriteResponse::SomeFailed { written, submitted }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, WriteResponse::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_counts_resolve_to_success() {
        assert_eq!(WriteResponse::from_counts(3, 3), WriteResponse::Success);
        // Vacuous case: nothing submitted, nothing expected back.
        assert_eq!(WriteResponse::from_counts(0, 0), WriteResponse::Success);
    }

    #[test]
    fn zero_written_with_submissions_is_failed() {
        assert_eq!(
            WriteResponse::from_counts(0, 2),
            WriteResponse::Failed(BridgeError::NoRecordsWritten)
        );
    }

    #[test]
    fn partial_counts_resolve_to_some_failed() {
        assert_eq!(
            WriteResponse::from_counts(1, 3),
            WriteResponse::SomeFailed {
                written: 1,
                submitted: 3
            }
        );
    }
}
