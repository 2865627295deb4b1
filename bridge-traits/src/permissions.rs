//! Neutral permission model.
//!
//! A [`Permission`] is a (record type, access mode) pair. Each platform
//! bridge expands a permission into one or more native permission identifier
//! strings; the expansion must be deterministic, total over all pairs, and
//! never empty. Granted status is computed by intersecting the identifiers a
//! permission requires with the set the native store reports as granted.

use crate::records::HealthRecordType;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fmt;

/// Whether a permission covers reading or writing a record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AccessMode {
    Read,
    Write,
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessMode::Read => write!(f, "read"),
            AccessMode::Write => write!(f, "write"),
        }
    }
}

/// A platform-neutral permission descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Permission {
    pub record_type: HealthRecordType,
    pub mode: AccessMode,
}

impl Permission {
    pub fn read(record_type: HealthRecordType) -> Self {
        Self {
            record_type,
            mode: AccessMode::Read,
        }
    }

    pub fn write(record_type: HealthRecordType) -> Self {
        Self {
            record_type,
            mode: AccessMode::Write,
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.record_type, self.mode)
    }
}

/// A permission annotated with its granted status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionWithStatus {
    pub permission: Permission,
    pub granted: bool,
}

/// Resolves granted status for each requested permission.
///
/// `expand` is the platform's native-identifier expansion. A permission is
/// granted only when every identifier it expands to is present in `granted`;
/// an empty expansion resolves to ungranted (it would violate the totality
/// invariant and must never be treated as vacuously satisfied).
pub fn resolve_statuses<F>(
    requested: &[Permission],
    granted: &HashSet<String>,
    expand: F,
) -> Vec<PermissionWithStatus>
where
    F: Fn(Permission) -> BTreeSet<String>,
{
    requested
        .iter()
        .map(|&permission| {
            let needed = expand(permission);
            let satisfied = !needed.is_empty() && needed.iter().all(|id| granted.contains(id));
            PermissionWithStatus {
                permission,
                granted: satisfied,
            }
        })
        .collect()
}

/// The union of native identifiers required across a set of permissions.
pub fn required_identifiers<F>(requested: &[Permission], expand: F) -> BTreeSet<String>
where
    F: Fn(Permission) -> BTreeSet<String>,
{
    requested
        .iter()
        .flat_map(|&permission| expand(permission))
        .collect()
}
