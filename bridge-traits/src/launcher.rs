//! Permission-request UI trigger.

use crate::error::Result;
use async_trait::async_trait;
use std::collections::BTreeSet;

/// Host-provided launcher for the native permission-request UI.
///
/// Created by the platform hook-set during `initialise`, wired to a
/// [`PermissionSender`](crate::handoff::PermissionSender) so that the native
/// callback can deliver the granted identifier set back to the waiting
/// caller. `launch` only triggers the UI; the grant outcome arrives through
/// the handoff channel.
#[async_trait]
pub trait PermissionUiLauncher: Send + Sync {
    async fn launch(&self, native_identifiers: BTreeSet<String>) -> Result<()>;
}
