//! Single-slot handoff from the permission-UI callback to the waiting caller.
//!
//! The native permission UI reports its result through a callback on the
//! host's UI context. [`PermissionHandoff`] bridges that callback into one
//! suspension point: the callback side holds a cheap, cloneable
//! [`PermissionSender`] and delivers exactly one granted-identifier set; the
//! store side awaits it with a bounded timeout. The channel has capacity 1
//! and the receiver sits behind a mutex, which caps the flow at one
//! outstanding permission request per store instance.

use crate::error::{BridgeError, Result};
use std::collections::HashSet;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};

/// Native permission identifiers reported granted by the UI flow.
pub type GrantedSet = HashSet<String>;

/// Callback-side handle delivering the grant outcome.
#[derive(Clone)]
pub struct PermissionSender {
    tx: mpsc::Sender<GrantedSet>,
}

impl PermissionSender {
    /// Delivers the granted set without blocking.
    ///
    /// Returns `false` when the slot is already occupied or no caller is
    /// listening any more; the callback context has nothing useful to do
    /// with the failure beyond dropping the result.
    pub fn deliver(&self, granted: GrantedSet) -> bool {
        self.tx.try_send(granted).is_ok()
    }
}

/// Store-side handoff primitive.
pub struct PermissionHandoff {
    tx: mpsc::Sender<GrantedSet>,
    rx: Mutex<mpsc::Receiver<GrantedSet>>,
}

impl PermissionHandoff {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(1);
        Self {
            tx,
            rx: Mutex::new(rx),
        }
    }

    /// A sender for wiring into the permission-UI launcher callback.
    pub fn sender(&self) -> PermissionSender {
        PermissionSender {
            tx: self.tx.clone(),
        }
    }

    /// Discards any delivery parked by an abandoned request.
    ///
    /// A prompt whose wait timed out can still answer later; the answer sits
    /// in the slot and would otherwise be consumed as the next request's
    /// result. Callers clear the slot before launching a new prompt.
    pub async fn clear_stale(&self) {
        let mut rx = self.rx.lock().await;
        while rx.try_recv().is_ok() {}
    }

    /// Awaits the next delivered grant set, bounded by `timeout`.
    ///
    /// Holding the receiver lock for the duration of the wait serialises
    /// concurrent callers into the single-outstanding-request constraint.
    pub async fn wait(&self, timeout: Duration) -> Result<GrantedSet> {
        let mut rx = self.rx.lock().await;
        match tokio::time::timeout(timeout, rx.recv()).await {
            Ok(Some(granted)) => Ok(granted),
            Ok(None) => Err(BridgeError::OperationFailed(
                "permission handoff channel closed".to_string(),
            )),
            Err(_) => Err(BridgeError::OperationTimeout {
                operation: "permission request".to_string(),
            }),
        }
    }
}

impl Default for PermissionHandoff {
    fn default() -> Self {
        Self::new()
    }
}
