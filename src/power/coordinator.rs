/*!
 * Wake Coordinator
 * Reference-counted ownership of the process-wide wake resource
 */

use super::traits::{WakeFlags, WakePrimitive};
use crate::core::errors::{RelayError, RelayResult};
use crate::core::guard::{GuardError, GuardResult, WakeGuard};
use crate::core::types::AlarmId;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Snapshot of wake resource usage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WakeStats {
    /// Holders currently sharing the resource
    pub holders: usize,
    /// Successful `acquire` calls, shared or not
    pub acquisitions: u64,
    /// `acquire` calls the OS denied
    pub denials: u64,
    /// Times the OS primitive itself was taken
    pub primitive_acquires: u64,
    /// Times the OS primitive itself was given back
    pub primitive_releases: u64,
}

/// State shared between the coordinator and every outstanding guard
pub(crate) struct WakeShared {
    primitive: Arc<dyn WakePrimitive>,
    flags: WakeFlags,
    /// Primitive calls happen while this lock is held so that a release and a
    /// concurrent acquire can never interleave on the OS handle.
    holders: Mutex<usize>,
    acquisitions: AtomicU64,
    denials: AtomicU64,
    primitive_acquires: AtomicU64,
    primitive_releases: AtomicU64,
}

impl WakeShared {
    /// Drop one holder; the last one gives the primitive back
    ///
    /// The count drops even when the primitive release fails, so the next
    /// acquire retries the primitive.
    pub(crate) fn release_one(&self, holder: Option<&AlarmId>) -> GuardResult<()> {
        let mut holders = self.holders.lock();

        if *holders == 0 {
            // Unreachable through WakeGuard, which releases at most once
            error!(alarm_id = ?holder, "wake release without a holder");
            return Ok(());
        }

        *holders -= 1;
        debug!(alarm_id = ?holder, holders = *holders, "wake holder released");

        if *holders == 0 {
            self.primitive_releases.fetch_add(1, Ordering::Relaxed);
            if let Err(e) = self.primitive.release() {
                warn!(error = %e, "wake primitive release failed");
                return Err(GuardError::OperationFailed(e.to_string()));
            }
        }

        Ok(())
    }
}

/// Process-wide wake coordinator
///
/// Cloning is cheap; clones share the same count and primitive.
///
/// # Example
///
/// ```ignore
/// let coordinator = WakeCoordinator::new(primitive, WakeFlags::default());
/// let guard = coordinator.acquire(&event.id)?;
/// // device stays awake
/// drop(guard);
/// ```
#[derive(Clone)]
pub struct WakeCoordinator {
    shared: Arc<WakeShared>,
}

impl WakeCoordinator {
    pub fn new(primitive: Arc<dyn WakePrimitive>, flags: WakeFlags) -> Self {
        Self {
            shared: Arc::new(WakeShared {
                primitive,
                flags,
                holders: Mutex::new(0),
                acquisitions: AtomicU64::new(0),
                denials: AtomicU64::new(0),
                primitive_acquires: AtomicU64::new(0),
                primitive_releases: AtomicU64::new(0),
            }),
        }
    }

    /// Take a share of the wake resource on behalf of `holder`
    ///
    /// The first concurrent holder acquires the OS primitive. If the OS
    /// denies it no share is taken and no guard is returned, so there is
    /// nothing to release.
    pub fn acquire(&self, holder: &AlarmId) -> RelayResult<WakeGuard> {
        let shared = &self.shared;
        let mut holders = shared.holders.lock();

        if *holders == 0 {
            if let Err(e) = shared.primitive.acquire(&shared.flags) {
                shared.denials.fetch_add(1, Ordering::Relaxed);
                let err = match e {
                    RelayError::ResourceUnavailable(_) => e,
                    other => RelayError::ResourceUnavailable(other.to_string()),
                };
                return Err(err);
            }
            shared.primitive_acquires.fetch_add(1, Ordering::Relaxed);
        }

        *holders += 1;
        shared.acquisitions.fetch_add(1, Ordering::Relaxed);
        debug!(alarm_id = %holder, holders = *holders, "wake holder acquired");
        drop(holders);

        Ok(WakeGuard::new(Arc::clone(shared), holder.clone()))
    }

    /// Number of outstanding guards
    pub fn holders(&self) -> usize {
        *self.shared.holders.lock()
    }

    /// Whether the OS primitive is currently held
    pub fn is_held(&self) -> bool {
        self.holders() > 0
    }

    pub fn flags(&self) -> &WakeFlags {
        &self.shared.flags
    }

    pub fn stats(&self) -> WakeStats {
        let shared = &self.shared;
        WakeStats {
            holders: self.holders(),
            acquisitions: shared.acquisitions.load(Ordering::Relaxed),
            denials: shared.denials.load(Ordering::Relaxed),
            primitive_acquires: shared.primitive_acquires.load(Ordering::Relaxed),
            primitive_releases: shared.primitive_releases.load(Ordering::Relaxed),
        }
    }
}
