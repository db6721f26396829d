/*!
 * Wake Guards
 *
 * RAII token for one holder's share of the wake resource
 */

use super::traits::{Guard, GuardDrop};
use super::{GuardError, GuardMetadata, GuardResult};
use crate::core::types::AlarmId;
use crate::power::coordinator::WakeShared;
use std::fmt;
use std::sync::Arc;

/// Scoped share of the process-wide wake resource
///
/// Only `WakeCoordinator::acquire` creates these, and only after the
/// resource was actually obtained. Releasing twice is an error rather than a
/// second decrement; dropping an active guard releases it.
pub struct WakeGuard {
    shared: Arc<WakeShared>,
    metadata: GuardMetadata,
    active: bool,
}

impl WakeGuard {
    pub(crate) fn new(shared: Arc<WakeShared>, holder: AlarmId) -> Self {
        Self {
            shared,
            metadata: GuardMetadata::new("wake").with_holder(holder),
            active: true,
        }
    }

    /// Alarm this share was taken for
    #[inline]
    pub fn holder(&self) -> Option<&AlarmId> {
        self.metadata.holder.as_ref()
    }
}

impl Guard for WakeGuard {
    fn resource_type(&self) -> &'static str {
        "wake"
    }

    fn metadata(&self) -> &GuardMetadata {
        &self.metadata
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn release(&mut self) -> GuardResult<()> {
        if !self.active {
            return Err(GuardError::AlreadyReleased);
        }

        self.active = false;
        self.shared.release_one(self.metadata.holder.as_ref())
    }
}

impl GuardDrop for WakeGuard {
    fn on_drop(&mut self) {
        if self.active {
            // Primitive failures are already logged by the coordinator
            let _ = self.release();
        }
    }
}

impl Drop for WakeGuard {
    fn drop(&mut self) {
        self.on_drop();
    }
}

impl fmt::Debug for WakeGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WakeGuard")
            .field("holder", &self.metadata.holder)
            .field("active", &self.active)
            .field("lifetime_micros", &self.metadata.lifetime_micros())
            .finish()
    }
}
