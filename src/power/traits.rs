/*!
 * Wake Primitive Traits
 * Seam between the coordinator and the OS power facility
 */

use crate::core::errors::RelayResult;
use crate::core::limits::DEFAULT_WAKE_TAG;
use serde::{Deserialize, Serialize};

/// Options the OS wake primitive is created with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WakeFlags {
    /// Keep the screen on while held
    pub keep_screen_on: bool,
    /// Turn the device on when acquired, not just keep it from sleeping
    pub causes_wakeup: bool,
    /// Reset the user-activity timer on release so the screen stays lit briefly
    pub on_after_release: bool,
    /// Diagnostic tag reported to the OS
    pub tag: String,
}

impl Default for WakeFlags {
    fn default() -> Self {
        Self {
            keep_screen_on: true,
            causes_wakeup: true,
            on_after_release: true,
            tag: DEFAULT_WAKE_TAG.to_string(),
        }
    }
}

/// OS-level "stay awake" primitive
///
/// The coordinator calls `acquire` only on the first concurrent holder and
/// `release` only when the last holder goes away, so implementations never
/// see nested calls.
///
/// # Deadlocks
///
/// Both methods run while the coordinator's holder lock is held. An
/// implementation must not call back into the `WakeCoordinator` (including
/// `holders`, `is_held` and `stats`) or it will deadlock.
#[cfg_attr(test, mockall::automock)]
pub trait WakePrimitive: Send + Sync {
    /// Prevent the device from suspending
    ///
    /// Fails with `RelayError::ResourceUnavailable` when the OS denies it
    fn acquire(&self, flags: &WakeFlags) -> RelayResult<()>;

    /// Allow the device to suspend again
    fn release(&self) -> RelayResult<()>;
}
