/*!
 * Power Module
 * Keeps the device awake while an alarm handoff is in flight
 */

pub(crate) mod coordinator;
pub mod traits;

pub use crate::core::guard::WakeGuard;
pub use coordinator::{WakeCoordinator, WakeStats};
pub use traits::{WakeFlags, WakePrimitive};
