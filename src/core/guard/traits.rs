/*!
 * Guard Traits
 *
 * Shared shape of the scoped resource tokens handed out by coordinators
 */

use super::{GuardMetadata, GuardResult};

/// A scoped share of some process-wide resource
///
/// Tokens are created already holding their share. `release` gives it back
/// exactly once; every later call reports `GuardError::AlreadyReleased`
/// without touching the underlying resource.
pub trait Guard: Send {
    /// Resource name used in logs
    fn resource_type(&self) -> &'static str;

    fn metadata(&self) -> &GuardMetadata;

    /// Whether the share is still held
    fn is_active(&self) -> bool;

    /// Give the share back before the token goes out of scope
    fn release(&mut self) -> GuardResult<()>;
}

/// Cleanup run from `Drop`, kept separate so it can be exercised directly
pub trait GuardDrop: Guard {
    /// Release if still active. Must not panic; it runs during unwinding.
    fn on_drop(&mut self);
}
