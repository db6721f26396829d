/*!
 * RAII Resource Guards
 *
 * Scoped guards whose Drop returns the resource on every exit path,
 * including early returns and unwinding.
 *
 * ## Guard Types
 *
 * - **WakeGuard**: One holder's share of the process-wide wake resource
 *
 * ## Example
 *
 * ```ignore
 * let guard = coordinator.acquire(&event.id)?;
 * queue.enqueue(event)?;
 * drop(guard); // Last holder releases the OS primitive
 * ```
 */

mod traits;
mod wake;

pub use traits::{Guard, GuardDrop};
pub use wake::WakeGuard;

use crate::core::types::AlarmId;

/// Result type for guard operations
pub type GuardResult<T> = Result<T, GuardError>;

/// Errors that can occur during guard operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuardError {
    #[error("Resource already released")]
    AlreadyReleased,

    /// The share was returned but the OS primitive refused the release
    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

/// Guard metadata for observability
#[derive(Debug, Clone)]
pub struct GuardMetadata {
    pub resource_type: &'static str,
    pub creation_time: std::time::Instant,
    pub holder: Option<AlarmId>,
}

impl GuardMetadata {
    #[inline]
    pub fn new(resource_type: &'static str) -> Self {
        Self {
            resource_type,
            creation_time: std::time::Instant::now(),
            holder: None,
        }
    }

    #[inline]
    pub fn with_holder(mut self, holder: AlarmId) -> Self {
        self.holder = Some(holder);
        self
    }

    #[inline]
    pub fn lifetime_micros(&self) -> u64 {
        self.creation_time.elapsed().as_micros() as u64
    }
}
