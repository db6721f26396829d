/*!
 * Relay Limits and Constants
 *
 * Centralized location for defaults, thresholds and tags.
 */

use std::time::Duration;

// =============================================================================
// WAKE RESOURCE
// =============================================================================

/// Tag attached to the OS wake primitive so it shows up in power diagnostics
pub const DEFAULT_WAKE_TAG: &str = "app:wakelocktag";

// =============================================================================
// PROCESSING QUEUE
// =============================================================================

/// Alarms buffered while the worker context is still starting
pub const DEFAULT_QUEUE_CAPACITY: usize = 256;

/// Longest a full queue may hold up the OS dispatch thread (milliseconds)
pub const DEFAULT_ENQUEUE_LOOKAHEAD_MS: u64 = 20;

// =============================================================================
// DIAGNOSTICS
// =============================================================================

/// Handoffs slower than this are logged as warnings
/// The OS may penalise receivers that do not return promptly
pub const SLOW_HANDOFF_THRESHOLD: Duration = Duration::from_millis(10);

/// Package identity used when none is configured
pub const DEFAULT_PACKAGE_IDENTITY: &str = "app.host";
