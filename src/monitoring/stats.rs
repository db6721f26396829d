/*!
 * Lock-Free Relay Statistics
 * Atomic counters updated from the OS dispatch thread
 */

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Point-in-time copy of relay counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayStats {
    pub alarms_fired: u64,
    pub wake_requested: u64,
    pub wake_denied: u64,
    pub launches_requested: u64,
    pub launches_skipped: u64,
    pub launches_failed: u64,
    pub enqueued: u64,
    pub enqueue_failed: u64,
}

impl RelayStats {
    /// Firings whose work never reached the processing queue
    #[inline]
    pub fn lost(&self) -> u64 {
        self.enqueue_failed
    }
}

/// Atomic relay statistics
///
/// # Performance
/// - Cache-line aligned to prevent false sharing
/// - Relaxed ordering; snapshot values are individually accurate but not
///   mutually consistent under concurrent firings
#[repr(C, align(64))]
#[derive(Debug)]
pub struct AtomicRelayStats {
    alarms_fired: AtomicU64,
    wake_requested: AtomicU64,
    wake_denied: AtomicU64,
    launches_requested: AtomicU64,
    launches_skipped: AtomicU64,
    launches_failed: AtomicU64,
    enqueued: AtomicU64,
    enqueue_failed: AtomicU64,
}

impl AtomicRelayStats {
    #[inline]
    pub const fn new() -> Self {
        Self {
            alarms_fired: AtomicU64::new(0),
            wake_requested: AtomicU64::new(0),
            wake_denied: AtomicU64::new(0),
            launches_requested: AtomicU64::new(0),
            launches_skipped: AtomicU64::new(0),
            launches_failed: AtomicU64::new(0),
            enqueued: AtomicU64::new(0),
            enqueue_failed: AtomicU64::new(0),
        }
    }

    #[inline(always)]
    pub fn inc_fired(&self) {
        self.alarms_fired.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn inc_wake_requested(&self) {
        self.wake_requested.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn inc_wake_denied(&self) {
        self.wake_denied.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn inc_launch_requested(&self) {
        self.launches_requested.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn inc_launch_skipped(&self) {
        self.launches_skipped.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn inc_launch_failed(&self) {
        self.launches_failed.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn inc_enqueued(&self) {
        self.enqueued.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn inc_enqueue_failed(&self) {
        self.enqueue_failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Get snapshot of current stats (no locks required)
    #[inline]
    pub fn snapshot(&self) -> RelayStats {
        RelayStats {
            alarms_fired: self.alarms_fired.load(Ordering::Relaxed),
            wake_requested: self.wake_requested.load(Ordering::Relaxed),
            wake_denied: self.wake_denied.load(Ordering::Relaxed),
            launches_requested: self.launches_requested.load(Ordering::Relaxed),
            launches_skipped: self.launches_skipped.load(Ordering::Relaxed),
            launches_failed: self.launches_failed.load(Ordering::Relaxed),
            enqueued: self.enqueued.load(Ordering::Relaxed),
            enqueue_failed: self.enqueue_failed.load(Ordering::Relaxed),
        }
    }
}

impl Default for AtomicRelayStats {
    fn default() -> Self {
        Self::new()
    }
}
