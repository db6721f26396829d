/*!
 * Alarm Relay Library
 *
 * Hands OS timer firings to a possibly dormant worker context without
 * losing the event or blocking the OS dispatch thread:
 * - Wake coordination with reference-counted guards
 * - Optional foreground launch of the host application
 * - Bounded, non-blocking handoff to the processing queue
 */

pub mod config;
pub mod core;
pub mod launch;
pub mod monitoring;
pub mod power;
pub mod relay;

// Re-exports
pub use config::RelayConfig;
pub use crate::core::errors::{ConfigError, RelayError, RelayResult};
pub use crate::core::guard::{Guard, GuardError, GuardResult, WakeGuard};
pub use crate::core::types::{AlarmEvent, AlarmId, PackageIdentity};
pub use launch::{ForegroundLauncher, LaunchFlags, LaunchOutcome, LaunchRequest};
pub use monitoring::{init_tracing, try_init_tracing, RelayStats, TraceFormat};
pub use power::{WakeCoordinator, WakeFlags, WakePrimitive, WakeStats};
pub use relay::{
    alarm_channel, AlarmQueue, AlarmReceiver, ChannelQueue, DeliveryReport, NotificationRelay,
    RelayBuilder, WakeOutcome,
};
