/*!
 * Relay Configuration
 *
 * Defaults, overlaid by JSON (host-provided) or environment variables.
 */

use crate::core::errors::ConfigError;
use crate::core::limits::{DEFAULT_ENQUEUE_LOOKAHEAD_MS, DEFAULT_QUEUE_CAPACITY};
use crate::core::types::PackageIdentity;
use crate::monitoring::{try_init_tracing, TraceFormat};
use crate::power::WakeFlags;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;
use tracing_subscriber::util::TryInitError;

pub const ENV_PACKAGE: &str = "ALARM_RELAY_PACKAGE";
pub const ENV_WAKE_TAG: &str = "ALARM_RELAY_WAKE_TAG";
pub const ENV_LAUNCH_ON_WAKE: &str = "ALARM_RELAY_LAUNCH_ON_WAKE";
pub const ENV_QUEUE_CAPACITY: &str = "ALARM_RELAY_QUEUE_CAPACITY";
pub const ENV_ENQUEUE_LOOKAHEAD_MS: &str = "ALARM_RELAY_ENQUEUE_LOOKAHEAD_MS";
pub const ENV_TRACE_JSON: &str = crate::monitoring::TRACE_JSON_ENV;

/// Relay configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RelayConfig {
    /// Host application to raise when an alarm wakes the device
    pub package: PackageIdentity,
    /// Options for the OS wake primitive
    pub wake_flags: WakeFlags,
    /// Raise the host application on wake-up alarms
    pub launch_on_wake: bool,
    /// Capacity of the reference channel queue
    pub queue_capacity: usize,
    /// Longest a send into a full channel queue may wait
    pub enqueue_lookahead_ms: u64,
    /// JSON log output, applied by [`RelayConfig::init_tracing`]
    pub trace_json: bool,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            package: PackageIdentity::default(),
            wake_flags: WakeFlags::default(),
            launch_on_wake: true,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            enqueue_lookahead_ms: DEFAULT_ENQUEUE_LOOKAHEAD_MS,
            trace_json: false,
        }
    }
}

impl RelayConfig {
    /// Defaults overlaid with `ALARM_RELAY_*` environment variables
    ///
    /// Unparsable values are logged and the default kept.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(package) = std::env::var(ENV_PACKAGE) {
            config.package = PackageIdentity::new(package);
        }
        if let Ok(tag) = std::env::var(ENV_WAKE_TAG) {
            config.wake_flags.tag = tag;
        }
        if let Some(v) = env_parse::<bool>(ENV_LAUNCH_ON_WAKE) {
            config.launch_on_wake = v;
        }
        if let Some(v) = env_parse::<usize>(ENV_QUEUE_CAPACITY) {
            config.queue_capacity = v;
        }
        if let Some(v) = env_parse::<u64>(ENV_ENQUEUE_LOOKAHEAD_MS) {
            config.enqueue_lookahead_ms = v;
        }
        if let Ok(v) = std::env::var(ENV_TRACE_JSON) {
            config.trace_json = v == "1" || v == "true";
        }

        config
    }

    /// Parse a JSON object; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field, including the reference channel settings
    ///
    /// `queue_capacity` only matters to [`crate::alarm_channel`]; a relay
    /// wired to a host-supplied queue still rejects a zero capacity so one
    /// config file stays valid for both setups.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.package.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "package",
                reason: "package identity must not be empty".into(),
            });
        }
        if self.queue_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                field: "queue_capacity",
                reason: "a zero-capacity queue cannot buffer alarms".into(),
            });
        }
        Ok(())
    }

    #[inline]
    pub fn enqueue_lookahead(&self) -> Duration {
        Duration::from_millis(self.enqueue_lookahead_ms)
    }

    /// Subscriber output selected by `trace_json`
    #[inline]
    pub fn trace_format(&self) -> TraceFormat {
        TraceFormat::from_json_flag(self.trace_json)
    }

    /// Install the global subscriber in the configured format
    pub fn init_tracing(&self) -> Result<(), TryInitError> {
        try_init_tracing(self.trace_format())
    }
}

fn env_parse<T: FromStr>(key: &str) -> Option<T>
where
    T::Err: std::fmt::Display,
{
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(e) => {
            warn!(key = key, value = %raw, error = %e, "ignoring unparsable config value");
            None
        }
    }
}
