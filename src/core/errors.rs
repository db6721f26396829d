/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for relay operations
pub type RelayResult<T> = Result<T, RelayError>;

/// Failures that can occur while handing an alarm off to the processing queue
///
/// `ResourceUnavailable` and `LaunchFailed` are recovered inside the relay.
/// `EnqueueFailed` means the work for this firing is lost.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum RelayError {
    #[error("Wake resource unavailable: {0}")]
    #[diagnostic(
        code(relay::resource_unavailable),
        help("The OS denied the wake primitive. Check that the wake permission is still granted.")
    )]
    ResourceUnavailable(String),

    #[error("Foreground launch failed: {0}")]
    #[diagnostic(
        code(relay::launch_failed),
        help("The host application could not be raised. The alarm is still delivered.")
    )]
    LaunchFailed(String),

    #[error("Processing queue rejected alarm: {0}")]
    #[diagnostic(
        code(relay::enqueue_failed),
        help("The worker context is gone or its queue is full. This firing's work is lost.")
    )]
    EnqueueFailed(String),
}

impl RelayError {
    /// Whether the relay continues the handoff after this error
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            RelayError::ResourceUnavailable(_) | RelayError::LaunchFailed(_)
        )
    }

    /// Short stable label for logs and metrics
    pub fn kind(&self) -> &'static str {
        match self {
            RelayError::ResourceUnavailable(_) => "resource_unavailable",
            RelayError::LaunchFailed(_) => "launch_failed",
            RelayError::EnqueueFailed(_) => "enqueue_failed",
        }
    }
}

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum ConfigError {
    #[error("Invalid configuration value for {field}: {reason}")]
    #[diagnostic(code(config::invalid_value))]
    InvalidValue { field: &'static str, reason: String },

    #[error("Missing relay component: {0}")]
    #[diagnostic(
        code(config::missing_component),
        help("The relay needs a wake primitive, a foreground launcher and a processing queue.")
    )]
    MissingComponent(&'static str),

    #[error("Failed to parse configuration: {0}")]
    #[diagnostic(
        code(config::parse_failed),
        help("Configuration must be a JSON object. Unknown fields are rejected.")
    )]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
