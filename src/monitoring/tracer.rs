/*!
 * Structured Tracing
 * Subscriber setup and per-firing spans using the tracing crate
 *
 * Features:
 * - Trace ID per firing for correlating relay and worker logs
 * - JSON-formatted logs for structured parsing
 * - Slow-handoff warnings, since the OS may penalise slow receivers
 */

use crate::config::RelayConfig;
use crate::core::limits::SLOW_HANDOFF_THRESHOLD;
use crate::core::types::AlarmId;
use std::time::Instant;
use tracing::{debug, info, span, warn, Level};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
    EnvFilter,
};
use uuid::Uuid;

/// Environment variable that switches the subscriber to JSON output
pub const TRACE_JSON_ENV: &str = "ALARM_RELAY_TRACE_JSON";

/// Output format of the installed subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceFormat {
    Compact,
    Json,
}

impl TraceFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            TraceFormat::Json
        } else {
            TraceFormat::Compact
        }
    }
}

/// Initialize structured tracing from the environment
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - ALARM_RELAY_TRACE_JSON: Enable JSON output (default: false)
///
/// # Panics
///
/// Panics if a global subscriber is already installed. Use
/// [`RelayConfig::init_tracing`] or [`try_init_tracing`] when embedding in a
/// host that may own one.
pub fn init_tracing() {
    if let Err(e) = RelayConfig::from_env().init_tracing() {
        panic!("failed to install tracing subscriber: {}", e);
    }
}

/// Install the subscriber, returning an error if one already exists
pub fn try_init_tracing(format: TraceFormat) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        TraceFormat::Json => {
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_thread_names(true)
                        .with_current_span(true)
                        .with_span_list(true)
                        .with_span_events(FmtSpan::CLOSE),
                )
                .try_init()?;
            info!("Structured tracing initialized with JSON output");
        }
        TraceFormat::Compact => {
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_thread_names(true)
                        .compact(),
                )
                .try_init()?;
            info!("Structured tracing initialized");
        }
    }

    Ok(())
}

/// Generate a unique trace ID for firing correlation
pub fn generate_trace_id() -> String {
    Uuid::new_v4().to_string()
}

/// Span covering one `on_alarm_fired` call
///
/// Records the handoff duration on drop.
pub struct FiringSpan {
    span: tracing::Span,
    start: Instant,
    alarm_id: AlarmId,
    trace_id: String,
}

impl FiringSpan {
    pub fn new(alarm_id: &AlarmId, requires_wake: bool) -> Self {
        let trace_id = generate_trace_id();

        let span = span!(
            Level::DEBUG,
            "alarm_fired",
            trace_id = %trace_id,
            alarm_id = %alarm_id,
            requires_wake = requires_wake,
            duration_us = tracing::field::Empty,
            result = tracing::field::Empty,
            error = tracing::field::Empty,
        );

        Self {
            span,
            start: Instant::now(),
            alarm_id: alarm_id.clone(),
            trace_id,
        }
    }

    pub fn trace_id(&self) -> &str {
        &self.trace_id
    }

    /// Record whether the event reached the processing queue
    pub fn record_result(&self, enqueued: bool) {
        self.span
            .record("result", if enqueued { "enqueued" } else { "lost" });
    }

    pub fn record_error(&self, error: &str) {
        self.span.record("error", error);
    }

    /// Enter the span context
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }
}

impl Drop for FiringSpan {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        let _entered = self.span.enter();
        self.span.record("duration_us", duration.as_micros() as u64);

        if duration > SLOW_HANDOFF_THRESHOLD {
            warn!(
                trace_id = %self.trace_id,
                alarm_id = %self.alarm_id,
                duration_ms = duration.as_millis() as u64,
                slow = true,
                "slow alarm handoff"
            );
        } else {
            debug!(
                trace_id = %self.trace_id,
                alarm_id = %self.alarm_id,
                duration_us = duration.as_micros() as u64,
                "alarm handoff completed"
            );
        }
    }
}
