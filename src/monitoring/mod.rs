/*!
 * Monitoring
 * Structured tracing and relay counters
 */

mod stats;
mod tracer;

pub use stats::{AtomicRelayStats, RelayStats};
pub use tracer::{
    generate_trace_id, init_tracing, try_init_tracing, FiringSpan, TraceFormat,
    TRACE_JSON_ENV,
};
