//! Metrics collection.
//!
//! # Metrics
//! - `antchain_requests_total` (counter): round trips by route, outcome
//! - `antchain_request_duration_seconds` (histogram): latency by route
//!
//! # Design Decisions
//! - Emitted through the `metrics` facade; the host application picks
//!   the exporter
//! - One sample per round trip, so a call records two (handshake + call)

use std::time::Duration;

use crate::error::{ChainError, ChainResult};

/// Record one completed round trip.
pub fn record_request(route: &'static str, outcome: &'static str, elapsed: Duration) {
    metrics::counter!("antchain_requests_total", "route" => route, "outcome" => outcome).increment(1);
    metrics::histogram!("antchain_request_duration_seconds", "route" => route)
        .record(elapsed.as_secs_f64());
}

/// Outcome label for a round-trip result.
pub fn outcome<T>(result: &ChainResult<T>) -> &'static str {
    match result {
        Ok(_) => "ok",
        Err(ChainError::Remote { .. }) => "remote_error",
        Err(ChainError::Cancelled) => "cancelled",
        Err(ChainError::DeadlineExceeded) => "deadline_exceeded",
        Err(ChainError::Transport(_)) => "transport_error",
        Err(ChainError::EnvelopeDecode { .. }) => "decode_error",
        Err(_) => "error",
    }
}
