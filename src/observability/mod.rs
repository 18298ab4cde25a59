//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! protocol::dispatch produces:
//!     → tracing events (route, method, order id, status, elapsed)
//!     → metrics.rs (request counters, latency histograms)
//!
//! Consumers:
//!     → logging.rs subscriber installed by the binary
//!     → any `metrics` recorder installed by the embedding application
//! ```
//!
//! # Design Decisions
//! - The library never installs a subscriber or recorder itself
//! - Tokens, signatures and keys are never logged
//! - Metrics are no-ops until a recorder is installed

pub mod logging;
pub mod metrics;
