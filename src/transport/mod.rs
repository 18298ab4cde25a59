//! Transport subsystem.
//!
//! # Data Flow
//! ```text
//! protocol (encoded envelope + headers)
//!     → context.rs (cancellation / deadline race)
//!     → executor.rs (RequestExecutor trait)
//!     → http.rs (pooled reqwest client, default)
//!     → status + body back to the envelope codec
//! ```
//!
//! # Design Decisions
//! - The executor is injected; pooling, TLS and timeouts live behind it
//! - No retries at this layer; callers own retry policy
//! - Cancellation is surfaced in preference to a racing transport error

pub mod context;
pub mod executor;
pub mod http;

#[cfg(test)]
pub(crate) mod mock;

pub use context::CallContext;
pub use executor::{HttpRequest, HttpResponse, RequestExecutor};
pub use http::HttpExecutor;
