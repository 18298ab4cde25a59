//! Ledger client façade.
//!
//! # Data Flow
//! ```text
//! ChainClient::deposit(ctx, content, gas)
//!     → method.rs (DEPOSIT, business-scoped)
//!     → protocol::Dispatcher (handshake → assemble → post → envelope)
//!     → payload string
//! ```
//!
//! # Design Decisions
//! - One inherent method per remote operation, mirrored by the `LedgerApi` trait
//! - Numeric arguments travel as decimal strings
//! - Payloads are returned verbatim; see `helpers` for decoding utilities

pub mod api;
pub mod chain;
pub mod method;

pub use api::LedgerApi;
pub use chain::{ChainClient, ChainClientBuilder};
pub use method::LedgerMethod;
