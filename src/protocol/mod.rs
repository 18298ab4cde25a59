//! Authenticated-call protocol.
//!
//! # Data Flow
//! ```text
//! caller options
//!     → handshake.rs (sign accessId+time, POST shakeHand → token)
//!     → call.rs (options ∪ identity/routing/token fields)
//!     → params.rs (JSON body)
//!     → transport (POST chainCall / chainCallForBiz)
//!     → envelope.rs (success → payload, failure → RemoteError)
//! ```
//!
//! # Design Decisions
//! - A full handshake precedes every call; no token outlives one request
//! - Routes are a closed enum, never free-form strings
//! - Protocol fields are written after caller options and always win

pub mod call;
pub mod dispatch;
pub mod envelope;
pub mod handshake;
pub mod params;
pub mod route;

pub use call::{assemble_params, new_order_id, CallKind};
pub use dispatch::Dispatcher;
pub use envelope::{Envelope, CONTENT_TYPE_JSON};
pub use handshake::handshake_params;
pub use params::{with_param, CallOption, CallParams, ParamValue};
pub use route::Route;
