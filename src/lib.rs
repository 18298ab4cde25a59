//! Client SDK for a permissioned ledger's contract REST service.
//!
//! Every call is authenticated by a fresh handshake: the access id and a
//! millisecond timestamp are signed with the account's RSA key and exchanged
//! for a short-lived token, which then accompanies the actual call.

pub mod client;
pub mod config;
pub mod crypto;
pub mod error;
pub mod helpers;
pub mod observability;
pub mod protocol;
pub mod transport;

pub use client::{ChainClient, ChainClientBuilder, LedgerApi, LedgerMethod};
pub use config::{ChainConfig, SdkConfig, TransportConfig};
pub use crypto::{DigestAlgorithm, MessageSigner, RsaSigner};
pub use error::{ChainError, ChainResult};
pub use protocol::{with_param, CallOption, ParamValue};
pub use transport::{CallContext, HttpExecutor, RequestExecutor};
