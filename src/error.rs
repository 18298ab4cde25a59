//! Error taxonomy for the authenticated-call protocol.
//!
//! Every failure surfaces to the caller; nothing in the crate retries.

use thiserror::Error;

pub use crate::config::loader::ConfigError;

/// Errors raised while producing a signature.
#[derive(Debug, Error)]
pub enum SigningError {
    /// The digest is not provided by the crypto backend.
    #[error("crypto: requested hash function ({0}) is unavailable")]
    UnsupportedDigest(String),

    /// The RSA primitive rejected the key or the digest.
    #[error("rsa signing failed: {0}")]
    Rsa(#[from] rsa::Error),
}

/// Errors raised while loading private key material.
#[derive(Debug, Error)]
pub enum KeyError {
    /// Key file could not be read.
    #[error("failed to read key file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Input contained no recognisable PEM block.
    #[error("invalid rsa private key: no PEM block found")]
    NoPemBlock,

    /// A PEM block was truncated or had invalid base64.
    #[error("malformed PEM: {0}")]
    MalformedPem(String),

    /// First PEM block is not an RSA private key.
    #[error("unsupported PEM block: {0}")]
    UnsupportedBlock(String),

    /// PKCS#1 DER could not be decoded.
    #[error("invalid PKCS#1 private key: {0}")]
    Pkcs1(#[from] rsa::pkcs1::Error),

    /// PKCS#8 DER could not be decoded or is not RSA.
    #[error("invalid PKCS#8 private key: {0}")]
    Pkcs8(#[from] rsa::pkcs8::Error),

    /// Environment variable carrying the PEM is missing.
    #[error("environment variable {0} not set")]
    MissingEnv(String),

    /// Environment variable is set but not valid UTF-8.
    #[error("environment variable {0} is not valid UTF-8")]
    NonUnicodeEnv(String),

    /// Neither a key path nor an inline PEM was configured.
    #[error("no private key configured: set chain.access_key or {0}")]
    NoKeySource(String),
}

/// Errors raised by a request executor.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The reqwest client failed to send or read.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The reqwest client could not be constructed.
    #[error("failed to build http client: {0}")]
    Build(String),

    /// Failure reported by a custom executor.
    #[error("{0}")]
    Other(String),
}

/// Errors surfaced by every client operation.
#[derive(Debug, Error)]
pub enum ChainError {
    #[error("signing error: {0}")]
    Signing(#[from] SigningError),

    #[error("key error: {0}")]
    Key(#[from] KeyError),

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The call context was cancelled before the round trip finished.
    #[error("call cancelled")]
    Cancelled,

    /// The call context deadline passed before the round trip finished.
    #[error("call deadline exceeded")]
    DeadlineExceeded,

    /// A parameter could not be represented on the wire.
    #[error("cannot encode parameter {key}: {reason}")]
    EnvelopeEncode { key: String, reason: String },

    /// The response body is not a JSON object.
    #[error("malformed response envelope (http {status}): {reason}")]
    EnvelopeDecode { status: u16, reason: String },

    /// The server answered with `success = false`.
    #[error("antchain: {code} | {message}")]
    Remote { code: String, message: String },

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A payload helper received malformed input.
    #[error("invalid payload: {0}")]
    Payload(String),
}

impl ChainError {
    /// Returns the remote code when the server rejected the call.
    pub fn remote_code(&self) -> Option<&str> {
        match self {
            ChainError::Remote { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Returns true when the call context ended the call.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, ChainError::Cancelled | ChainError::DeadlineExceeded)
    }
}

/// Result type for client operations.
pub type ChainResult<T> = Result<T, ChainError>;
