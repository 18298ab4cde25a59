//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the client.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the ledger client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SdkConfig {
    /// Ledger identity and routing.
    pub chain: ChainConfig,

    /// HTTP executor settings.
    pub transport: TransportConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Identity and routing for the remote ledger.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ChainConfig {
    /// Ledger (chain) identifier.
    pub biz_id: String,

    /// Service base URL, e.g. "https://rest.baas.alipay.com".
    pub endpoint: String,

    /// Tenant identifier.
    pub tenant_id: String,

    /// Access identifier signed during the handshake.
    pub access_id: String,

    /// Path to the PEM-encoded private key.
    pub access_key: String,

    /// Chain account used by business-scoped calls.
    pub account: String,

    /// Managed-key identifier of the chain account.
    #[serde(rename = "mykmskey_id")]
    pub my_kms_key_id: String,
}

/// HTTP executor configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct TransportConfig {
    /// Connection establishment timeout in seconds.
    pub connect_timeout_secs: u64,

    /// TCP keep-alive interval in seconds.
    pub keep_alive_secs: u64,

    /// Idle pooled connection timeout in seconds.
    pub idle_timeout_secs: u64,

    /// Maximum idle connections kept per host.
    pub max_idle_per_host: usize,

    /// Optional ceiling on a single round trip, in seconds.
    pub request_timeout_secs: Option<u64>,

    /// Skip TLS certificate verification.
    ///
    /// Changes the trust model of every round trip. Off unless set.
    pub danger_accept_invalid_certs: bool,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 30,
            keep_alive_secs: 60,
            idle_timeout_secs: 60,
            max_idle_per_host: 1000,
            request_timeout_secs: None,
            danger_accept_invalid_certs: false,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Record request counters and latency histograms.
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
        }
    }
}
