//! Pure helpers for preparing call parameters and reading payloads.

use alloy::primitives::U256;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

use crate::error::{ChainError, ChainResult};
use crate::protocol::ParamValue;

/// On-chain identity of a chain account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub data: String,
}

impl From<Identity> for ParamValue {
    fn from(identity: Identity) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert("data".to_string(), ParamValue::Str(identity.data));
        ParamValue::Object(fields)
    }
}

/// Identity of the account `name`: base64 of SHA-256(name).
pub fn identity_by_name(name: &str) -> Identity {
    Identity {
        data: STANDARD.encode(Sha256::digest(name.as_bytes())),
    }
}

/// Token id (uint256) from a hex digest, typically an MD5.
///
/// An optional `0x` prefix is accepted.
pub fn token_id(hash: &str) -> ChainResult<U256> {
    let digits = hash.strip_prefix("0x").unwrap_or(hash);
    if digits.is_empty() {
        return Err(ChainError::Payload("empty token hash".to_string()));
    }
    U256::from_str_radix(digits, 16)
        .map_err(|e| ChainError::Payload(format!("invalid token hash '{}': {}", hash, e)))
}

/// Decode a base64 contract output into lowercase hex.
pub fn parse_output(data: &str) -> ChainResult<String> {
    let bytes = STANDARD
        .decode(data)
        .map_err(|e| ChainError::Payload(format!("output is not base64: {}", e)))?;
    Ok(hex::encode(bytes))
}
