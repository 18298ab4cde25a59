//! Handshake request construction.
//!
//! The handshake proves possession of the access key: the client signs
//! `accessId ++ time` (no separator) with SHA-256 / RSA PKCS#1 v1.5 and
//! sends the hex signature as `secret`. The envelope payload is the
//! session token.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::crypto::{DigestAlgorithm, MessageSigner};
use crate::error::ChainResult;
use crate::protocol::params::CallParams;

/// Wall-clock milliseconds since the Unix epoch.
pub fn current_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

/// Build the signed handshake parameters for `timestamp_ms`.
pub fn handshake_params(
    access_id: &str,
    signer: &dyn MessageSigner,
    timestamp_ms: u128,
) -> ChainResult<CallParams> {
    let time = timestamp_ms.to_string();
    let message = format!("{}{}", access_id, time);
    let signature = signer.sign(DigestAlgorithm::Sha256, message.as_bytes())?;

    let mut params = CallParams::new();
    params.set("accessId", access_id);
    params.set("time", time);
    params.set("secret", hex::encode(signature));
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{test_private_key, verify_signature, RsaSigner};
    use crate::error::{ChainError, SigningError};

    struct FailingSigner;

    impl MessageSigner for FailingSigner {
        fn sign(&self, _: DigestAlgorithm, _: &[u8]) -> Result<Vec<u8>, SigningError> {
            Err(SigningError::UnsupportedDigest("SHA-256".to_string()))
        }

        fn algorithm(&self) -> &str {
            "failing"
        }
    }

    #[test]
    fn test_params_shape() {
        let signer = RsaSigner::new(test_private_key());
        let params = handshake_params("access-1", &signer, 1_700_000_000_123).unwrap();

        assert_eq!(params.len(), 3);
        assert_eq!(params.get_str("accessId"), Some("access-1"));
        assert_eq!(params.get_str("time"), Some("1700000000123"));
    }

    #[test]
    fn test_secret_signs_access_id_and_time() {
        let signer = RsaSigner::new(test_private_key());
        let params = handshake_params("access-1", &signer, 1_700_000_000_123).unwrap();

        let secret = hex::decode(params.get_str("secret").unwrap()).unwrap();
        verify_signature(
            &signer.public_key(),
            DigestAlgorithm::Sha256,
            b"access-11700000000123",
            &secret,
        )
        .unwrap();
    }

    #[test]
    fn test_signing_failure_propagates() {
        let err = handshake_params("access-1", &FailingSigner, 1).unwrap_err();
        assert!(matches!(err, ChainError::Signing(SigningError::UnsupportedDigest(_))));
    }

    #[test]
    fn test_current_millis_is_recent() {
        // 2020-01-01T00:00:00Z
        assert!(current_millis() > 1_577_836_800_000);
    }
}
