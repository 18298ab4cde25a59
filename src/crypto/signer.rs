//! Message signing.

use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};
use std::env::VarError;
use std::path::Path;

use crate::crypto::digest::DigestAlgorithm;
use crate::crypto::key::{load_private_key_file, load_private_key_pem, PRIVATE_KEY_ENV_VAR};
use crate::error::{KeyError, SigningError};

/// Produces signatures over arbitrary byte payloads.
///
/// Implementations are sync; signing is CPU-bound. A KMS-backed signer
/// should block inside `spawn_blocking` on its own.
pub trait MessageSigner: Send + Sync {
    /// Hash `message` with `digest` and sign the result.
    fn sign(&self, digest: DigestAlgorithm, message: &[u8]) -> Result<Vec<u8>, SigningError>;

    /// Algorithm identifier string (e.g. "rsa-pkcs1v15").
    fn algorithm(&self) -> &str;
}

/// RSA PKCS#1 v1.5 signer.
///
/// Signing draws on the thread-local CSPRNG for blinding only; the
/// digest itself is deterministic.
#[derive(Clone)]
pub struct RsaSigner {
    private_key: RsaPrivateKey,
}

impl RsaSigner {
    pub fn new(private_key: RsaPrivateKey) -> Self {
        Self { private_key }
    }

    /// Create a signer from a PEM block (PKCS#1 or PKCS#8).
    pub fn from_pem(pem: &[u8]) -> Result<Self, KeyError> {
        load_private_key_pem(pem).map(Self::new)
    }

    /// Create a signer from a PEM file on disk.
    pub fn from_pem_file(path: impl AsRef<Path>) -> Result<Self, KeyError> {
        load_private_key_file(path).map(Self::new)
    }

    /// Load the PEM block from `ANTCHAIN_ACCESS_KEY_PEM`.
    pub fn from_env() -> Result<Self, KeyError> {
        let pem = std::env::var(PRIVATE_KEY_ENV_VAR).map_err(|e| match e {
            VarError::NotPresent => KeyError::MissingEnv(PRIVATE_KEY_ENV_VAR.to_string()),
            VarError::NotUnicode(_) => KeyError::NonUnicodeEnv(PRIVATE_KEY_ENV_VAR.to_string()),
        })?;
        Self::from_pem(pem.as_bytes())
    }

    /// Public counterpart, for verification.
    pub fn public_key(&self) -> RsaPublicKey {
        self.private_key.to_public_key()
    }

    /// Modulus size in bits.
    pub fn key_bits(&self) -> usize {
        self.private_key.size() * 8
    }
}

impl MessageSigner for RsaSigner {
    fn sign(&self, digest: DigestAlgorithm, message: &[u8]) -> Result<Vec<u8>, SigningError> {
        let hashed = digest.digest(message);
        let mut rng = rand::thread_rng();
        let signature = self
            .private_key
            .sign_with_rng(&mut rng, digest.padding(), &hashed)?;
        Ok(signature)
    }

    fn algorithm(&self) -> &str {
        "rsa-pkcs1v15"
    }
}

impl std::fmt::Debug for RsaSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RsaSigner")
            .field("algorithm", &self.algorithm())
            .field("key_bits", &self.key_bits())
            .finish()
    }
}

/// Check a PKCS#1 v1.5 signature against `public_key`.
pub fn verify_signature(
    public_key: &RsaPublicKey,
    digest: DigestAlgorithm,
    message: &[u8],
    signature: &[u8],
) -> Result<(), SigningError> {
    let hashed = digest.digest(message);
    public_key.verify(digest.padding(), &hashed, signature)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::test_private_key;

    fn test_signer() -> RsaSigner {
        RsaSigner::new(test_private_key())
    }

    #[test]
    fn test_signature_verifies() {
        let signer = test_signer();
        let sig = signer.sign(DigestAlgorithm::Sha256, b"verify me").unwrap();
        verify_signature(&signer.public_key(), DigestAlgorithm::Sha256, b"verify me", &sig).unwrap();
    }

    #[test]
    fn test_repeated_signatures_both_verify() {
        let signer = test_signer();
        let public_key = signer.public_key();
        let sig1 = signer.sign(DigestAlgorithm::Sha256, b"access1700000000000").unwrap();
        let sig2 = signer.sign(DigestAlgorithm::Sha256, b"access1700000000000").unwrap();

        verify_signature(&public_key, DigestAlgorithm::Sha256, b"access1700000000000", &sig1).unwrap();
        verify_signature(&public_key, DigestAlgorithm::Sha256, b"access1700000000000", &sig2).unwrap();
    }

    #[test]
    fn test_signature_length_matches_modulus() {
        let signer = test_signer();
        let sig = signer.sign(DigestAlgorithm::Sha512, b"data").unwrap();
        assert_eq!(sig.len(), signer.key_bits() / 8);
    }

    #[test]
    fn test_tampered_message_fails() {
        let signer = test_signer();
        let sig = signer.sign(DigestAlgorithm::Sha256, b"original").unwrap();
        assert!(verify_signature(&signer.public_key(), DigestAlgorithm::Sha256, b"tampered", &sig).is_err());
    }

    #[test]
    fn test_digest_mismatch_fails() {
        let signer = test_signer();
        let sig = signer.sign(DigestAlgorithm::Sha256, b"msg").unwrap();
        assert!(verify_signature(&signer.public_key(), DigestAlgorithm::Sha384, b"msg", &sig).is_err());
    }

    #[test]
    fn test_debug_hides_key() {
        let rendered = format!("{:?}", test_signer());
        assert!(rendered.contains("rsa-pkcs1v15"));
        assert!(rendered.contains("1024"));
    }
}
