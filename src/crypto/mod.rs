//! Key material and request signing.
//!
//! # Data Flow
//! ```text
//! PEM (file, env var, or in-memory block)
//!     → key.rs (PKCS#1 / PKCS#8 decode)
//!     → signer.rs (RsaSigner, PKCS#1 v1.5)
//!     → handshake (sign accessId + time)
//! ```
//!
//! # Security Constraints
//! - Private keys are never logged or serialized
//! - Signers are immutable after construction and shared via Arc

pub mod digest;
pub mod key;
pub mod signer;

pub use digest::DigestAlgorithm;
pub use key::{load_private_key_file, load_private_key_pem, PRIVATE_KEY_ENV_VAR};
pub use signer::{verify_signature, MessageSigner, RsaSigner};

#[cfg(test)]
pub(crate) fn test_private_key() -> rsa::RsaPrivateKey {
    use rand_chacha::rand_core::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use std::sync::OnceLock;

    static KEY: OnceLock<rsa::RsaPrivateKey> = OnceLock::new();
    KEY.get_or_init(|| {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        rsa::RsaPrivateKey::new(&mut rng, 1024).unwrap()
    })
    .clone()
}
