//! PEM private key loading.

use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs8::DecodePrivateKey;
use rsa::RsaPrivateKey;
use rustls_pemfile::Item;
use std::path::Path;

use crate::error::KeyError;

/// Environment variable holding an inline PEM private key.
pub const PRIVATE_KEY_ENV_VAR: &str = "ANTCHAIN_ACCESS_KEY_PEM";

/// Decode the first PEM block as an RSA private key.
///
/// `RSA PRIVATE KEY` blocks are PKCS#1, `PRIVATE KEY` blocks are PKCS#8.
pub fn load_private_key_pem(pem: &[u8]) -> Result<RsaPrivateKey, KeyError> {
    let mut reader = pem;
    let item = rustls_pemfile::read_one(&mut reader)
        .map_err(|e| KeyError::MalformedPem(e.to_string()))?;

    match item {
        None => Err(KeyError::NoPemBlock),
        Some(Item::Pkcs1Key(der)) => Ok(RsaPrivateKey::from_pkcs1_der(der.secret_pkcs1_der())?),
        Some(Item::Pkcs8Key(der)) => Ok(RsaPrivateKey::from_pkcs8_der(der.secret_pkcs8_der())?),
        Some(Item::X509Certificate(_)) => Err(KeyError::UnsupportedBlock("CERTIFICATE".to_string())),
        Some(Item::Sec1Key(_)) => Err(KeyError::UnsupportedBlock("EC PRIVATE KEY".to_string())),
        Some(_) => Err(KeyError::UnsupportedBlock("non-key block".to_string())),
    }
}

/// Read a PEM file (relative paths resolve against the working directory).
pub fn load_private_key_file(path: impl AsRef<Path>) -> Result<RsaPrivateKey, KeyError> {
    let path = path.as_ref();
    let io_err = |source| KeyError::Io {
        path: path.display().to_string(),
        source,
    };

    let key_path = std::path::absolute(path).map_err(io_err)?;
    let pem = std::fs::read(&key_path).map_err(io_err)?;

    tracing::debug!(path = %key_path.display(), "Loading private key");
    load_private_key_pem(&pem)
}
