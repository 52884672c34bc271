//! Repository public key.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use super::{SealedSecret, SecretSpec};
use crate::core::cipher::Cipher;
use crate::error::{CryptoError, PublishError};

/// A repository's Actions public key, fetched once per repository per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    key_id: String,
    key_bytes: Vec<u8>,
}

impl PublicKey {
    /// Create a key from its identifier and raw bytes
    pub fn new(key_id: impl Into<String>, key_bytes: Vec<u8>) -> Self {
        Self {
            key_id: key_id.into(),
            key_bytes,
        }
    }

    /// Decode a key as sent on the wire (standard base64).
    ///
    /// # Errors
    ///
    /// Returns `PublishError::Protocol` if the id or key is empty or the key
    /// is not valid base64.
    pub fn from_base64(key_id: &str, key: &str) -> Result<Self, PublishError> {
        if key_id.is_empty() {
            return Err(PublishError::protocol("public key response has empty key_id"));
        }
        if key.is_empty() {
            return Err(PublishError::protocol("public key response has empty key"));
        }
        let key_bytes = BASE64
            .decode(key)
            .map_err(|e| PublishError::protocol(format!("public key is not valid base64: {}", e)))?;

        Ok(Self::new(key_id, key_bytes))
    }

    /// Opaque key identifier, echoed back on upload
    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    /// Raw key material
    pub fn key_bytes(&self) -> &[u8] {
        &self.key_bytes
    }

    /// Seal one secret against this key.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError` if the cipher rejects the key.
    pub fn seal_secret<C>(&self, cipher: &C, spec: &SecretSpec) -> Result<SealedSecret, CryptoError>
    where
        C: Cipher + ?Sized,
    {
        let ciphertext = cipher.seal(spec.plain_value().as_bytes(), &self.key_bytes)?;
        Ok(SealedSecret::new(
            spec.name().to_string(),
            ciphertext,
            self.key_id.clone(),
        ))
    }
}
