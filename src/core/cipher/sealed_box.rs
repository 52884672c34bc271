//! Sealed-box backend implementation.
//!
//! Each call generates an ephemeral X25519 key pair, so sealing the same
//! plaintext twice yields different ciphertexts.

use crypto_box::aead::OsRng;
use tracing::trace;

use super::Cipher;
use crate::error::CryptoError;

/// Length of an X25519 public key.
pub const KEY_LEN: usize = 32;

/// Bytes added to the plaintext: ephemeral public key plus Poly1305 tag.
pub const SEAL_OVERHEAD: usize = KEY_LEN + 16;

/// Anonymous sealed-box cipher.
#[derive(Debug, Clone, Copy, Default)]
pub struct SealedBox;

impl Cipher for SealedBox {
    fn name(&self) -> &'static str {
        "sealed-box"
    }

    fn seal(&self, plaintext: &[u8], public_key: &[u8]) -> Result<Vec<u8>, CryptoError> {
        trace!(plaintext_len = plaintext.len(), "sealing");

        let key_bytes: [u8; KEY_LEN] = public_key
            .try_into()
            .map_err(|_| CryptoError::InvalidKeyLength(public_key.len()))?;
        let recipient = crypto_box::PublicKey::from(key_bytes);

        let ciphertext = recipient
            .seal(&mut OsRng, plaintext)
            .map_err(|e| CryptoError::SealFailed(format!("{}", e)))?;

        trace!(ciphertext_len = ciphertext.len(), "sealed");
        Ok(ciphertext)
    }
}
