//! Cryptographic operations.
//!
//! Provides the sealing abstraction and its sealed-box implementation.
//!
//! ## Backends
//!
//! - **sealed box**: libsodium-compatible `crypto_box_seal` (X25519 +
//!   XSalsa20-Poly1305). This is the format GitHub expects for Actions secrets.
//!
//! Sealing is anonymous: anyone holding the public key can seal, only the
//! holder of the matching private key can open.

use crate::error::CryptoError;

mod sealed_box;

pub use sealed_box::{SealedBox, KEY_LEN, SEAL_OVERHEAD};

/// Sealing backend trait.
///
/// Implementations are stateless and safe to call concurrently.
pub trait Cipher: Send + Sync {
    /// Seal plaintext for the holder of `public_key`.
    ///
    /// # Arguments
    ///
    /// * `plaintext` - Bytes to seal
    /// * `public_key` - Raw recipient public key
    ///
    /// # Errors
    ///
    /// Returns `CryptoError` if the key is malformed or sealing fails.
    fn seal(&self, plaintext: &[u8], public_key: &[u8]) -> Result<Vec<u8>, CryptoError>;

    /// Backend name for display/logging.
    fn name(&self) -> &'static str;
}

impl<T: Cipher + ?Sized> Cipher for &T {
    fn seal(&self, plaintext: &[u8], public_key: &[u8]) -> Result<Vec<u8>, CryptoError> {
        (**self).seal(plaintext, public_key)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Seal plaintext with the default sealed-box backend.
///
/// This is a convenience wrapper around `SealedBox::seal`.
///
/// # Errors
///
/// Returns `CryptoError` if the key is not a 32-byte X25519 public key.
pub fn seal(plaintext: &[u8], public_key: &[u8]) -> Result<Vec<u8>, CryptoError> {
    SealedBox.seal(plaintext, public_key)
}
