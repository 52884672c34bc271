//! Secret types.
//!
//! A [`SecretSpec`] is the plaintext side, loaded once per run. A
//! [`SealedSecret`] is its ciphertext for one repository key.

use std::fmt;

use zeroize::Zeroizing;

/// A named plaintext value to provision into every repository.
#[derive(Clone)]
pub struct SecretSpec {
    name: String,
    plain_value: Zeroizing<String>,
}

impl SecretSpec {
    /// Create a new secret spec
    pub fn new(name: impl Into<String>, plain_value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            plain_value: Zeroizing::new(plain_value.into()),
        }
    }

    /// Secret name as it appears in the repository
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Plaintext value
    pub fn plain_value(&self) -> &str {
        &self.plain_value
    }
}

impl fmt::Debug for SecretSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretSpec")
            .field("name", &self.name)
            .field("plain_value", &"<redacted>")
            .finish()
    }
}

/// A secret sealed against one repository's public key.
///
/// Only [`PublicKey::seal_secret`](super::PublicKey::seal_secret) builds these,
/// so `key_id` always names the key that produced `ciphertext`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedSecret {
    name: String,
    ciphertext: Vec<u8>,
    key_id: String,
}

impl SealedSecret {
    pub(super) fn new(name: String, ciphertext: Vec<u8>, key_id: String) -> Self {
        Self {
            name,
            ciphertext,
            key_id,
        }
    }

    /// Secret name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw sealed bytes
    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// Identifier of the key used to seal
    pub fn key_id(&self) -> &str {
        &self.key_id
    }
}

impl fmt::Display for SealedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
