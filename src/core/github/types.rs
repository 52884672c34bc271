//! Wire types for the Actions secrets endpoints.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::core::domain::{PublicKey, SealedSecret};
use crate::error::PublishError;

/// Body of `GET /repos/{owner}/{repo}/actions/secrets/public-key`.
#[derive(Debug, Clone, Deserialize)]
pub struct PublicKeyResponse {
    pub key_id: String,
    pub key: String,
}

impl TryFrom<PublicKeyResponse> for PublicKey {
    type Error = PublishError;

    fn try_from(response: PublicKeyResponse) -> Result<Self, Self::Error> {
        PublicKey::from_base64(&response.key_id, &response.key)
    }
}

/// Body of `PUT /repos/{owner}/{repo}/actions/secrets/{secret_name}`.
#[derive(Debug, Clone, Serialize)]
pub struct UploadSecretRequest<'a> {
    pub encrypted_value: String,
    pub key_id: &'a str,
}

impl<'a> From<&'a SealedSecret> for UploadSecretRequest<'a> {
    fn from(sealed: &'a SealedSecret) -> Self {
        Self {
            encrypted_value: BASE64.encode(sealed.ciphertext()),
            key_id: sealed.key_id(),
        }
    }
}

/// Outcome of a successful upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadResult {
    /// HTTP status returned by the endpoint (201 created, 204 updated)
    pub status: u16,
}
