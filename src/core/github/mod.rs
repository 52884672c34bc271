//! GitHub Actions secrets API.
//!
//! Two narrow seams are exposed as traits so the publish pipeline can be
//! driven by any implementation:
//!
//! - [`KeyClient`]: fetch a repository's current public key
//! - [`UploadClient`]: upload one sealed secret
//!
//! [`GithubClient`] implements both over the REST API.

use async_trait::async_trait;

use crate::core::domain::{Actor, PublicKey, RepositoryTarget, SealedSecret};
use crate::error::PublishError;

mod client;
mod types;

pub use client::GithubClient;
pub use types::{PublicKeyResponse, UploadResult, UploadSecretRequest};

/// Fetches repository public keys.
#[async_trait]
pub trait KeyClient: Send + Sync {
    /// Fetch the current public key for one repository.
    ///
    /// # Errors
    ///
    /// - `PublishError::Auth` if the credential is rejected
    /// - `PublishError::NotFound` if the repository is missing or inaccessible
    /// - `PublishError::Protocol` if the response is malformed
    /// - `PublishError::Transport` on network failure or timeout
    async fn fetch_public_key(
        &self,
        actor: &Actor,
        target: &RepositoryTarget,
    ) -> Result<PublicKey, PublishError>;
}

/// Uploads sealed secrets.
#[async_trait]
pub trait UploadClient: Send + Sync {
    /// Create or overwrite one secret in one repository.
    ///
    /// # Errors
    ///
    /// Same conditions as [`KeyClient::fetch_public_key`], scoped to the
    /// secret's endpoint.
    async fn upload(
        &self,
        actor: &Actor,
        target: &RepositoryTarget,
        sealed: &SealedSecret,
    ) -> Result<UploadResult, PublishError>;
}

#[async_trait]
impl<T: KeyClient + ?Sized> KeyClient for &T {
    async fn fetch_public_key(
        &self,
        actor: &Actor,
        target: &RepositoryTarget,
    ) -> Result<PublicKey, PublishError> {
        (**self).fetch_public_key(actor, target).await
    }
}

#[async_trait]
impl<T: UploadClient + ?Sized> UploadClient for &T {
    async fn upload(
        &self,
        actor: &Actor,
        target: &RepositoryTarget,
        sealed: &SealedSecret,
    ) -> Result<UploadResult, PublishError> {
        (**self).upload(actor, target, sealed).await
    }
}
