//! REST client for the Actions secrets endpoints.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use tracing::{debug, error, instrument, warn};

use super::types::{PublicKeyResponse, UploadResult, UploadSecretRequest};
use super::{KeyClient, UploadClient};
use crate::core::config::Settings;
use crate::core::constants;
use crate::core::domain::{Actor, PublicKey, RepositoryTarget, SealedSecret};
use crate::error::{ConfigError, PublishError};

/// Client for the GitHub REST API.
///
/// Holds no credentials; the actor is passed per call. Cloning is cheap and
/// clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http_client: Client,
    api_url: String,
}

impl GithubClient {
    /// Create a new client from runtime settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::HttpClient` if the HTTP client cannot be built.
    pub fn new(settings: &Settings) -> Result<Self, ConfigError> {
        let http_client = Client::builder()
            .user_agent(constants::USER_AGENT)
            .timeout(settings.timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        debug!(api_url = %settings.api_url, "created GitHub client");

        Ok(Self {
            http_client,
            api_url: settings.api_url.clone(),
        })
    }

    fn public_key_url(&self, target: &RepositoryTarget) -> String {
        format!(
            "{}/repos/{}/{}/actions/secrets/public-key",
            self.api_url,
            urlencoding::encode(target.owner()),
            urlencoding::encode(target.name())
        )
    }

    fn secret_url(&self, target: &RepositoryTarget, secret_name: &str) -> String {
        format!(
            "{}/repos/{}/{}/actions/secrets/{}",
            self.api_url,
            urlencoding::encode(target.owner()),
            urlencoding::encode(target.name()),
            urlencoding::encode(secret_name)
        )
    }

    fn request(&self, method: Method, url: String, actor: &Actor) -> RequestBuilder {
        self.http_client
            .request(method, url)
            .bearer_auth(actor.token())
            .header("Accept", constants::ACCEPT)
            .header("X-GitHub-Api-Version", constants::API_VERSION)
    }
}

#[async_trait]
impl KeyClient for GithubClient {
    #[instrument(skip_all, fields(repository = %target))]
    async fn fetch_public_key(
        &self,
        actor: &Actor,
        target: &RepositoryTarget,
    ) -> Result<PublicKey, PublishError> {
        let url = self.public_key_url(target);
        debug!(url = %url, "fetching public key");

        let response = self
            .request(Method::GET, url, actor)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = error_body(response).await;
            return Err(map_github_error(status, &body, target.to_string()));
        }

        let body = response.bytes().await.map_err(map_transport_error)?;
        let key: PublicKeyResponse = serde_json::from_slice(&body).map_err(|e| {
            error!(error = %e, "failed to parse public key response");
            PublishError::protocol(format!("invalid public key response: {}", e))
        })?;

        let key = PublicKey::try_from(key)?;
        debug!(key_id = %key.key_id(), "public key fetched");
        Ok(key)
    }
}

#[async_trait]
impl UploadClient for GithubClient {
    #[instrument(skip_all, fields(repository = %target, secret = %sealed.name()))]
    async fn upload(
        &self,
        actor: &Actor,
        target: &RepositoryTarget,
        sealed: &SealedSecret,
    ) -> Result<UploadResult, PublishError> {
        let url = self.secret_url(target, sealed.name());
        debug!(url = %url, key_id = %sealed.key_id(), "uploading secret");

        let response = self
            .request(Method::PUT, url, actor)
            .json(&UploadSecretRequest::from(sealed))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = error_body(response).await;
            return Err(map_github_error(
                status,
                &body,
                format!("{} secret {}", target, sealed.name()),
            ));
        }

        debug!(status = status.as_u16(), "secret uploaded");
        Ok(UploadResult {
            status: status.as_u16(),
        })
    }
}

/// Read an error response body, falling back to the read failure itself.
async fn error_body(response: reqwest::Response) -> String {
    response.text().await.unwrap_or_else(|e| {
        debug!(error = %e, "failed to read error response body");
        format!("<unreadable body: {}>", e)
    })
}

fn map_transport_error(e: reqwest::Error) -> PublishError {
    if e.is_timeout() {
        warn!("request timed out");
        return PublishError::transport("request timed out");
    }
    warn!(error = %e, "request failed");
    PublishError::transport(e.to_string())
}

/// Map non-success GitHub responses to `PublishError`.
fn map_github_error(status: StatusCode, body: &str, scope: String) -> PublishError {
    let status_code = status.as_u16();

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            warn!(status = status_code, "credential rejected by GitHub");
            PublishError::Auth {
                status: status_code,
            }
        }
        StatusCode::NOT_FOUND => {
            warn!(status = status_code, "not found on GitHub");
            PublishError::NotFound(scope)
        }
        _ => {
            error!(status = status_code, body = %body, "GitHub API error");
            PublishError::protocol(format!("unexpected status {}: {}", status_code, body))
        }
    }
}
