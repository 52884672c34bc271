//! Secret publishing pipeline.
//!
//! For every repository, independently:
//!
//! 1. fetch the repository's public key (failure abandons the repository)
//! 2. seal each secret against that key
//! 3. upload each sealed secret
//!
//! Repositories run concurrently up to a limit, and a slow repository never
//! holds back the ones queued after it; secrets within a repository are
//! uploaded concurrently. A failure only affects its own secret or, for
//! the key fetch, its own repository. Every outcome is collected and returned.

mod report;

pub use report::{PublishSummary, RepositoryOutcome, RepositoryReport, SecretOutcome, SecretReport};

use futures::future::join_all;
use futures::stream::{self, StreamExt};
use tracing::{debug, info, instrument, warn};

use crate::core::cipher::Cipher;
use crate::core::constants;
use crate::core::domain::{Actor, PublicKey, RepositoryTarget, SecretSpec};
use crate::core::github::{KeyClient, UploadClient};

/// Drives key fetch, sealing, and upload across repositories.
#[derive(Debug)]
pub struct Publisher<K, U, C> {
    keys: K,
    uploads: U,
    cipher: C,
    concurrency: usize,
}

impl<K, U, C> Publisher<K, U, C>
where
    K: KeyClient,
    U: UploadClient,
    C: Cipher,
{
    /// Create a publisher with the default concurrency limit.
    pub fn new(keys: K, uploads: U, cipher: C) -> Self {
        Self {
            keys,
            uploads,
            cipher,
            concurrency: constants::DEFAULT_CONCURRENCY,
        }
    }

    /// Set how many repositories are published at once.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Publish every secret to every repository.
    ///
    /// Never fails as a whole: each repository's outcome, successful or not,
    /// is in the returned summary, in the same order as `repositories`.
    pub async fn publish(
        &self,
        actor: &Actor,
        repositories: &[RepositoryTarget],
        secrets: &[SecretSpec],
    ) -> PublishSummary {
        info!(
            repositories = repositories.len(),
            secrets = secrets.len(),
            cipher = self.cipher.name(),
            "publishing secrets"
        );

        let mut indexed = stream::iter(repositories.iter().enumerate())
            .map(|(index, target)| async move {
                (index, self.publish_repository(actor, target, secrets).await)
            })
            .buffer_unordered(self.concurrency)
            .collect::<Vec<_>>()
            .await;
        indexed.sort_unstable_by_key(|(index, _)| *index);
        let reports = indexed.into_iter().map(|(_, report)| report).collect();

        let summary = PublishSummary { reports };
        info!(
            succeeded = summary.succeeded(),
            failed = summary.failed(),
            "publish finished"
        );
        summary
    }

    /// Publish every secret to one repository.
    #[instrument(skip_all, fields(repository = %target))]
    pub async fn publish_repository(
        &self,
        actor: &Actor,
        target: &RepositoryTarget,
        secrets: &[SecretSpec],
    ) -> RepositoryReport {
        let key = match self.keys.fetch_public_key(actor, target).await {
            Ok(key) => key,
            Err(e) => {
                warn!(error = %e, "key fetch failed, skipping repository");
                return RepositoryReport {
                    target: target.clone(),
                    outcome: RepositoryOutcome::KeyFetchFailed(e),
                };
            }
        };

        let uploads = secrets
            .iter()
            .map(|spec| self.seal_and_upload(actor, target, &key, spec));
        let reports = join_all(uploads).await;

        RepositoryReport {
            target: target.clone(),
            outcome: RepositoryOutcome::Completed {
                key_id: key.key_id().to_string(),
                secrets: reports,
            },
        }
    }

    async fn seal_and_upload(
        &self,
        actor: &Actor,
        target: &RepositoryTarget,
        key: &PublicKey,
        spec: &SecretSpec,
    ) -> SecretReport {
        let sealed = match key.seal_secret(&self.cipher, spec) {
            Ok(sealed) => sealed,
            Err(e) => {
                warn!(secret = spec.name(), error = %e, "seal failed");
                return SecretReport::failed(spec.name(), e.into());
            }
        };

        match self.uploads.upload(actor, target, &sealed).await {
            Ok(result) => {
                debug!(secret = spec.name(), status = result.status, "uploaded");
                SecretReport::uploaded(spec.name(), result.status)
            }
            Err(e) => {
                warn!(secret = spec.name(), error = %e, "upload failed");
                SecretReport::failed(spec.name(), e)
            }
        }
    }
}
