//! Publish command.

use std::path::Path;

use tracing::debug;

use crate::cli::output;
use crate::core::cipher::SealedBox;
use crate::core::config::{Config, Settings};
use crate::core::github::GithubClient;
use crate::core::publish::{PublishSummary, Publisher, RepositoryOutcome, SecretOutcome};
use crate::error::{Error, Result};

/// Load configuration, publish, and print the per-secret report.
///
/// Returns `Error::Failed` if any repository did not fully succeed.
pub fn execute(assets: &Path, token_env: &str, settings: &Settings) -> Result<()> {
    let config = Config::load(assets, token_env)?;

    if config.repositories.is_empty() {
        output::warn("no repositories configured");
        return Ok(());
    }
    if config.secrets.is_empty() {
        output::warn("no secrets configured, only public keys will be fetched");
    }

    let client = GithubClient::new(settings)?;
    let publisher = Publisher::new(client.clone(), client, SealedBox)
        .with_concurrency(settings.concurrency);

    output::header(&format!(
        "Publishing {} secrets to {} repositories",
        config.secrets.len(),
        config.repositories.len()
    ));

    debug!(api_url = %settings.api_url, "starting runtime");
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let summary = runtime.block_on(publisher.publish(
        &config.actor,
        &config.repositories,
        &config.secrets,
    ));

    render(&summary);

    if summary.is_success() {
        Ok(())
    } else {
        Err(Error::Failed {
            failed: summary.failed(),
            total: summary.total(),
        })
    }
}

fn render(summary: &PublishSummary) {
    for report in &summary.reports {
        let repository = output::name(&report.target);
        match &report.outcome {
            RepositoryOutcome::KeyFetchFailed(e) => {
                output::failure(&format!("{}: {}: {}", repository, e.kind(), e));
            }
            RepositoryOutcome::Completed { secrets, .. } => {
                for secret in secrets {
                    match &secret.outcome {
                        SecretOutcome::Uploaded { status } => output::success(&format!(
                            "{} {} ({})",
                            repository,
                            output::name(&secret.name),
                            status
                        )),
                        SecretOutcome::Failed(e) => output::failure(&format!(
                            "{} {}: {}: {}",
                            repository,
                            output::name(&secret.name),
                            e.kind(),
                            e
                        )),
                    }
                }
            }
        }
    }

    output::section("Summary");
    output::kv("succeeded", summary.succeeded());
    output::kv("failed", summary.failed());
}
