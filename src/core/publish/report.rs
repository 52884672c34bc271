//! Publish outcomes.
//!
//! One [`RepositoryReport`] per configured repository, each listing one
//! [`SecretReport`] per configured secret unless the key fetch failed.

use crate::core::domain::RepositoryTarget;
use crate::error::{ErrorKind, PublishError};

/// Result of sealing and uploading one secret.
#[derive(Debug)]
pub enum SecretOutcome {
    /// Uploaded; carries the endpoint's HTTP status
    Uploaded { status: u16 },
    /// Seal or upload failed
    Failed(PublishError),
}

/// Outcome for one secret in one repository.
#[derive(Debug)]
pub struct SecretReport {
    pub name: String,
    pub outcome: SecretOutcome,
}

impl SecretReport {
    pub fn uploaded(name: impl Into<String>, status: u16) -> Self {
        Self {
            name: name.into(),
            outcome: SecretOutcome::Uploaded { status },
        }
    }

    pub fn failed(name: impl Into<String>, error: PublishError) -> Self {
        Self {
            name: name.into(),
            outcome: SecretOutcome::Failed(error),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, SecretOutcome::Uploaded { .. })
    }

    /// Error kind, if the secret failed
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match &self.outcome {
            SecretOutcome::Uploaded { .. } => None,
            SecretOutcome::Failed(e) => Some(e.kind()),
        }
    }
}

/// What happened to one repository.
#[derive(Debug)]
pub enum RepositoryOutcome {
    /// Key fetch failed; nothing was sealed or uploaded
    KeyFetchFailed(PublishError),
    /// Key fetched; per-secret results follow
    Completed {
        key_id: String,
        secrets: Vec<SecretReport>,
    },
}

/// Outcome for one repository.
#[derive(Debug)]
pub struct RepositoryReport {
    pub target: RepositoryTarget,
    pub outcome: RepositoryOutcome,
}

impl RepositoryReport {
    /// True if the key was fetched and every secret uploaded.
    pub fn is_success(&self) -> bool {
        match &self.outcome {
            RepositoryOutcome::KeyFetchFailed(_) => false,
            RepositoryOutcome::Completed { secrets, .. } => secrets.iter().all(SecretReport::is_success),
        }
    }

    /// Per-secret reports (empty when the key fetch failed).
    pub fn secrets(&self) -> &[SecretReport] {
        match &self.outcome {
            RepositoryOutcome::KeyFetchFailed(_) => &[],
            RepositoryOutcome::Completed { secrets, .. } => secrets,
        }
    }

    /// Key fetch error, if any
    pub fn key_error(&self) -> Option<&PublishError> {
        match &self.outcome {
            RepositoryOutcome::KeyFetchFailed(e) => Some(e),
            RepositoryOutcome::Completed { .. } => None,
        }
    }

    /// Number of secrets that failed to seal or upload
    pub fn failed_secrets(&self) -> usize {
        self.secrets().iter().filter(|s| !s.is_success()).count()
    }
}

/// Collected outcomes of a publish run, in configuration order.
#[derive(Debug, Default)]
pub struct PublishSummary {
    pub reports: Vec<RepositoryReport>,
}

impl PublishSummary {
    pub fn total(&self) -> usize {
        self.reports.len()
    }

    pub fn succeeded(&self) -> usize {
        self.reports.iter().filter(|r| r.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// Report for a given repository
    pub fn report_for(&self, target: &RepositoryTarget) -> Option<&RepositoryReport> {
        self.reports.iter().find(|r| &r.target == target)
    }
}
