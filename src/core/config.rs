//! Configuration loading.
//!
//! Reads the actor credential, repository list, and secret list from JSON
//! files in an assets directory:
//!
//! ```text
//! assets/
//! ├── actor.json          # {"token": "..."}
//! ├── repositories.json   # [{"owner": "...", "name": "..."}]
//! └── secrets.json        # [{"name": "...", "value": "..."}]
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::core::constants;
use crate::core::domain::{Actor, RepositoryTarget, SecretSpec};
use crate::core::validation;
use crate::error::ConfigError;

#[derive(Deserialize)]
struct ActorRecord {
    token: String,
}

#[derive(Deserialize)]
struct SecretRecord {
    name: String,
    value: String,
}

/// Everything a publish run needs, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub actor: Actor,
    pub repositories: Vec<RepositoryTarget>,
    /// Shared read-only snapshot reused for every repository.
    pub secrets: Arc<[SecretSpec]>,
}

impl Config {
    /// Load and validate configuration from an assets directory.
    ///
    /// The token is read from `actor.json`; when that file does not exist the
    /// environment variable `token_env` is used instead.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a file is missing or malformed, no token is
    /// available, or validation fails.
    pub fn load(assets: &Path, token_env: &str) -> Result<Self, ConfigError> {
        debug!(path = %assets.display(), "loading config");

        let actor = load_actor(&assets.join(constants::ACTOR_FILE), token_env)?;
        let repositories: Vec<RepositoryTarget> =
            read_json(&assets.join(constants::REPOSITORIES_FILE))?;
        let secrets: Vec<SecretRecord> = read_json(&assets.join(constants::SECRETS_FILE))?;

        let secrets: Arc<[SecretSpec]> = secrets
            .into_iter()
            .map(|record| SecretSpec::new(record.name, record.value))
            .collect();

        let config = Self {
            actor,
            repositories,
            secrets,
        };

        debug!(
            repositories = config.repositories.len(),
            secrets = config.secrets.len(),
            "config loaded"
        );

        config.validate()?;
        Ok(config)
    }

    /// Validate the loaded configuration.
    ///
    /// Checks:
    /// - The token is not empty
    /// - Every repository has a well-formed owner and name
    /// - Secret names are valid and unique
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` or `ConfigError::DuplicateSecret`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        debug!("validating config");

        if self.actor.token().trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "token",
                reason: "cannot be empty".to_string(),
            });
        }

        for target in &self.repositories {
            validation::validate_repository(target)?;
        }

        let mut seen = HashSet::new();
        for spec in self.secrets.iter() {
            validation::validate_secret_name(spec.name())?;
            if !seen.insert(spec.name()) {
                return Err(ConfigError::DuplicateSecret(spec.name().to_string()));
            }
        }

        Ok(())
    }
}

/// Runtime settings for the GitHub client and the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// REST API base URL, without a trailing slash
    pub api_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Repositories published at once
    pub concurrency: usize,
}

impl Settings {
    pub fn new(api_url: &str, timeout_secs: u64, concurrency: usize) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(timeout_secs),
            concurrency: concurrency.max(1),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(
            constants::DEFAULT_API_URL,
            constants::DEFAULT_TIMEOUT_SECS,
            constants::DEFAULT_CONCURRENCY,
        )
    }
}

fn load_actor(path: &Path, token_env: &str) -> Result<Actor, ConfigError> {
    if path.exists() {
        let record: ActorRecord = read_json(path)?;
        return Ok(Actor::new(record.token));
    }

    debug!(var = token_env, "actor file absent, reading token from environment");
    std::env::var(token_env)
        .map(Actor::new)
        .map_err(|_| ConfigError::NoToken(token_env.to_string()))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: PathBuf::from(path),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: PathBuf::from(path),
        source,
    })
}
