//! Error types for reposeal.
//!
//! Configuration problems are startup errors and stop the process. Everything
//! raised while publishing is a [`PublishError`], scoped to one repository or
//! one secret and reported rather than propagated.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Top-level error returned by CLI commands.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{failed} of {total} repositories failed")]
    Failed { failed: usize, total: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("duplicate secret name: {0}")]
    DuplicateSecret(String),

    #[error("no token: actor.json is missing and ${0} is not set")]
    NoToken(String),

    #[error("failed to build http client: {0}")]
    HttpClient(String),
}

/// Errors raised by the sealing primitive.
#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("invalid public key length: expected 32 bytes, got {0}")]
    InvalidKeyLength(usize),

    #[error("seal failed: {0}")]
    SealFailed(String),
}

/// Errors scoped to a single key fetch, seal, or upload.
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("credential rejected (HTTP {status})")]
    Auth { status: u16 },

    #[error("not found or inaccessible: {0}")]
    NotFound(String),

    #[error("protocol error: {0}")]
    Protocol(String),

    #[error("transport error: {0}")]
    Transport(String),
}

impl PublishError {
    /// Classify the error for reporting.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Crypto(_) => ErrorKind::Crypto,
            Self::Auth { .. } => ErrorKind::Auth,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Protocol(_) => ErrorKind::Protocol,
            Self::Transport(_) => ErrorKind::Transport,
        }
    }

    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol(message.into())
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }
}

/// Failure category of a [`PublishError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Crypto,
    Auth,
    NotFound,
    Protocol,
    Transport,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Crypto => "CryptoError",
            Self::Auth => "AuthError",
            Self::NotFound => "NotFoundError",
            Self::Protocol => "ProtocolError",
            Self::Transport => "TransportError",
        };
        f.write_str(name)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
