//! Constants used throughout reposeal.
//!
//! Centralizes file names, endpoints, and default settings.

/// Default assets directory holding the JSON configuration files.
pub const ASSETS_DIR: &str = "assets";

/// Actor credential file name.
pub const ACTOR_FILE: &str = "actor.json";

/// Repository list file name.
pub const REPOSITORIES_FILE: &str = "repositories.json";

/// Secret list file name.
pub const SECRETS_FILE: &str = "secrets.json";

/// Environment variable consulted for the token when `actor.json` is absent.
pub const DEFAULT_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "REPOSEAL_LOG";

/// Public GitHub REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Value of the `X-GitHub-Api-Version` header sent on every request.
pub const API_VERSION: &str = "2022-11-28";

/// Media type sent in the `Accept` header.
pub const ACCEPT: &str = "application/vnd.github+json";

/// User-Agent header value.
pub const USER_AGENT: &str = concat!("reposeal/", env!("CARGO_PKG_VERSION"));

/// Per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum number of repositories published at once.
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Secret names with this prefix are reserved by GitHub.
pub const RESERVED_SECRET_PREFIX: &str = "GITHUB_";
