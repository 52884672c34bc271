//! Command-line interface.

pub mod check;
pub mod completions;
pub mod output;
pub mod publish;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::constants;

/// Reposeal - Seal and publish GitHub Actions secrets across many repositories.
#[derive(Parser)]
#[command(
    name = "reposeal",
    about = "Seal and publish GitHub Actions secrets across many repositories",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory containing actor.json, repositories.json and secrets.json
    #[arg(long, global = true, env = "REPOSEAL_ASSETS", default_value = constants::ASSETS_DIR)]
    pub assets: PathBuf,

    /// Environment variable holding the token when actor.json is absent
    #[arg(long, global = true, default_value = constants::DEFAULT_TOKEN_ENV)]
    pub token_env: String,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Seal every secret and upload it to every repository
    Publish {
        /// GitHub REST API base URL
        #[arg(long, env = "REPOSEAL_API_URL", default_value = constants::DEFAULT_API_URL)]
        api_url: String,
        /// Per-request timeout in seconds
        #[arg(long, default_value_t = constants::DEFAULT_TIMEOUT_SECS)]
        timeout: u64,
        /// Number of repositories published at once
        #[arg(long, default_value_t = constants::DEFAULT_CONCURRENCY)]
        concurrency: usize,
    },

    /// Validate configuration and show what would be published
    Check,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Execute a parsed command line.
pub fn execute(cli: Cli) -> crate::error::Result<()> {
    match cli.command {
        Command::Publish {
            api_url,
            timeout,
            concurrency,
        } => {
            let settings = crate::core::config::Settings::new(&api_url, timeout, concurrency);
            publish::execute(&cli.assets, &cli.token_env, &settings)
        }
        Command::Check => check::execute(&cli.assets, &cli.token_env),
        Command::Completions { shell } => completions::execute(shell),
    }
}
