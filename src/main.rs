//! Reposeal - Seal and publish GitHub Actions secrets across many repositories.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use reposeal::cli::output;
use reposeal::cli::{execute, Cli};
use reposeal::core::constants;
use reposeal::error::{ConfigError, Error};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("reposeal=debug")
        } else {
            EnvFilter::new("reposeal=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time().with_writer(std::io::stderr))
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::Config(ConfigError::NotFound(_)) => Some("pass --assets <dir> or create ./assets"),
            Error::Config(ConfigError::NoToken(_)) => {
                Some("create actor.json or export the token variable")
            }
            Error::Failed { .. } => Some("fix the failures above and rerun: reposeal publish"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
