//! Check command.
//!
//! Loads and validates the configuration without touching the network, then
//! lists what a publish would do. Secret values are never printed.

use std::path::Path;

use crate::cli::output;
use crate::core::config::Config;
use crate::error::Result;

/// Validate configuration and print the publish plan.
pub fn execute(assets: &Path, token_env: &str) -> Result<()> {
    let config = Config::load(assets, token_env)?;

    output::section("Configuration");
    output::kv("assets", assets.display());
    output::kv("repositories", config.repositories.len());
    output::kv("secrets", config.secrets.len());

    output::section("Repositories");
    if config.repositories.is_empty() {
        output::dimmed("no repositories configured");
    }
    for target in &config.repositories {
        output::list_item(&output::name(target));
    }

    output::section("Secrets");
    if config.secrets.is_empty() {
        output::dimmed("no secrets configured");
    }
    for spec in config.secrets.iter() {
        output::list_item(&output::name(spec.name()));
    }

    println!();
    output::success("configuration is valid");
    Ok(())
}
