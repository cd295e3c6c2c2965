//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod fetch;
pub mod generate;

use anyhow::{Context, Result};
use std::path::Path;
use workforce_sim::GeneratorConfig;

/// Configuration from `path` if it exists (defaults otherwise), with
/// environment overrides applied. Validation is left to the command.
pub fn load_config(path: &Path) -> Result<GeneratorConfig> {
    let config = if path.exists() {
        GeneratorConfig::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?
    } else {
        GeneratorConfig::default()
    };
    Ok(config.with_env_override())
}
