//! Check command implementation
//!
//! Validates configuration and loads reference data without generating.

use anyhow::{Context, Result};
use tracing::info;

use workforce_sim::{GeneratorConfig, PopulationGenerator};

/// Run the check command
pub fn run(config: GeneratorConfig) -> Result<()> {
    info!("Checking configuration...");
    config.validate().context("Invalid configuration")?;
    info!("  Current year: {}", config.current_year());
    info!("  Tenure cap: {} years ({:?})", config.tenure_cap_years, config.tenure_cap_policy);
    info!("  Batch size: {}", config.batch_size);

    info!("Checking reference data...");
    let current_year = config.current_year();
    let generator = PopulationGenerator::from_config(config).context("Failed to load reference data")?;
    let data = generator.reference_data();

    let (first, last) = data.population.year_span();
    info!("  Population: {} years ({}..={})", data.population.len(), first, last);
    if data.population.get(current_year).is_none() {
        anyhow::bail!("population series has no entry for current year {}", current_year);
    }
    info!("  First-name buckets: {}", data.first_names.bucket_count());
    info!("  Last names: {}", data.last_names.len());

    info!("All checks passed");
    Ok(())
}
