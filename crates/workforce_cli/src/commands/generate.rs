//! Generate command implementation
//!
//! Runs the population generator and writes the records either to a
//! JSON-lines file (in batches, through the file store) or to stdout.

use anyhow::{Context, Result};
use clap::Args;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use workforce_sim::{GenerationReport, GenerationRequest, GeneratorConfig, PopulationGenerator};
use workforce_store::JsonLinesStore;

/// Arguments for `workforce generate`
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Headcount in the current year
    #[arg(long)]
    pub headcount: u64,

    /// First simulated year
    #[arg(long)]
    pub start_year: i32,

    /// Last simulated year (inclusive)
    #[arg(long)]
    pub end_year: i32,

    /// Attrition half-life in years
    #[arg(long)]
    pub half_life: f64,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Year the headcount refers to (defaults to this year)
    #[arg(long)]
    pub current_year: Option<i32>,

    /// JSON-lines output file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Records per storage write
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Directory of JSON reference overrides
    #[arg(long)]
    pub reference_dir: Option<PathBuf>,
}

impl GenerateArgs {
    /// Flags take precedence over file and environment settings.
    fn apply(&self, mut config: GeneratorConfig) -> GeneratorConfig {
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.current_year.is_some() {
            config.current_year = self.current_year;
        }
        if let Some(batch_size) = self.batch_size {
            config.batch_size = batch_size;
        }
        if self.reference_dir.is_some() {
            config.reference_dir = self.reference_dir.clone();
        }
        config
    }

    fn request(&self) -> GenerationRequest {
        GenerationRequest::new(self.headcount, self.start_year, self.end_year, self.half_life)
    }
}

/// Run the generate command
pub async fn run(config: GeneratorConfig, args: GenerateArgs) -> Result<()> {
    let config = args.apply(config);
    config.validate().context("Invalid configuration")?;

    let batch_size = config.batch_size;
    let generator = PopulationGenerator::from_config(config).context("Failed to load reference data")?;
    let mut rng = generator.rng();
    let request = args.request();

    info!("Generating workforce...");
    info!("  Headcount: {}", request.target_headcount);
    info!("  Years: {}..={}", request.start_year, request.end_year);
    info!("  Half-life: {} years", request.half_life_years);
    info!("  Seed: {}", rng.seed());

    let report = match &args.output {
        Some(path) => {
            let store = JsonLinesStore::create(path)
                .await
                .with_context(|| format!("Failed to create {}", path.display()))?;
            generator
                .generate_and_store(&request, &mut rng, &store, batch_size)
                .await?
        }
        None => {
            let report = generator.generate_report(&request, &mut rng)?;
            write_json_lines(&report, std::io::stdout().lock())?;
            report
        }
    };

    log_summary(&report);
    Ok(())
}

fn write_json_lines<W: Write>(report: &GenerationReport, mut out: W) -> Result<()> {
    for record in &report.records {
        serde_json::to_writer(&mut out, record)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

fn log_summary(report: &GenerationReport) {
    info!("Generation complete");
    info!("  Records: {}", report.records.len());
    info!("  Initial cohort: {}", report.initial_cohort);
    for (year, hires) in &report.new_hires_by_year {
        info!(
            "  {}: projected {} / hired {} / departed {}",
            year,
            report.projection.headcount(*year).unwrap_or(0),
            hires,
            report.attrition.get(*year)
        );
    }
}
