//! Workforce CLI - Synthetic Employee Population Generator
//!
//! # Commands
//!
//! - `workforce generate --headcount <n> --start-year <y> --end-year <y> --half-life <h>`
//!   - Generate a population and write it as JSON lines
//! - `workforce fetch --input <file>` - Show the most recent stored records
//! - `workforce check` - Validate configuration and reference data
//!
//! Configuration is read from `workforce.toml` (or `--config`) when present,
//! then overridden by `WORKFORCE_*` environment variables, then by flags.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

/// Synthetic workforce generator
#[derive(Parser, Debug)]
#[command(name = "workforce")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "workforce.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a synthetic workforce
    Generate(commands::generate::GenerateArgs),

    /// Print the most recently stored records
    Fetch {
        /// JSON-lines file written by `generate`
        #[arg(short, long)]
        input: PathBuf,

        /// Maximum number of records
        #[arg(short, long, default_value_t = workforce_store::DEFAULT_FETCH_LIMIT)]
        limit: usize,

        /// Output format (table, json, csv)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Check configuration and reference data
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = commands::load_config(&cli.config)?;

    let default_level = if cli.verbose { "debug" } else { config.log_level.as_str() };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Generate(args) => commands::generate::run(config, args).await,
        Commands::Fetch {
            input,
            limit,
            format,
        } => commands::fetch::run(&input, limit, &format).await,
        Commands::Check => commands::check::run(config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "workforce",
            "generate",
            "--headcount",
            "1000",
            "--start-year",
            "2000",
            "--end-year",
            "2005",
            "--half-life",
            "5",
            "--seed",
            "42",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.headcount, 1000);
                assert_eq!(args.half_life, 5.0);
                assert_eq!(args.seed, Some(42));
                assert!(args.output.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(cli.config, PathBuf::from("workforce.toml"));
    }

    #[test]
    fn test_parse_fetch_defaults() {
        let cli = Cli::try_parse_from(["workforce", "fetch", "--input", "out.jsonl"]).unwrap();
        match cli.command {
            Commands::Fetch { limit, format, .. } => {
                assert_eq!(limit, 100);
                assert_eq!(format, "table");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_generate_requires_headcount() {
        assert!(Cli::try_parse_from(["workforce", "generate", "--start-year", "2000"]).is_err());
    }
}
