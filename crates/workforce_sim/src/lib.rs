//! # workforce_sim: Synthetic Workforce Simulation
//!
//! ## Layer 3 Role
//!
//! Turns a headcount, a year window and an attrition half-life into a
//! plausible population of employee records:
//!
//! - [`projection`]: population-scaled headcount and the hires/attrition
//!   bookkeeping that follows from it
//! - [`tenure`]: exponential tenure model for hire and departure dates
//! - [`hiring`]: seasonal biweekly hiring schedule
//! - [`attributes`]: names, sex, email, education and birth date
//! - [`generator`]: the end-to-end pipeline, batched storage and parallel
//!   replicates
//! - [`config`]: tunables loaded from TOML with environment overrides
//!
//! ## Usage Examples
//!
//! ```rust
//! use workforce_core::rng::WorkforceRng;
//! use workforce_sim::config::GeneratorConfig;
//! use workforce_sim::generator::{GenerationRequest, PopulationGenerator};
//!
//! let config = GeneratorConfig {
//!     current_year: Some(2005),
//!     ..GeneratorConfig::default()
//! };
//! let generator = PopulationGenerator::from_config(config).unwrap();
//! let request = GenerationRequest::new(100, 2000, 2005, 5.0);
//!
//! let mut rng = WorkforceRng::from_seed(42);
//! let records = generator.generate(&request, &mut rng).unwrap();
//! assert!(records.iter().all(|r| r.birth_date < r.hire_date));
//! ```

#![warn(missing_docs)]

pub mod attributes;
pub mod config;
pub mod generator;
pub mod hiring;
pub mod projection;
pub mod tenure;

pub use config::{ConfigError, GeneratorConfig, TenureCapPolicy};
pub use generator::{GenerationReport, GenerationRequest, PopulationGenerator};
