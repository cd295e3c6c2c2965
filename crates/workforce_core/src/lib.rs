//! # workforce_core: Foundation for Synthetic Workforce Generation
//!
//! ## Layer 1 (Foundation) Role
//!
//! workforce_core is the bottom layer of the workspace and provides:
//! - Record types: `EmployeeRecord`, `Sex`, `EducationLevel` (`types::employee`)
//! - Calendar helpers: Monday snapping, business days, tenure arithmetic (`types::time`)
//! - Error types: `SamplerError`, `ReferenceDataError`, `WorkforceError` (`types::error`)
//! - Seeded randomness threaded through every draw (`rng`)
//! - O(1) weighted categorical sampling via the alias method (`sampling`)
//! - Immutable reference tables: population, seasonality, names, education (`reference`)
//!
//! ## No Ambient State
//!
//! Nothing in this crate reads global state. Reference tables are built
//! explicitly and passed by reference (or `Arc`), and every random draw
//! takes a `&mut WorkforceRng`, so two runs with the same seed produce the
//! same population.
//!
//! ## Usage Examples
//!
//! ```rust
//! use workforce_core::rng::WorkforceRng;
//! use workforce_core::sampling::AliasSampler;
//!
//! let sampler = AliasSampler::new(vec![("Ada", 3.0), ("Grace", 1.0)]).unwrap();
//! let mut rng = WorkforceRng::from_seed(7);
//! let name = sampler.draw(&mut rng);
//! assert!(*name == "Ada" || *name == "Grace");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod reference;
pub mod rng;
pub mod sampling;
pub mod types;
