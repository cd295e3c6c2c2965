//! # Random Number Generation
//!
//! Every sampling routine in the workspace takes a `&mut WorkforceRng`
//! instead of reaching for a thread-local or global generator.
//!
//! - **Reproducibility**: a run seeded with the same value yields the same population
//! - **Isolation**: concurrent runs each own a generator; no shared mutable state
//!
//! ```rust
//! use workforce_core::rng::WorkforceRng;
//!
//! let mut rng = WorkforceRng::from_seed(42);
//! let tenure_units = rng.gen_standard_exponential();
//! let age = rng.gen_box_muller(25.0, 5.0);
//! assert!(tenure_units >= 0.0);
//! assert!(age.is_finite());
//! ```

mod prng;

pub use prng::WorkforceRng;
