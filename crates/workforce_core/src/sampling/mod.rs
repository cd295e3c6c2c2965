//! Weighted categorical sampling.
//!
//! - [`AliasSampler`]: O(1)-per-draw sampler used for first/middle names
//!   and education levels

mod alias;

pub use alias::{AliasEntry, AliasSampler};
