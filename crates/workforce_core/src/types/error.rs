//! Error types for structured error handling.
//!
//! This module provides:
//! - `SamplerError`: Errors from alias-table construction
//! - `ReferenceDataError`: Errors from loading or validating reference tables
//! - `StorageError`: Errors reported by a storage collaborator
//! - `WorkforceError`: Top-level error surfaced by a generation run

use thiserror::Error;

/// Alias-table construction errors.
///
/// # Examples
/// ```
/// use workforce_core::types::SamplerError;
///
/// let err = SamplerError::InvalidWeight { index: 2, weight: -1.0 };
/// assert_eq!(format!("{}", err), "Invalid weight at index 2: -1 (must be finite and > 0)");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SamplerError {
    /// No outcomes were supplied.
    #[error("Cannot build a sampler from an empty distribution")]
    Empty,

    /// A weight was zero, negative, NaN or infinite.
    #[error("Invalid weight at index {index}: {weight} (must be finite and > 0)")]
    InvalidWeight {
        /// Position of the offending pair in the input
        index: usize,
        /// The rejected weight
        weight: f64,
    },
}

/// Reference data errors.
#[derive(Debug, Error)]
pub enum ReferenceDataError {
    /// A reference file could not be read.
    #[error("Failed to read reference file {path}: {source}")]
    Io {
        /// File that failed
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A reference file was not valid JSON of the expected shape.
    #[error("Failed to parse reference file {path}: {message}")]
    Parse {
        /// File that failed
        path: String,
        /// Parser message
        message: String,
    },

    /// The table parsed but violates an invariant (empty, bad weight, ...).
    #[error("Invalid reference data: {0}")]
    Invalid(String),
}

/// Errors raised by a storage collaborator.
///
/// These are propagated to the caller verbatim; no retry happens in the core.
#[derive(Debug, Error)]
pub enum StorageError {
    /// I/O failure while reading or writing the backing medium.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be encoded or decoded.
    #[error("Storage serialisation error: {0}")]
    Serialization(String),

    /// The store refused the write (capacity, non-success response, ...).
    #[error("Storage rejected the request: {0}")]
    Rejected(String),

    /// Batched writes need a positive batch size.
    #[error("Batch size must be greater than 0")]
    InvalidBatchSize,
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Top-level error for a generation run.
#[derive(Debug, Error)]
pub enum WorkforceError {
    /// Reference data is missing a key the run depends on.
    ///
    /// Raised before any sampling begins.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The caller's request is unusable (reversed years, bad half-life, ...).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A bounded rejection loop did not produce an acceptable draw.
    #[error("Sampling exhausted after {attempts} attempts while drawing {what}")]
    SamplingExhaustion {
        /// What was being drawn
        what: &'static str,
        /// How many draws were rejected
        attempts: usize,
    },

    /// Alias-table construction failed.
    #[error(transparent)]
    Sampler(#[from] SamplerError),

    /// Reference tables failed to load or validate.
    #[error(transparent)]
    ReferenceData(#[from] ReferenceDataError),

    /// The storage collaborator reported a failure.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl WorkforceError {
    /// Create a configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create an invalid-request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }
}

/// Result alias used throughout the workspace.
pub type Result<T, E = WorkforceError> = std::result::Result<T, E>;
