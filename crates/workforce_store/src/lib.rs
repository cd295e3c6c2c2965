//! # workforce_store: Storage Collaborators
//!
//! ## Layer 2 Role
//!
//! The generator hands finished records to an [`EmployeeStore`] in fixed-size
//! batches. This crate defines the trait and two in-process backends:
//!
//! - [`MemoryStore`]: records held behind an async `RwLock`, with an
//!   optional capacity
//! - [`JsonLinesStore`]: one JSON record per line in a file
//!
//! Errors from a backend are returned to the caller unchanged; nothing here
//! retries.
//!
//! ## Usage Examples
//!
//! ```rust
//! use workforce_store::{EmployeeStore, MemoryStore};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let store = MemoryStore::new();
//! store.insert_batch(&[]).await.unwrap();
//! assert!(store.fetch_batch(10).await.unwrap().is_empty());
//! # });
//! ```

#![warn(missing_docs)]

mod batch;
mod jsonl;
mod memory;

pub use batch::{insert_in_batches, DEFAULT_BATCH_SIZE};
pub use jsonl::JsonLinesStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use workforce_core::types::{EmployeeRecord, StorageError};

/// Default number of records returned by [`EmployeeStore::fetch_batch`]
/// callers that do not specify a limit.
pub const DEFAULT_FETCH_LIMIT: usize = 100;

/// Destination for generated employee records.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Appends `records` in order.
    ///
    /// A failed call leaves earlier successful batches in place.
    async fn insert_batch(&self, records: &[EmployeeRecord]) -> Result<(), StorageError>;

    /// Returns up to `limit` of the most recently inserted records, oldest
    /// first.
    async fn fetch_batch(&self, limit: usize) -> Result<Vec<EmployeeRecord>, StorageError>;
}
