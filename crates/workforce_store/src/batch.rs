//! Fixed-size batched writes.

use tracing::debug;
use workforce_core::types::{EmployeeRecord, StorageError};

use crate::EmployeeStore;

/// Batch size used when the caller does not choose one.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Writes `records` to `store` in consecutive chunks of `batch_size`.
///
/// Stops at the first failing batch and returns its error; batches already
/// written stay written.
///
/// # Errors
/// - `StorageError::InvalidBatchSize` if `batch_size == 0`
/// - whatever the store returns for a failing batch
pub async fn insert_in_batches<S>(
    store: &S,
    records: &[EmployeeRecord],
    batch_size: usize,
) -> Result<usize, StorageError>
where
    S: EmployeeStore + ?Sized,
{
    if batch_size == 0 {
        return Err(StorageError::InvalidBatchSize);
    }

    let mut written = 0;
    for (index, chunk) in records.chunks(batch_size).enumerate() {
        store.insert_batch(chunk).await?;
        written += chunk.len();
        debug!(batch = index, size = chunk.len(), written, "Batch stored");
    }
    Ok(written)
}
