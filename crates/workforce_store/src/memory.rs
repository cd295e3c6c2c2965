//! In-memory store.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use workforce_core::types::{EmployeeRecord, StorageError};

use crate::EmployeeStore;

/// Records held in process memory.
///
/// Cloning shares the underlying buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Arc<RwLock<Vec<EmployeeRecord>>>,
    max_records: Option<usize>,
}

impl MemoryStore {
    /// Create an unbounded store
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject any batch that would take the store past `max` records
    pub fn with_max_records(mut self, max: usize) -> Self {
        self.max_records = Some(max);
        self
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// True if nothing has been stored
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Copy of every stored record, in insertion order
    pub async fn snapshot(&self) -> Vec<EmployeeRecord> {
        self.records.read().await.clone()
    }
}

#[async_trait]
impl EmployeeStore for MemoryStore {
    async fn insert_batch(&self, records: &[EmployeeRecord]) -> Result<(), StorageError> {
        let mut stored = self.records.write().await;
        if let Some(max) = self.max_records {
            if stored.len() + records.len() > max {
                return Err(StorageError::Rejected(format!(
                    "capacity of {} records exceeded ({} stored, {} offered)",
                    max,
                    stored.len(),
                    records.len()
                )));
            }
        }
        stored.extend_from_slice(records);
        Ok(())
    }

    async fn fetch_batch(&self, limit: usize) -> Result<Vec<EmployeeRecord>, StorageError> {
        let stored = self.records.read().await;
        let start = stored.len().saturating_sub(limit);
        Ok(stored[start..].to_vec())
    }
}
