//! Newline-delimited JSON file store.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use tokio::fs::{File, OpenOptions};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::Mutex;
use tracing::debug;
use workforce_core::types::{EmployeeRecord, StorageError};

use crate::EmployeeStore;

/// Appends records to a file, one JSON object per line.
///
/// Writes are serialised through an internal lock so concurrent callers
/// never interleave lines.
#[derive(Debug)]
pub struct JsonLinesStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonLinesStore {
    /// Store backed by `path`. The file is created on first insert.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Truncates (or creates) the backing file.
    pub async fn create(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let store = Self::new(path);
        File::create(&store.path).await?;
        Ok(store)
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl EmployeeStore for JsonLinesStore {
    async fn insert_batch(&self, records: &[EmployeeRecord]) -> Result<(), StorageError> {
        let mut buf = Vec::with_capacity(records.len() * 256);
        for record in records {
            serde_json::to_writer(&mut buf, record)?;
            buf.push(b'\n');
        }

        let _guard = self.write_lock.lock().await;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(&buf).await?;
        file.flush().await?;
        debug!(path = %self.path.display(), records = records.len(), "Appended records");
        Ok(())
    }

    async fn fetch_batch(&self, limit: usize) -> Result<Vec<EmployeeRecord>, StorageError> {
        let file = match File::open(&self.path).await {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut tail: VecDeque<EmployeeRecord> = VecDeque::with_capacity(limit.min(1024));
        let mut lines = BufReader::new(file).lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            let record: EmployeeRecord = serde_json::from_str(&line)?;
            if limit == 0 {
                continue;
            }
            if tail.len() == limit {
                tail.pop_front();
            }
            tail.push_back(record);
        }
        Ok(tail.into())
    }
}
