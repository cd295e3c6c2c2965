//! Integration tests for the storage backends and batched writes.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::atomic::{AtomicUsize, Ordering};
use workforce_core::types::{
    EducationLevel, EmployeeRecord, EmploymentStatus, Sex, StorageError,
};
use workforce_store::{
    insert_in_batches, EmployeeStore, JsonLinesStore, MemoryStore, DEFAULT_BATCH_SIZE,
};

fn record(id: u64) -> EmployeeRecord {
    EmployeeRecord {
        id,
        sex: if id % 2 == 0 { Sex::Female } else { Sex::Male },
        first_name: format!("First{id}"),
        middle_name: format!("Middle{id}"),
        last_name: "Smith".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
        hire_date: NaiveDate::from_ymd_opt(2005, 1, 3).unwrap(),
        departure_date: NaiveDate::from_ymd_opt(2009, 6, 1),
        email: format!("first{id}.m.smith@company.com"),
        education_level: EducationLevel::BachelorsDegree,
        position_id: 1,
        branch_id: 1,
        supervisor_id: if id == 1 { None } else { Some(1) },
        status: EmploymentStatus::Removed,
    }
}

fn records(n: u64) -> Vec<EmployeeRecord> {
    (1..=n).map(record).collect()
}

/// Counts calls and fails on the configured call number.
struct FlakyStore {
    calls: AtomicUsize,
    fail_on: usize,
    inner: MemoryStore,
}

#[async_trait]
impl EmployeeStore for FlakyStore {
    async fn insert_batch(&self, records: &[EmployeeRecord]) -> Result<(), StorageError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call == self.fail_on {
            return Err(StorageError::Rejected("status 503".to_string()));
        }
        self.inner.insert_batch(records).await
    }

    async fn fetch_batch(&self, limit: usize) -> Result<Vec<EmployeeRecord>, StorageError> {
        self.inner.fetch_batch(limit).await
    }
}

#[tokio::test]
async fn test_memory_store_fetches_most_recent_oldest_first() {
    let store = MemoryStore::new();
    store.insert_batch(&records(5)).await.unwrap();

    let fetched = store.fetch_batch(3).await.unwrap();
    let ids: Vec<u64> = fetched.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![3, 4, 5]);

    assert_eq!(store.fetch_batch(100).await.unwrap().len(), 5);
    assert!(store.fetch_batch(0).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_memory_store_capacity_rejects() {
    let store = MemoryStore::new().with_max_records(4);
    store.insert_batch(&records(3)).await.unwrap();
    let err = store.insert_batch(&records(2)).await.unwrap_err();
    assert!(matches!(err, StorageError::Rejected(_)));
    assert_eq!(store.len().await, 3);
}

#[tokio::test]
async fn test_batches_of_default_size() {
    let store = MemoryStore::new();
    let written = insert_in_batches(&store, &records(250), DEFAULT_BATCH_SIZE)
        .await
        .unwrap();
    assert_eq!(written, 250);
    let snapshot = store.snapshot().await;
    assert_eq!(snapshot.len(), 250);
    assert!(snapshot.windows(2).all(|w| w[0].id < w[1].id));
}

#[tokio::test]
async fn test_zero_batch_size_rejected() {
    let store = MemoryStore::new();
    let err = insert_in_batches(&store, &records(3), 0).await.unwrap_err();
    assert!(matches!(err, StorageError::InvalidBatchSize));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_failing_batch_propagates_and_keeps_earlier_batches() {
    let store = FlakyStore {
        calls: AtomicUsize::new(0),
        fail_on: 2,
        inner: MemoryStore::new(),
    };
    let err = insert_in_batches(&store, &records(50), 10).await.unwrap_err();
    assert_eq!(err.to_string(), "Storage rejected the request: status 503");
    assert_eq!(store.inner.len().await, 20);
    assert_eq!(store.calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_json_lines_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("employees.jsonl");
    let store = JsonLinesStore::create(&path).await.unwrap();

    insert_in_batches(&store, &records(7), 3).await.unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 7);

    let tail = store.fetch_batch(2).await.unwrap();
    assert_eq!(tail, vec![record(6), record(7)]);
}

#[tokio::test]
async fn test_json_lines_missing_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonLinesStore::new(dir.path().join("absent.jsonl"));
    assert!(store.fetch_batch(10).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_json_lines_corrupt_line_reports_serialisation_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.jsonl");
    std::fs::write(&path, "{\"id\": 1}\n").unwrap();
    let store = JsonLinesStore::new(&path);
    let err = store.fetch_batch(10).await.unwrap_err();
    assert!(matches!(err, StorageError::Serialization(_)));
}
