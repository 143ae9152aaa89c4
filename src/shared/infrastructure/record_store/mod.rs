// Persistence port for keyed records.
//
// Purpose
// - Describe the durable map the core stores its records in, without tying
//   the core to a particular backend.
//
// Responsibilities
// - Point lookup, insertion (insert or replace), removal and full-value
//   iteration. Nothing else: no indices, no transactions.
//
// Adapters
// - `in_memory` keeps the map in process. Used by tests and local runs.
// - `file` keeps the same map as a JSON document on disk.

pub mod file;
pub mod in_memory;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordStoreError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[async_trait]
pub trait RecordStore<Record: Clone + Send + Sync + 'static>: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Record>, RecordStoreError>;

    /// Stores `record` under `key`, replacing any previous value.
    async fn insert(&self, key: &str, record: Record) -> Result<(), RecordStoreError>;

    /// Removes and returns the value under `key` in one step.
    async fn remove(&self, key: &str) -> Result<Option<Record>, RecordStoreError>;

    /// All stored values, ordered by key.
    async fn values(&self) -> Result<Vec<Record>, RecordStoreError>;
}
