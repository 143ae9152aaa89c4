// In memory implementation of the RecordStore port.
//
// Purpose
// - Support service tests and local development without touching the disk.
//
// Responsibilities
// - Keep records in an ordered map keyed by identifier.
// - Simulate an unavailable backend through `toggle_offline`.

use super::{RecordStore, RecordStoreError};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

pub struct InMemoryRecordStore<Record: Clone + Send + Sync + 'static> {
    inner: RwLock<BTreeMap<String, Record>>,
    is_offline: bool,
}

impl<Record: Clone + Send + Sync + 'static> Default for InMemoryRecordStore<Record> {
    fn default() -> Self {
        Self {
            inner: RwLock::new(BTreeMap::new()),
            is_offline: false,
        }
    }
}

impl<Record: Clone + Send + Sync + 'static> InMemoryRecordStore<Record> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), RecordStoreError> {
        if self.is_offline {
            return Err(RecordStoreError::Backend("Record store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl<Record> RecordStore<Record> for InMemoryRecordStore<Record>
where
    Record: Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &str) -> Result<Option<Record>, RecordStoreError> {
        self.ensure_online()?;
        Ok(self.inner.read().await.get(key).cloned())
    }

    async fn insert(&self, key: &str, record: Record) -> Result<(), RecordStoreError> {
        self.ensure_online()?;
        self.inner.write().await.insert(key.to_string(), record);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<Option<Record>, RecordStoreError> {
        self.ensure_online()?;
        Ok(self.inner.write().await.remove(key))
    }

    async fn values(&self) -> Result<Vec<Record>, RecordStoreError> {
        self.ensure_online()?;
        Ok(self.inner.read().await.values().cloned().collect())
    }
}
