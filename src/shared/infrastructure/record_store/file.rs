// File backed implementation of the RecordStore port.
//
// The whole map lives in memory and is written to a single JSON document after
// every mutation. Writes go to a sibling temp file first and are renamed into
// place, so a crash mid-write leaves the previous document intact. A mutation
// only becomes visible once the document has been written.

use super::{RecordStore, RecordStoreError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

pub struct FileRecordStore<Record> {
    path: PathBuf,
    inner: RwLock<BTreeMap<String, Record>>,
}

impl<Record> FileRecordStore<Record>
where
    Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    /// Opens the document at `path`, starting empty when it does not exist yet.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, RecordStoreError> {
        let path = path.into();
        let records: BTreeMap<String, Record> = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.is_empty() => BTreeMap::new(),
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        tracing::debug!(path = %path.display(), records = records.len(), "record store opened");
        Ok(Self {
            path,
            inner: RwLock::new(records),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, records: &BTreeMap<String, Record>) -> Result<(), RecordStoreError> {
        let bytes = serde_json::to_vec_pretty(records)?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        tokio::fs::write(&tmp, bytes).await?;
        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            tokio::fs::remove_file(&tmp).await.ok();
            return Err(e.into());
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl<Record> RecordStore<Record> for FileRecordStore<Record>
where
    Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    async fn get(&self, key: &str) -> Result<Option<Record>, RecordStoreError> {
        Ok(self.inner.read().await.get(key).cloned())
    }

    async fn insert(&self, key: &str, record: Record) -> Result<(), RecordStoreError> {
        let mut guard = self.inner.write().await;
        let mut next = guard.clone();
        next.insert(key.to_string(), record);
        self.persist(&next).await?;
        *guard = next;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<Option<Record>, RecordStoreError> {
        let mut guard = self.inner.write().await;
        if !guard.contains_key(key) {
            return Ok(None);
        }
        let mut next = guard.clone();
        let removed = next.remove(key);
        self.persist(&next).await?;
        *guard = next;
        Ok(removed)
    }

    async fn values(&self) -> Result<Vec<Record>, RecordStoreError> {
        Ok(self.inner.read().await.values().cloned().collect())
    }
}
