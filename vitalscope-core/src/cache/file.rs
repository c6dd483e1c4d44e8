use crate::cache::adapter::CacheAdapter;
use crate::cache::error::CacheError;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Store backed by a single JSON object on disk, the same shape as a dump of the
/// extension's local storage area.
///
/// Every access re-reads the file so entries written by another process are seen.
/// Writes go to a sibling `.tmp` file that is renamed over the store, so readers
/// never observe a partial file. A missing file reads as an empty store.
#[derive(Debug)]
pub struct JsonFileCache {
    path: PathBuf,
    // Serializes reads against read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl JsonFileCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }

    async fn load(&self) -> Result<Map<String, Value>, CacheError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => {
                return Err(CacheError::Read {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(Map::new());
        }

        serde_json::from_slice(&raw).map_err(|e| CacheError::Corrupt {
            path: self.path.clone(),
            source: e,
        })
    }
}

#[async_trait]
impl CacheAdapter for JsonFileCache {
    async fn get_raw(&self, key: &str) -> Result<Option<Value>, CacheError> {
        let _guard = self.lock.lock().await;

        let mut entries = self.load().await?;
        Ok(entries.remove(key))
    }

    async fn put_raw(&self, key: &str, value: Value) -> Result<(), CacheError> {
        let _guard = self.lock.lock().await;

        let mut entries = self.load().await?;
        entries.insert(key.to_string(), value);

        let body = serde_json::to_vec_pretty(&entries).map_err(|e| CacheError::Corrupt {
            path: self.path.clone(),
            source: e,
        })?;

        let tmp = self.tmp_path();
        let write_err = |e| CacheError::Write {
            path: self.path.clone(),
            source: e,
        };
        tokio::fs::write(&tmp, body).await.map_err(write_err)?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(write_err)?;

        tracing::debug!(path = %self.path.display(), key, "cache entry written");
        Ok(())
    }
}
