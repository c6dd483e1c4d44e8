use crate::cache::adapter::CacheAdapter;
use crate::cache::error::CacheError;
use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;

/// In-process store. Used by tests and as the fallback when no cache file is configured.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: DashMap<String, Value>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl CacheAdapter for MemoryCache {
    async fn get_raw(&self, key: &str) -> Result<Option<Value>, CacheError> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    async fn put_raw(&self, key: &str, value: Value) -> Result<(), CacheError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}
