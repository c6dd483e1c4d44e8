use crate::cache::error::CacheError;
use crate::metrics::LocalMetricBundle;
use async_trait::async_trait;
use serde_json::Value;

/// String-keyed store shared with the measurement collector.
///
/// Implementors only provide raw JSON access; the typed accessors decode on top.
#[async_trait]
pub trait CacheAdapter: Send + Sync {
    async fn get_raw(&self, key: &str) -> Result<Option<Value>, CacheError>;

    async fn put_raw(&self, key: &str, value: Value) -> Result<(), CacheError>;

    async fn get_samples(&self, key: &str) -> Result<Option<LocalMetricBundle>, CacheError> {
        match self.get_raw(key).await? {
            None | Some(Value::Null) => Ok(None),
            Some(v) => serde_json::from_value(v)
                .map(Some)
                .map_err(|e| CacheError::decode(key, e)),
        }
    }

    async fn put_samples(&self, key: &str, bundle: &LocalMetricBundle) -> Result<(), CacheError> {
        let value = serde_json::to_value(bundle).map_err(|e| CacheError::decode(key, e))?;
        self.put_raw(key, value).await
    }

    async fn get_flag(&self, key: &str) -> Result<Option<bool>, CacheError> {
        match self.get_raw(key).await? {
            None | Some(Value::Null) => Ok(None),
            Some(v) => serde_json::from_value(v)
                .map(Some)
                .map_err(|e| CacheError::decode(key, e)),
        }
    }

    async fn put_flag(&self, key: &str, flag: bool) -> Result<(), CacheError> {
        self.put_raw(key, Value::Bool(flag)).await
    }
}
