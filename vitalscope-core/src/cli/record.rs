use crate::cache::{CacheAdapter, JsonFileCache, derive_key, tab_flag_key};
use crate::metrics::LocalMetricBundle;
use anyhow::{Context, bail};
use std::path::Path;

/// Stores a collector bundle for `url`, as the collector would.
pub async fn record(
    cache_path: &Path,
    url: &str,
    bundle_path: &Path,
    tab: Option<u64>,
    background: bool,
) -> anyhow::Result<String> {
    if url.is_empty() {
        bail!("url must not be empty");
    }
    if background && tab.is_none() {
        bail!("--background requires --tab");
    }

    let raw = tokio::fs::read_to_string(bundle_path)
        .await
        .with_context(|| format!("failed to read {}", bundle_path.display()))?;
    let mut bundle: LocalMetricBundle = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a metrics bundle", bundle_path.display()))?;

    if bundle.timestamp.is_none() {
        bundle.timestamp = Some(chrono::Utc::now().to_rfc3339());
    }

    let cache = JsonFileCache::new(cache_path);
    let key = derive_key(url);
    cache.put_samples(&key, &bundle).await?;

    if let Some(tab) = tab {
        cache.put_flag(&tab_flag_key(tab), background).await?;
    }

    tracing::info!(key = %key, url, tab = ?tab, background, "local metrics recorded");
    Ok(key)
}
