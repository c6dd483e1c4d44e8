use crate::cache::{CacheAdapter, JsonFileCache, derive_key, tab_flag_key};
use crate::cli::record;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

const BUNDLE: &str = r#"{
    "location": { "url": "https://example.com/a", "shortURL": "example.com/a" },
    "lcp": { "value": 1800, "pass": true, "final": true },
    "fid": { "value": 12, "pass": true, "final": false },
    "cls": { "value": 0.02, "pass": true, "final": false }
}"#;

/// Helper: a temp dir holding the bundle file.
fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bundle.json"), BUNDLE).unwrap();
    dir
}

#[tokio::test]
async fn record_stores_bundle_under_derived_key_and_fills_timestamp() {
    // Arrange
    let dir = workspace();
    let cache_path = dir.path().join("cache.json");

    // Act
    let key = record(
        &cache_path,
        "https://example.com/a",
        &dir.path().join("bundle.json"),
        None,
        false,
    )
    .await
    .unwrap();

    // Assert
    assert_eq!(key, derive_key("https://example.com/a"));
    let cache = JsonFileCache::new(&cache_path);
    let stored = cache.get_samples(&key).await.unwrap().unwrap();
    assert_eq!(stored.location.short_url, "example.com/a");
    assert!(stored.timestamp.is_some());
    assert!(stored.samples.lcp.is_final);
}

#[tokio::test]
async fn record_writes_background_flag_for_tab() {
    // Arrange
    let dir = workspace();
    let cache_path = dir.path().join("cache.json");

    // Act
    record(
        &cache_path,
        "https://example.com/a",
        &dir.path().join("bundle.json"),
        Some(7),
        true,
    )
    .await
    .unwrap();

    // Assert
    let cache = JsonFileCache::new(&cache_path);
    assert_eq!(cache.get_flag(&tab_flag_key(7)).await.unwrap(), Some(true));
}

#[tokio::test]
async fn record_rejects_background_without_tab() {
    let dir = workspace();

    let err = record(
        &dir.path().join("cache.json"),
        "https://example.com/a",
        &dir.path().join("bundle.json"),
        None,
        true,
    )
    .await
    .unwrap_err();

    assert!(err.to_string().contains("--tab"));
}

#[tokio::test]
async fn record_rejects_malformed_bundle() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bundle.json"), r#"{"lcp": 1}"#).unwrap();

    let result = record(
        &dir.path().join("cache.json"),
        "https://example.com/a",
        &dir.path().join("bundle.json"),
        None,
        false,
    )
    .await;

    assert!(result.is_err());
    assert!(!dir.path().join("cache.json").exists());
}

#[tokio::test]
async fn record_reports_missing_bundle_file() {
    let dir = TempDir::new().unwrap();

    let err = record(
        &dir.path().join("cache.json"),
        "https://example.com/a",
        &dir.path().join("absent.json"),
        None,
        false,
    )
    .await
    .unwrap_err();

    assert!(err.to_string().contains("failed to read"));
    assert!(!dir.path().join("cache.json").exists());
}
