use integration_tests::harness::{SharedBuffer, StubCrux, TestPopup, record_body};
use pretty_assertions::assert_eq;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;
use vitalscope_core::cache::{CacheAdapter, JsonFileCache, derive_key, tab_flag_key};
use vitalscope_core::cli::record;
use vitalscope_core::metrics::{LocalMetricBundle, OverallLabel};
use vitalscope_core::render::JsonSink;
use vitalscope_core::session::{FieldOutcome, LocalOutcome, PopupSession, Tab};

const PAGE: &str = "https://shop.example/checkout";

/// Helper: a collector bundle for `PAGE`.
fn bundle() -> LocalMetricBundle {
    serde_json::from_value(serde_json::json!({
        "location": { "url": PAGE, "shortURL": "shop.example/checkout" },
        "timestamp": "2024-05-01T10:00:00Z",
        "lcp": { "value": 3100.0, "pass": false, "final": true },
        "fid": { "value": 8.0, "pass": true, "final": true },
        "cls": { "value": 0.12, "pass": false, "final": false }
    }))
    .unwrap()
}

fn tab(id: u64) -> Tab {
    Tab {
        id: Some(id),
        url: PAGE.to_string(),
    }
}

#[tokio::test]
async fn popup_renders_both_sections_for_recorded_page() {
    // Arrange
    let stub = StubCrux::start(
        200,
        record_body(
            "https://shop.example",
            [0.9, 0.05, 0.05],
            [0.9, 0.05, 0.05],
            [0.9, 0.05, 0.05],
        ),
    );
    let popup = TestPopup::start(&stub);
    popup
        .cache
        .put_samples(&derive_key(PAGE), &bundle())
        .await
        .unwrap();

    // Act
    let outcome = popup.session.open(&tab(3)).await;

    // Assert
    assert_eq!(outcome.field, FieldOutcome::Rendered(OverallLabel::Good));
    assert_eq!(outcome.local, LocalOutcome::Rendered);

    let local = popup.rendered_section("local");
    assert_eq!(local.len(), 1);
    let body = &local[0]["body"];
    assert_eq!(body["location"]["shortURL"], "shop.example/checkout");
    assert_eq!(body["timestamp"], "2024-05-01T10:00:00Z");
    assert_eq!(body["lcp"]["value"], 3100.0);
    assert_eq!(body["lcp"]["caveat"], false);
    assert_eq!(body["cls"]["final"], false);
}

#[tokio::test]
async fn background_tab_flags_lcp_caveat() {
    // Arrange
    let popup = TestPopup::without_field_data();
    popup
        .cache
        .put_samples(&derive_key(PAGE), &bundle())
        .await
        .unwrap();
    popup.cache.put_flag(&tab_flag_key(9), true).await.unwrap();

    // Act
    let outcome = popup.session.open(&tab(9)).await;

    // Assert
    assert_eq!(outcome.field, FieldOutcome::Disabled);
    let body = &popup.rendered_section("local")[0]["body"];
    assert_eq!(body["lcp"]["caveat"], true);
    assert_eq!(body["fid"]["caveat"], false);
    assert_eq!(body["cls"]["caveat"], false);
}

#[tokio::test]
async fn unrecorded_page_renders_unavailable() {
    let popup = TestPopup::without_field_data();

    let outcome = popup.session.open(&tab(1)).await;

    assert_eq!(outcome.local, LocalOutcome::Unavailable);
    assert_eq!(popup.rendered_section("local")[0]["status"], "unavailable");
}

#[tokio::test]
async fn recorded_bundle_is_read_back_through_file_cache() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let cache_path = dir.path().join("cache.json");
    let bundle_path = dir.path().join("bundle.json");
    fs::write(&bundle_path, serde_json::to_string(&bundle()).unwrap()).unwrap();
    record(&cache_path, PAGE, &bundle_path, Some(4), true)
        .await
        .unwrap();

    let output = SharedBuffer::default();
    let session = PopupSession::new(
        Arc::new(JsonFileCache::new(&cache_path)),
        Arc::new(JsonSink::new(output.clone())),
        "https://psi.test/",
    );

    // Act
    let outcome = session.open(&tab(4)).await;

    // Assert
    assert_eq!(outcome.local, LocalOutcome::Rendered);
    let doc: serde_json::Value = serde_json::from_str(output.contents().trim()).unwrap();
    assert_eq!(doc["section"], "local");
    assert_eq!(doc["body"]["lcp"]["caveat"], true);
    assert_eq!(doc["body"]["timestamp"], "2024-05-01T10:00:00Z");
}
