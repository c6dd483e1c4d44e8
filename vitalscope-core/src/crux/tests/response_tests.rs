use crate::crux::{RemoteQueryError, parse_response};
use crate::metrics::{MetricKind, QualityTier, classify};
use pretty_assertions::assert_eq;

const RECORD: &str = r#"{
  "record": {
    "key": { "origin": "https://example.com", "formFactor": "DESKTOP" },
    "metrics": {
      "largest_contentful_paint": {
        "histogram": [
          { "start": 2500, "end": 4000, "density": 0.1 },
          { "start": 0, "end": 2500, "density": 0.82 },
          { "start": 4000, "density": 0.08 }
        ],
        "percentiles": { "p75": 2014 }
      },
      "first_input.delay": {
        "histogram": [
          { "start": 0, "end": 100, "density": 0.6 },
          { "start": 100, "end": 300, "density": 0.25 },
          { "start": 300, "density": 0.15 }
        ],
        "percentiles": { "p75": 112 }
      },
      "layout_instability.cumulative_layout_shift": {
        "histogram": [
          { "start": "0.00", "end": "0.10", "density": 0.4 },
          { "start": "0.10", "end": "0.25", "density": 0.2 },
          { "start": "0.25", "density": 0.4 }
        ],
        "percentiles": { "p75": "0.31" }
      },
      "navigation_types": {
        "fractions": { "navigate": 0.8, "reload": 0.2 }
      }
    }
  }
}"#;

#[test]
fn decodes_record_and_ignores_other_metrics() {
    // Act
    let record = parse_response(RECORD.as_bytes()).unwrap();

    // Assert
    assert_eq!(record.origin, "https://example.com");
    assert_eq!(record.form_factor.as_deref(), Some("DESKTOP"));
    assert_eq!(classify(record.metric(MetricKind::Lcp)), Ok(QualityTier::Good));
    assert_eq!(
        classify(record.metric(MetricKind::Fid)),
        Ok(QualityTier::NeedsImprovement)
    );
    assert_eq!(classify(record.metric(MetricKind::Cls)), Ok(QualityTier::Poor));
}

#[test]
fn error_body_is_an_api_error() {
    let body = r#"{
      "error": {
        "code": 404,
        "message": "chrome ux report data not found",
        "status": "NOT_FOUND"
      }
    }"#;

    let result = parse_response(body.as_bytes());

    match result {
        Err(RemoteQueryError::Api {
            code,
            status,
            message,
        }) => {
            assert_eq!(code, 404);
            assert_eq!(status, "NOT_FOUND");
            assert_eq!(message, "chrome ux report data not found");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[test]
fn error_wins_over_record() {
    let body = r#"{ "error": { "code": 429 }, "record": { "key": {}, "metrics": {} } }"#;

    let result = parse_response(body.as_bytes());

    assert!(matches!(result, Err(RemoteQueryError::Api { code: 429, .. })));
}

#[test]
fn missing_metric_is_reported_by_name() {
    let body = r#"{
      "record": {
        "key": { "origin": "https://example.com" },
        "metrics": {
          "largest_contentful_paint": { "histogram": [] }
        }
      }
    }"#;

    let result = parse_response(body.as_bytes());

    assert!(matches!(
        result,
        Err(RemoteQueryError::MissingMetric {
            name: "first_input.delay"
        })
    ));
}

#[test]
fn malformed_metric_is_reported_by_name() {
    let body = r#"{
      "record": {
        "key": { "origin": "https://example.com" },
        "metrics": {
          "largest_contentful_paint": { "histogram": "nope" },
          "first_input.delay": { "histogram": [] },
          "layout_instability.cumulative_layout_shift": { "histogram": [] }
        }
      }
    }"#;

    let result = parse_response(body.as_bytes());

    assert!(matches!(
        result,
        Err(RemoteQueryError::MalformedMetric {
            name: "largest_contentful_paint",
            ..
        })
    ));
}

#[test]
fn unrelated_json_is_a_decode_error() {
    let result = parse_response(br#"{ "hello": "world" }"#);

    assert!(matches!(result, Err(RemoteQueryError::Decode(_))));
}
