use super::record;
use crate::metrics::{ClassifyError, MetricKind, OverallLabel, QualityTier};
use crate::report::{FieldReport, psi_link};
use pretty_assertions::assert_eq;

const PSI: &str = "https://developers.google.com/speed/pagespeed/insights/";

#[test]
fn builds_report_with_sorted_histograms() {
    // Arrange
    let rec = record([0.9, 0.05, 0.05], [0.5, 0.3, 0.2], [0.8, 0.1, 0.1]);

    // Act
    let report = FieldReport::from_record(&rec, PSI).unwrap();

    // Assert
    assert_eq!(report.overall, OverallLabel::NeedsImprovement);
    assert_eq!(
        report.metrics.each_ref().map(|m| (m.kind, m.tier)),
        [
            (MetricKind::Lcp, QualityTier::Good),
            (MetricKind::Fid, QualityTier::NeedsImprovement),
            (MetricKind::Cls, QualityTier::Good),
        ]
    );
    let starts: Vec<f64> = report.metrics[0]
        .histogram
        .buckets()
        .iter()
        .map(|b| b.start)
        .collect();
    assert_eq!(starts, vec![0.0, 1.0, 2.0]);
}

#[test]
fn any_unclassifiable_metric_fails_the_report() {
    let rec = record([0.9, 0.05, 0.05], [0.5, 0.3, 0.2], [0.1, 0.1, 0.1]);

    let result = FieldReport::from_record(&rec, PSI);

    assert!(matches!(result, Err(ClassifyError::Unclassified { .. })));
}

#[test]
fn psi_link_encodes_like_uri_component() {
    assert_eq!(
        psi_link(PSI, "https://example.com"),
        "https://developers.google.com/speed/pagespeed/insights/?url=https%3A%2F%2Fexample.com"
    );
    assert_eq!(
        psi_link("https://psi.test/", "https://a.test/x?y=1&z=(2)"),
        "https://psi.test/?url=https%3A%2F%2Fa.test%2Fx%3Fy%3D1%26z%3D(2)"
    );
}
