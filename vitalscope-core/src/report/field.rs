use crate::crux::RemoteRecord;
use crate::metrics::{
    ClassifyError, MetricHistogram, MetricKind, OverallLabel, QualityTier, classify, summarize,
};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;

/// Characters `encodeURIComponent` leaves alone.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Classified field data for one origin, ready for a presentation sink.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldReport {
    pub origin: String,
    pub overall: OverallLabel,
    /// LCP, FID, CLS.
    pub metrics: [FieldMetric; 3],
    pub psi_link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldMetric {
    pub kind: MetricKind,
    pub tier: QualityTier,
    /// Buckets in range order (fast, average, slow).
    pub histogram: MetricHistogram,
}

impl FieldReport {
    /// Classifies every metric of `record`. Fails as a whole if any metric fails.
    pub fn from_record(record: &RemoteRecord, psi_url: &str) -> Result<Self, ClassifyError> {
        let metric = |kind: MetricKind| -> Result<FieldMetric, ClassifyError> {
            let histogram = record.metric(kind);
            Ok(FieldMetric {
                kind,
                tier: classify(histogram)?,
                histogram: histogram.normalized(),
            })
        };

        let metrics = [
            metric(MetricKind::Lcp)?,
            metric(MetricKind::Fid)?,
            metric(MetricKind::Cls)?,
        ];
        let overall = summarize([metrics[0].tier, metrics[1].tier, metrics[2].tier]);

        Ok(Self {
            origin: record.origin.clone(),
            overall,
            metrics,
            psi_link: psi_link(psi_url, &record.origin),
        })
    }
}

/// PageSpeed Insights link for `url`.
pub fn psi_link(psi_url: &str, url: &str) -> String {
    format!("{psi_url}?url={}", utf8_percent_encode(url, URI_COMPONENT))
}
