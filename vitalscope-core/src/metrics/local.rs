use crate::metrics::tier::MetricKind;
use serde::{Deserialize, Serialize};

/// A locally measured metric value as stored by the collector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocalMetricSample {
    pub value: f64,
    pub pass: bool,
    /// `false` while the value may still change.
    #[serde(rename = "final")]
    pub is_final: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocalSamples {
    pub lcp: LocalMetricSample,
    pub fid: LocalMetricSample,
    pub cls: LocalMetricSample,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLocation {
    pub url: String,
    #[serde(rename = "shortURL")]
    pub short_url: String,
}

/// Record written to the cache by the measurement collector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalMetricBundle {
    pub location: PageLocation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(flatten)]
    pub samples: LocalSamples,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LocalMetricEntry {
    pub kind: MetricKind,
    pub value: f64,
    pub pass: bool,
    #[serde(rename = "final")]
    pub is_final: bool,
    /// Set on LCP when the tab was loaded in the background, which inflates the value.
    pub caveat: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<PageLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    pub lcp: LocalMetricEntry,
    pub fid: LocalMetricEntry,
    pub cls: LocalMetricEntry,
}

impl LocalReport {
    pub fn entries(&self) -> [&LocalMetricEntry; 3] {
        [&self.lcp, &self.fid, &self.cls]
    }
}

pub fn build_report(samples: &LocalSamples, background_load_hint: bool) -> LocalReport {
    let entry = |kind: MetricKind, sample: &LocalMetricSample| LocalMetricEntry {
        kind,
        value: sample.value,
        pass: sample.pass,
        is_final: sample.is_final,
        caveat: background_load_hint && kind == MetricKind::Lcp,
    };

    LocalReport {
        location: None,
        timestamp: None,
        lcp: entry(MetricKind::Lcp, &samples.lcp),
        fid: entry(MetricKind::Fid, &samples.fid),
        cls: entry(MetricKind::Cls, &samples.cls),
    }
}

/// Like [`build_report`], keeping the page location and timestamp of the bundle.
pub fn build_bundle_report(bundle: &LocalMetricBundle, background_load_hint: bool) -> LocalReport {
    LocalReport {
        location: Some(bundle.location.clone()),
        timestamp: bundle.timestamp.clone(),
        ..build_report(&bundle.samples, background_load_hint)
    }
}
