//! Core Web Vitals classification.
//!
//! Field data arrives as one three-bucket density histogram per metric. Each
//! histogram is reduced to the [`QualityTier`] that holds its 75th percentile,
//! and the three tiers are folded into an [`OverallLabel`].
//!
//! Local data is handled separately: the collector already decided pass/fail
//! for each metric, so [`build_report`] only carries those flags through and
//! annotates them. The two paths are never combined numerically.
//!
//! ```text
//! MetricHistogram ──classify──> QualityTier ─┐
//! MetricHistogram ──classify──> QualityTier ─┼─summarize──> OverallLabel
//! MetricHistogram ──classify──> QualityTier ─┘
//!
//! LocalSamples ──build_report──> LocalReport
//! ```

mod error;
mod histogram;
mod local;
mod summary;
mod tier;

pub use error::ClassifyError;
pub use histogram::{Bucket, MetricHistogram, Percentiles, classify, P75_THRESHOLD};
pub use local::{
    LocalMetricBundle, LocalMetricEntry, LocalMetricSample, LocalReport, LocalSamples,
    PageLocation, build_bundle_report, build_report,
};
pub use summary::{summarize, summarize_histograms};
pub use tier::{MetricKind, OverallLabel, QualityTier};
