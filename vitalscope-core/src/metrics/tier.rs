use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Quality tier of a single metric, index-aligned with the sorted histogram buckets.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityTier {
    Good,
    NeedsImprovement,
    Poor,
}

impl QualityTier {
    pub const ALL: [QualityTier; 3] = [
        QualityTier::Good,
        QualityTier::NeedsImprovement,
        QualityTier::Poor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QualityTier::Good => "Good",
            QualityTier::NeedsImprovement => "Needs Improvement",
            QualityTier::Poor => "Poor",
        }
    }

    /// CSS-ish class used by the distribution bars.
    pub fn bar_class(&self) -> &'static str {
        match self {
            QualityTier::Good => "fast",
            QualityTier::NeedsImprovement => "average",
            QualityTier::Poor => "slow",
        }
    }
}

impl Display for QualityTier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary label for an origin across LCP, FID and CLS.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallLabel {
    Good,
    NeedsImprovement,
    Poor,
}

impl OverallLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverallLabel::Good => "Good",
            OverallLabel::NeedsImprovement => "Needs Improvement",
            OverallLabel::Poor => "Poor",
        }
    }
}

impl Display for OverallLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Lcp,
    Fid,
    Cls,
}

impl MetricKind {
    /// Fixed summary order.
    pub const ALL: [MetricKind; 3] = [MetricKind::Lcp, MetricKind::Fid, MetricKind::Cls];

    /// Metric name used by the Chrome UX Report API.
    pub fn crux_name(&self) -> &'static str {
        match self {
            MetricKind::Lcp => "largest_contentful_paint",
            MetricKind::Fid => "first_input.delay",
            MetricKind::Cls => "layout_instability.cumulative_layout_shift",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            MetricKind::Lcp => "Largest Contentful Paint",
            MetricKind::Fid => "First Input Delay",
            MetricKind::Cls => "Cumulative Layout Shift",
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            MetricKind::Lcp => "LCP",
            MetricKind::Fid => "FID",
            MetricKind::Cls => "CLS",
        }
    }
}

impl Display for MetricKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.title(), self.abbreviation())
    }
}
