use crate::metrics::error::ClassifyError;
use crate::metrics::histogram::{MetricHistogram, classify};
use crate::metrics::tier::{OverallLabel, QualityTier};

/// Folds the LCP, FID and CLS tiers (in that order) into one label.
///
/// - `Good` only if every metric is good.
/// - `Poor` if any metric is poor.
/// - `NeedsImprovement` otherwise.
pub fn summarize(tiers: [QualityTier; 3]) -> OverallLabel {
    if tiers.iter().all(|t| *t == QualityTier::Good) {
        return OverallLabel::Good;
    }
    if tiers.iter().any(|t| *t == QualityTier::Poor) {
        return OverallLabel::Poor;
    }
    OverallLabel::NeedsImprovement
}

/// Classifies all three histograms and summarizes them.
///
/// Fails as a whole if any single metric cannot be classified.
pub fn summarize_histograms(
    lcp: &MetricHistogram,
    fid: &MetricHistogram,
    cls: &MetricHistogram,
) -> Result<(OverallLabel, [QualityTier; 3]), ClassifyError> {
    let tiers = [classify(lcp)?, classify(fid)?, classify(cls)?];
    Ok((summarize(tiers), tiers))
}
