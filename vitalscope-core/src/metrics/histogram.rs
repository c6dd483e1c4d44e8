use crate::metrics::error::ClassifyError;
use crate::metrics::tier::QualityTier;
use serde::{Deserialize, Deserializer, Serialize};

/// Cumulative density at which a bucket is considered to hold the 75th percentile.
pub const P75_THRESHOLD: f64 = 0.75;

/// One density bucket of a field-data histogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    #[serde(deserialize_with = "de_number")]
    pub start: f64,

    /// Open-ended on the slowest bucket.
    #[serde(
        default,
        deserialize_with = "de_opt_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub end: Option<f64>,

    pub density: f64,
}

impl Bucket {
    pub fn new(start: f64, end: Option<f64>, density: f64) -> Self {
        Self {
            start,
            end,
            density,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Percentiles {
    #[serde(deserialize_with = "de_number")]
    pub p75: f64,
}

/// Density histogram for one metric of one origin.
///
/// Buckets are kept in the order they were received; [`MetricHistogram::sorted`]
/// returns the range-ordered copy used for classification and rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricHistogram {
    #[serde(rename = "histogram")]
    buckets: Vec<Bucket>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentiles: Option<Percentiles>,
}

impl MetricHistogram {
    pub fn new(buckets: Vec<Bucket>) -> Self {
        Self {
            buckets,
            percentiles: None,
        }
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// Buckets ordered by `start`, ascending.
    pub fn sorted(&self) -> Vec<Bucket> {
        let mut sorted = self.buckets.clone();
        sorted.sort_by(|a, b| a.start.total_cmp(&b.start));
        sorted
    }

    /// Copy of this histogram with its buckets in range order.
    pub fn normalized(&self) -> Self {
        Self {
            buckets: self.sorted(),
            percentiles: self.percentiles.clone(),
        }
    }
}

/// Returns the tier whose bucket contains the 75th percentile.
///
/// Buckets are sorted by `start` first, so input order does not matter. The walk
/// stops at the first bucket where the running density reaches [`P75_THRESHOLD`].
///
/// # Errors
///
/// - [`ClassifyError::InvalidHistogram`] unless there are exactly three buckets.
/// - [`ClassifyError::Unclassified`] if the densities never reach the threshold,
///   which includes histograms containing NaN densities.
pub fn classify(histogram: &MetricHistogram) -> Result<QualityTier, ClassifyError> {
    let buckets = histogram.buckets();
    if buckets.len() != QualityTier::ALL.len() {
        return Err(ClassifyError::InvalidHistogram {
            buckets: buckets.len(),
        });
    }

    let mut cdf = 0.0;
    for (tier, bucket) in QualityTier::ALL.into_iter().zip(histogram.sorted()) {
        cdf += bucket.density;
        if cdf >= P75_THRESHOLD {
            return Ok(tier);
        }
    }

    Err(ClassifyError::Unclassified { cumulative: cdf })
}

//-----------------------------------------------------------------------------
// Wire helpers: CrUX sends CLS bounds as strings ("0.10") and the rest as numbers.
//-----------------------------------------------------------------------------

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    String(String),
}

impl NumberOrString {
    fn into_f64<E: serde::de::Error>(self) -> Result<f64, E> {
        match self {
            NumberOrString::Number(n) => Ok(n),
            NumberOrString::String(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|e| E::custom(format!("invalid numeric string '{s}': {e}"))),
        }
    }
}

fn de_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    NumberOrString::deserialize(deserializer)?.into_f64()
}

fn de_opt_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<NumberOrString>::deserialize(deserializer)?
        .map(NumberOrString::into_f64)
        .transpose()
}
