use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassifyError {
    #[error("histogram must contain exactly 3 buckets, got {buckets}")]
    InvalidHistogram { buckets: usize },

    #[error("cumulative density never reached the 75th percentile (reached {cumulative})")]
    Unclassified { cumulative: f64 },
}
