mod field_tests;

use crate::crux::RemoteRecord;
use crate::metrics::{Bucket, MetricHistogram};

/// Helper: histogram with buckets starting at 0, 1, 2 given in reverse order
pub(crate) fn reversed(densities: [f64; 3]) -> MetricHistogram {
    MetricHistogram::new(vec![
        Bucket::new(2.0, None, densities[2]),
        Bucket::new(1.0, Some(2.0), densities[1]),
        Bucket::new(0.0, Some(1.0), densities[0]),
    ])
}

pub(crate) fn record(lcp: [f64; 3], fid: [f64; 3], cls: [f64; 3]) -> RemoteRecord {
    RemoteRecord {
        origin: "https://example.com".into(),
        form_factor: None,
        lcp: reversed(lcp),
        fid: reversed(fid),
        cls: reversed(cls),
    }
}
