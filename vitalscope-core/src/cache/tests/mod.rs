
use crate::metrics::{LocalMetricBundle, LocalMetricSample, LocalSamples, PageLocation};

/// Helper: a plausible collector record
pub(super) fn bundle(url: &str) -> LocalMetricBundle {
    let sample = |value, pass, is_final| LocalMetricSample {
        value,
        pass,
        is_final,
    };

    LocalMetricBundle {
        location: PageLocation {
            url: url.to_string(),
            short_url: url.trim_start_matches("https://").to_string(),
        },
        timestamp: Some("2020-05-05T10:42:07Z".into()),
        samples: LocalSamples {
            lcp: sample(1800.0, true, true),
            fid: sample(12.0, true, true),
            cls: sample(0.12, false, false),
        },
    }
}
