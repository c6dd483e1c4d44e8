
use crate::metrics::{
    LocalMetricBundle, LocalMetricSample, LocalReport, LocalSamples, PageLocation,
    build_bundle_report,
};
use crate::report::FieldReport;

pub(super) fn field_report() -> FieldReport {
    let record = crate::report::tests::record([0.82, 0.1, 0.08], [0.6, 0.25, 0.15], [0.4, 0.2, 0.4]);
    FieldReport::from_record(&record, "https://psi.test/").unwrap()
}

pub(super) fn local_report(background: bool) -> LocalReport {
    let bundle = LocalMetricBundle {
        location: PageLocation {
            url: "https://example.com/a".into(),
            short_url: "example.com/a".into(),
        },
        timestamp: Some("10:42:07".into()),
        samples: LocalSamples {
            lcp: LocalMetricSample {
                value: 2300.0,
                pass: true,
                is_final: false,
            },
            fid: LocalMetricSample {
                value: 0.0,
                pass: true,
                is_final: false,
            },
            cls: LocalMetricSample {
                value: 0.31,
                pass: false,
                is_final: true,
            },
        },
    };
    build_bundle_report(&bundle, background)
}
