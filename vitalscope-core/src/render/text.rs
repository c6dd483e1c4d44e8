use crate::metrics::{LocalMetricEntry, LocalReport, MetricKind, OverallLabel, QualityTier};
use crate::render::sink::PresentationSink;
use crate::report::FieldReport;
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::Mutex;

const LEARN_MORE_URL: &str = "https://web.dev/load-fast-enough-for-pwa/";

/// Writes plain-text reports, one block per render call.
pub struct TextSink<W> {
    out: Mutex<W>,
    color: bool,
}

impl TextSink<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write + Send> TextSink<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out: Mutex::new(out),
            color,
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn emit(&self, text: &str) {
        let mut out = self.out.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Err(e) = writeln!(out, "{text}").and_then(|_| out.flush()) {
            tracing::warn!(error = %e, "failed to write report");
        }
    }
}

impl<W: Write + Send> PresentationSink for TextSink<W> {
    fn render_field(&self, report: &FieldReport) {
        self.emit(&render_field(report, self.color));
    }

    fn render_field_failure(&self, message: &str) {
        self.emit(message);
    }

    fn render_local(&self, report: &LocalReport) {
        self.emit(&render_local(report, self.color));
    }

    fn render_local_unavailable(&self) {
        self.emit(&render_local_unavailable());
    }
}

//-----------------------------------------------------------------------------
// Field data
//-----------------------------------------------------------------------------

pub fn render_field(report: &FieldReport, color: bool) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Origin Performance ({})\n\n",
        paint(report.overall.as_str(), label_style(report.overall), color)
    ));

    for metric in &report.metrics {
        out.push_str(&format!(
            "{}  [{}]\n",
            metric.kind,
            paint(metric.tier.as_str(), tier_style(metric.tier), color)
        ));

        for (tier, bucket) in QualityTier::ALL.iter().zip(metric.histogram.buckets()) {
            let pct = bucket.density * 100.0;
            // Densities are unchecked. NaN survives the clamp and casts to 0.
            let bars = ((bucket.density.clamp(0.0, 1.0) * 20.0).floor() as usize).max(1);
            out.push_str(&format!(
                "  {:<8} {:<20} {:>3}%\n",
                tier.bar_class(),
                "█".repeat(bars),
                pct.round()
            ));
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "View Report on PageSpeed Insights: {}\n",
        report.psi_link
    ));

    out
}

//-----------------------------------------------------------------------------
// Local data
//-----------------------------------------------------------------------------

pub fn render_local(report: &LocalReport, color: bool) -> String {
    let mut out = String::new();

    if let Some(location) = &report.location {
        match &report.timestamp {
            Some(ts) => out.push_str(&format!("{} - {ts}\n", location.short_url)),
            None => out.push_str(&format!("{}\n", location.short_url)),
        }
        out.push('\n');
    }

    out.push_str("Metrics\n");
    for entry in report.entries() {
        let verdict = if entry.pass { "pass" } else { "fail" };
        let verdict = if color {
            if entry.pass {
                verdict.green().to_string()
            } else {
                verdict.red().to_string()
            }
        } else {
            verdict.to_string()
        };

        let title = match state_suffix(entry) {
            Some(state) => format!("{} {state}", entry.kind.title()),
            None => entry.kind.title().to_string(),
        };

        out.push_str(&format!(
            "  [{verdict}] {title:<42} {}\n",
            display_value(entry).unwrap_or_default()
        ));

        if entry.caveat {
            out.push_str("         Value inflated as tab was loaded in background\n");
        }
    }

    out.push_str(&format!(
        "\nMobile performance may be significantly slower. Learn more: {LEARN_MORE_URL}\n"
    ));

    out
}

pub fn render_local_unavailable() -> String {
    "No local metrics recorded for this page yet.".to_string()
}

/// LCP in seconds, FID in milliseconds once an input happened, CLS unitless.
fn display_value(entry: &LocalMetricEntry) -> Option<String> {
    match entry.kind {
        MetricKind::Lcp => Some(format!("{:.2} s", entry.value / 1000.0)),
        MetricKind::Fid if entry.is_final => Some(format!("{:.2} ms", entry.value)),
        MetricKind::Fid => None,
        MetricKind::Cls => Some(format!("{:.3}", entry.value)),
    }
}

fn state_suffix(entry: &LocalMetricEntry) -> Option<&'static str> {
    match (entry.is_final, entry.kind) {
        (true, _) => None,
        (false, MetricKind::Fid) => Some("(waiting for input)"),
        (false, _) => Some("(might change)"),
    }
}

//-----------------------------------------------------------------------------
// Colour
//-----------------------------------------------------------------------------

#[derive(Clone, Copy)]
enum Style {
    Green,
    Yellow,
    Red,
}

fn tier_style(tier: QualityTier) -> Style {
    match tier {
        QualityTier::Good => Style::Green,
        QualityTier::NeedsImprovement => Style::Yellow,
        QualityTier::Poor => Style::Red,
    }
}

fn label_style(label: OverallLabel) -> Style {
    match label {
        OverallLabel::Good => Style::Green,
        OverallLabel::NeedsImprovement => Style::Yellow,
        OverallLabel::Poor => Style::Red,
    }
}

fn paint(text: &str, style: Style, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match style {
        Style::Green => text.green().to_string(),
        Style::Yellow => text.yellow().to_string(),
        Style::Red => text.red().to_string(),
    }
}
