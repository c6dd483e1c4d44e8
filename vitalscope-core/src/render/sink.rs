use crate::metrics::LocalReport;
use crate::report::FieldReport;

/// Shown in place of the field report whenever it can't be produced.
pub const FAILURE_MESSAGE: &str = "We were unable to process your request.";

pub trait PresentationSink: Send + Sync {
    fn render_field(&self, report: &FieldReport);

    fn render_field_failure(&self, message: &str);

    fn render_local(&self, report: &LocalReport);

    /// Nothing was recorded locally for the page.
    fn render_local_unavailable(&self);
}
