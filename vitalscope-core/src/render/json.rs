use crate::metrics::LocalReport;
use crate::render::sink::PresentationSink;
use crate::report::FieldReport;
use serde::Serialize;
use serde_json::json;
use std::io::{self, Write};
use std::sync::Mutex;

/// Writes one JSON document per line, tagged with the section it belongs to.
pub struct JsonSink<W> {
    out: Mutex<W>,
}

impl JsonSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn emit<T: Serialize>(&self, section: &str, status: &str, body: T) {
        let doc = json!({ "section": section, "status": status, "body": body });
        let mut out = self.out.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let written = serde_json::to_writer(&mut *out, &doc)
            .map_err(io::Error::from)
            .and_then(|_| writeln!(out))
            .and_then(|_| out.flush());
        if let Err(e) = written {
            tracing::warn!(error = %e, section, "failed to write report");
        }
    }
}

impl<W: Write + Send> PresentationSink for JsonSink<W> {
    fn render_field(&self, report: &FieldReport) {
        self.emit("field", "ok", report);
    }

    fn render_field_failure(&self, message: &str) {
        self.emit("field", "error", json!({ "message": message }));
    }

    fn render_local(&self, report: &LocalReport) {
        self.emit("local", "ok", report);
    }

    fn render_local_unavailable(&self) {
        self.emit("local", "unavailable", serde_json::Value::Null);
    }
}
