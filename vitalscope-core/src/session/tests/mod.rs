
use crate::crux::{FetchAdapter, RemoteQueryError, RemoteRecord};
use crate::metrics::{LocalReport, OverallLabel};
use crate::render::PresentationSink;
use crate::report::FieldReport;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Notify;

#[derive(Debug, Clone, PartialEq)]
pub(super) enum Rendered {
    Field(OverallLabel),
    Failure(String),
    Local(LocalReport),
    LocalUnavailable,
}

/// Helper: sink that records what it was asked to render
#[derive(Default)]
pub(super) struct RecordingSink {
    pub calls: Mutex<Vec<Rendered>>,
}

impl RecordingSink {
    pub fn rendered(&self) -> Vec<Rendered> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, pred: impl Fn(&Rendered) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|r| pred(r)).count()
    }
}

impl PresentationSink for RecordingSink {
    fn render_field(&self, report: &FieldReport) {
        self.calls.lock().unwrap().push(Rendered::Field(report.overall));
    }

    fn render_field_failure(&self, message: &str) {
        self.calls
            .lock()
            .unwrap()
            .push(Rendered::Failure(message.to_string()));
    }

    fn render_local(&self, report: &LocalReport) {
        self.calls
            .lock()
            .unwrap()
            .push(Rendered::Local(report.clone()));
    }

    fn render_local_unavailable(&self) {
        self.calls.lock().unwrap().push(Rendered::LocalUnavailable);
    }
}

/// Helper: fetcher replaying scripted responses; `None` is an API error
pub(super) struct ScriptedFetcher {
    pub calls: AtomicUsize,
    responses: Mutex<VecDeque<Option<RemoteRecord>>>,
    gate: Option<Notify>,
}

impl ScriptedFetcher {
    pub fn new(responses: Vec<Option<RemoteRecord>>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            responses: Mutex::new(responses.into()),
            gate: None,
        }
    }

    /// Every query waits until [`ScriptedFetcher::release`] is called.
    pub fn gated(responses: Vec<Option<RemoteRecord>>) -> Self {
        Self {
            gate: Some(Notify::new()),
            ..Self::new(responses)
        }
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FetchAdapter for ScriptedFetcher {
    async fn query(&self, _page_url: &str) -> Result<RemoteRecord, RemoteQueryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        let next = self.responses.lock().unwrap().pop_front().flatten();
        next.ok_or_else(|| RemoteQueryError::Api {
            code: 404,
            status: "NOT_FOUND".into(),
            message: "chrome ux report data not found".into(),
        })
    }
}
