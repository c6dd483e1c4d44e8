use crate::cache::{CacheAdapter, derive_key, tab_flag_key};
use crate::crux::{FetchAdapter, RemoteQueryError, RemoteRecord};
use crate::metrics::{OverallLabel, build_bundle_report};
use crate::render::{FAILURE_MESSAGE, PresentationSink};
use crate::report::FieldReport;
use crate::session::error::FieldReportError;
use crate::session::state::{FetchGuard, FetchState};
use std::sync::Arc;

/// The active browser tab the popup was opened for.
#[derive(Debug, Clone)]
pub struct Tab {
    pub id: Option<u64>,
    pub url: String,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FieldOutcome {
    /// Field data is switched off.
    Disabled,
    /// Another fetch is in flight or the report was already rendered.
    Skipped,
    Rendered(OverallLabel),
    /// The failure message was rendered instead.
    Failed,
    /// A completion arrived after the session stopped waiting for one.
    Ignored,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LocalOutcome {
    Rendered,
    Unavailable,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SessionOutcome {
    pub field: FieldOutcome,
    pub local: LocalOutcome,
}

pub struct PopupSession {
    fetcher: Option<Arc<dyn FetchAdapter>>,
    cache: Arc<dyn CacheAdapter>,
    sink: Arc<dyn PresentationSink>,
    psi_url: String,
    fetch: FetchGuard,
}

impl PopupSession {
    /// A session with field data disabled. See [`PopupSession::with_fetcher`].
    pub fn new(
        cache: Arc<dyn CacheAdapter>,
        sink: Arc<dyn PresentationSink>,
        psi_url: impl Into<String>,
    ) -> Self {
        Self {
            fetcher: None,
            cache,
            sink,
            psi_url: psi_url.into(),
            fetch: FetchGuard::new(),
        }
    }

    pub fn with_fetcher(mut self, fetcher: Arc<dyn FetchAdapter>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    pub fn fetch_state(&self) -> FetchState {
        self.fetch.state()
    }

    /// Runs the field and local paths concurrently and renders both.
    pub async fn open(&self, tab: &Tab) -> SessionOutcome {
        let (field, local) = tokio::join!(self.show_field_report(&tab.url), self.show_local_report(tab));
        SessionOutcome { field, local }
    }

    pub async fn show_field_report(&self, page_url: &str) -> FieldOutcome {
        let Some(fetcher) = &self.fetcher else {
            return FieldOutcome::Disabled;
        };

        if !self.fetch.try_begin() {
            tracing::debug!(state = ?self.fetch.state(), "field report already requested");
            return FieldOutcome::Skipped;
        }

        let result = fetcher.query(page_url).await;
        self.complete_fetch(result)
    }

    /// Fetch completion handler. Renders the field report or the failure message,
    /// at most once per successful fetch.
    pub fn complete_fetch(&self, result: Result<RemoteRecord, RemoteQueryError>) -> FieldOutcome {
        let report = result
            .map_err(FieldReportError::from)
            .and_then(|record| {
                FieldReport::from_record(&record, &self.psi_url).map_err(FieldReportError::from)
            });

        match report {
            Ok(report) => {
                if !self.fetch.mark_rendered() {
                    tracing::debug!(origin = %report.origin, "dropping duplicate field report");
                    return FieldOutcome::Ignored;
                }
                self.sink.render_field(&report);
                tracing::info!(
                    origin = %report.origin,
                    overall = %report.overall,
                    lcp = %report.metrics[0].tier,
                    fid = %report.metrics[1].tier,
                    cls = %report.metrics[2].tier,
                    "field report rendered"
                );
                FieldOutcome::Rendered(report.overall)
            }
            Err(e) => {
                if !self.fetch.reset() {
                    tracing::debug!(error = %e, "dropping late field failure");
                    return FieldOutcome::Ignored;
                }
                tracing::warn!(error = %e, "field report unavailable");
                self.sink.render_field_failure(FAILURE_MESSAGE);
                FieldOutcome::Failed
            }
        }
    }

    pub async fn show_local_report(&self, tab: &Tab) -> LocalOutcome {
        if tab.url.is_empty() {
            self.sink.render_local_unavailable();
            return LocalOutcome::Unavailable;
        }

        let key = derive_key(&tab.url);
        let flag = async {
            match tab.id {
                Some(id) => self.cache.get_flag(&tab_flag_key(id)).await,
                None => Ok(None),
            }
        };
        let (bundle, flag) = tokio::join!(self.cache.get_samples(&key), flag);

        let background = flag.unwrap_or_else(|e| {
            tracing::warn!(error = %e, tab = ?tab.id, "background flag unreadable");
            None
        });

        match bundle {
            Ok(Some(bundle)) => {
                let report = build_bundle_report(&bundle, background.unwrap_or(false));
                self.sink.render_local(&report);
                tracing::debug!(key = %key, background = ?background, "local report rendered");
                LocalOutcome::Rendered
            }
            Ok(None) => {
                tracing::debug!(key = %key, "no local metrics for page");
                self.sink.render_local_unavailable();
                LocalOutcome::Unavailable
            }
            Err(e) => {
                tracing::warn!(error = %e, key = %key, "local metrics unreadable");
                self.sink.render_local_unavailable();
                LocalOutcome::Unavailable
            }
        }
    }
}
