use crate::cache::{CacheAdapter, JsonFileCache, MemoryCache};
use crate::conf::{Config, load_config_or_default};
use crate::crux::CruxClient;
use crate::logging::OutputFormat;
use crate::render::{JsonSink, PresentationSink, TextSink};
use crate::session::{PopupSession, SessionOutcome, Tab};
use anyhow::Context;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ReportArgs {
    pub url: String,
    pub tab: Option<u64>,
    pub config: Option<PathBuf>,
    pub format: OutputFormat,
}

pub async fn report(args: ReportArgs) -> anyhow::Result<SessionOutcome> {
    let cfg = load_config_or_default(args.config.as_deref()).context("failed to load config")?;
    let session = build_session(&cfg, args.format)?;

    let tab = Tab {
        id: args.tab,
        url: args.url,
    };
    let outcome = session.open(&tab).await;
    tracing::debug!(?outcome, "popup session finished");

    Ok(outcome)
}

pub fn build_session(cfg: &Config, format: OutputFormat) -> anyhow::Result<PopupSession> {
    let cache: Arc<dyn CacheAdapter> = match &cfg.cache.path {
        Some(path) => Arc::new(JsonFileCache::new(path)),
        None => Arc::new(MemoryCache::new()),
    };

    let sink: Arc<dyn PresentationSink> = match format {
        OutputFormat::Text => Arc::new(TextSink::stdout(io::stdout().is_terminal())),
        OutputFormat::Json => Arc::new(JsonSink::stdout()),
    };

    let session = PopupSession::new(cache, sink, cfg.report.psi_url.clone());
    if !cfg.field.enabled {
        return Ok(session);
    }

    let client = CruxClient::from_config(&cfg.field).context("failed to build CrUX client")?;
    Ok(session.with_fetcher(Arc::new(client)))
}
