use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging system with environment-based filtering
///
/// - Uses `RUST_LOG` for level filtering (defaults to "info" if not set)
/// - JSON output flattens event fields; text output is compact
/// - Always writes to stderr so stdout only carries the rendered reports
pub fn init_logging(format: OutputFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        OutputFormat::Json => fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .json()
            .flatten_event(true)
            .init(),
        OutputFormat::Text => fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .compact()
            .with_ansi(io::stderr().is_terminal())
            .init(),
    }
}

pub fn default_output_format() -> OutputFormat {
    if io::stdout().is_terminal() {
        OutputFormat::Text
    } else {
        OutputFormat::Json
    }
}

/// How reports (and the logs next to them) are written.
#[derive(Debug, Clone, Copy, Eq, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
