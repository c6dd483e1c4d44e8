use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    //-------------------------------------------------------------------------
    // IO / Parsing
    //-------------------------------------------------------------------------
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration file: {path}\n\n{source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: hcl::Error,
    },

    //-------------------------------------------------------------------------
    // Field data
    //-------------------------------------------------------------------------
    #[error("field data is enabled but no API key is configured")]
    #[diagnostic(code(vitalscope::config::missing_api_key))]
    MissingApiKey,

    #[error("invalid timeout '{timeout_ms}ms': must be greater than zero")]
    #[diagnostic(code(vitalscope::config::invalid_timeout))]
    InvalidTimeout { timeout_ms: u64 },

    //-------------------------------------------------------------------------
    // Shared
    //-------------------------------------------------------------------------
    #[error("invalid URL for '{field}': '{value}' ({reason})")]
    #[diagnostic(code(vitalscope::config::invalid_url))]
    InvalidUrl {
        field: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: hcl::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
