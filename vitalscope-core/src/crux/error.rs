use thiserror::Error;

#[derive(Debug, Error)]
pub enum RemoteQueryError {
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("URL '{url}' has an opaque origin")]
    OpaqueOrigin { url: String },

    #[error("CrUX request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("CrUX API returned HTTP {status} with an unreadable body")]
    Status { status: u16 },

    #[error("CrUX API error {code} ({status}): {message}")]
    Api {
        code: u16,
        status: String,
        message: String,
    },

    #[error("unexpected CrUX response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("CrUX record has no '{name}' metric")]
    MissingMetric { name: &'static str },

    #[error("CrUX metric '{name}' is malformed: {source}")]
    MalformedMetric {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
