use crate::conf::{FieldConfig, FormFactor};
use crate::crux::adapter::FetchAdapter;
use crate::crux::error::RemoteQueryError;
use crate::crux::types::{RemoteRecord, parse_response};
use async_trait::async_trait;
use serde::Serialize;
use url::Url;

/// `records:queryRecord` client, querying by origin.
#[derive(Debug, Clone)]
pub struct CruxClient {
    http: reqwest::Client,
    endpoint: Url,
    form_factor: FormFactor,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryRequest<'a> {
    origin: &'a str,
    form_factor: FormFactor,
}

impl CruxClient {
    pub fn from_config(cfg: &FieldConfig) -> Result<Self, RemoteQueryError> {
        let http = reqwest::Client::builder().timeout(cfg.timeout()).build()?;
        Self::with_http_client(http, cfg)
    }

    pub fn with_http_client(
        http: reqwest::Client,
        cfg: &FieldConfig,
    ) -> Result<Self, RemoteQueryError> {
        let mut endpoint = Url::parse(&cfg.api_url).map_err(|e| RemoteQueryError::InvalidUrl {
            url: cfg.api_url.clone(),
            source: e,
        })?;
        endpoint.query_pairs_mut().append_pair("key", &cfg.api_key);

        Ok(Self {
            http,
            endpoint,
            form_factor: cfg.form_factor,
        })
    }
}

#[async_trait]
impl FetchAdapter for CruxClient {
    async fn query(&self, page_url: &str) -> Result<RemoteRecord, RemoteQueryError> {
        let origin = origin_of(page_url)?;
        tracing::debug!(origin, form_factor = ?self.form_factor, "querying CrUX");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&QueryRequest {
                origin: &origin,
                form_factor: self.form_factor,
            })
            .send()
            .await?;

        // Error payloads arrive with 4xx statuses, so the body is decoded first.
        let status = response.status();
        let body = response.bytes().await?;

        match parse_response(&body) {
            Err(RemoteQueryError::Decode(e)) if !status.is_success() => {
                tracing::debug!(error = %e, "undecodable CrUX error body");
                Err(RemoteQueryError::Status {
                    status: status.as_u16(),
                })
            }
            other => other,
        }
    }
}

/// `scheme://host[:port]` of a page URL.
pub fn origin_of(page_url: &str) -> Result<String, RemoteQueryError> {
    let url = Url::parse(page_url).map_err(|e| RemoteQueryError::InvalidUrl {
        url: page_url.to_string(),
        source: e,
    })?;

    let origin = url.origin();
    if !origin.is_tuple() {
        return Err(RemoteQueryError::OpaqueOrigin {
            url: page_url.to_string(),
        });
    }

    Ok(origin.ascii_serialization())
}
