use crate::crux::error::RemoteQueryError;
use crate::metrics::{MetricHistogram, MetricKind};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field data for one origin, reduced to the three metrics that get classified.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemoteRecord {
    pub origin: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_factor: Option<String>,
    pub lcp: MetricHistogram,
    pub fid: MetricHistogram,
    pub cls: MetricHistogram,
}

impl RemoteRecord {
    pub fn metric(&self, kind: MetricKind) -> &MetricHistogram {
        match kind {
            MetricKind::Lcp => &self.lcp,
            MetricKind::Fid => &self.fid,
            MetricKind::Cls => &self.cls,
        }
    }
}

/// Decodes a `records:queryRecord` response body.
pub fn parse_response(body: &[u8]) -> Result<RemoteRecord, RemoteQueryError> {
    let response: QueryResponse = serde_json::from_slice(body)?;
    response.into_result()
}

//-----------------------------------------------------------------------------
// Wire model
//-----------------------------------------------------------------------------

#[derive(Deserialize)]
#[serde(untagged)]
enum QueryResponse {
    // Tried first: any body carrying `error` is a failure, whatever else it holds.
    Failure { error: ApiErrorBody },
    Success { record: RawRecord },
}

#[derive(Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: u16,
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
}

#[derive(Deserialize)]
struct RawRecord {
    key: RecordKey,
    // Other metrics (navigation types, TTFB, ...) have shapes we don't classify.
    metrics: Map<String, Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordKey {
    #[serde(default)]
    origin: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    form_factor: Option<String>,
}

impl QueryResponse {
    fn into_result(self) -> Result<RemoteRecord, RemoteQueryError> {
        match self {
            QueryResponse::Failure { error } => Err(RemoteQueryError::Api {
                code: error.code,
                status: error.status,
                message: error.message,
            }),
            QueryResponse::Success { record } => record.into_record(),
        }
    }
}

impl RawRecord {
    fn into_record(mut self) -> Result<RemoteRecord, RemoteQueryError> {
        let mut take = |kind: MetricKind| -> Result<MetricHistogram, RemoteQueryError> {
            let name = kind.crux_name();
            let value = self
                .metrics
                .remove(name)
                .ok_or(RemoteQueryError::MissingMetric { name })?;
            serde_json::from_value(value)
                .map_err(|source| RemoteQueryError::MalformedMetric { name, source })
        };

        let lcp = take(MetricKind::Lcp)?;
        let fid = take(MetricKind::Fid)?;
        let cls = take(MetricKind::Cls)?;

        Ok(RemoteRecord {
            origin: self.key.origin.or(self.key.url).unwrap_or_default(),
            form_factor: self.key.form_factor,
            lcp,
            fid,
            cls,
        })
    }
}
