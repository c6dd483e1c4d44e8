use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const CRUX_API_URL: &str = "https://chromeuxreport.googleapis.com/v1/records:queryRecord";
pub const PSI_URL: &str = "https://developers.google.com/speed/pagespeed/insights/";

/// Top-level configuration file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub field: FieldConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

/// Remote field data (Chrome UX Report) settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FieldConfig {
    /// When disabled the field report is never requested.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default, skip_serializing)]
    pub api_key: String,

    #[serde(default)]
    pub form_factor: FormFactor,

    /// Whole-request timeout for the CrUX query.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl FieldConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            api_url: default_api_url(),
            api_key: String::new(),
            form_factor: FormFactor::default(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_api_url() -> String {
    CRUX_API_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormFactor {
    #[default]
    Desktop,
    Phone,
    Tablet,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CacheConfig {
    /// JSON file shared with the collector. Without it an in-memory store is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    /// PageSpeed Insights front-end linked from the field report.
    #[serde(default = "default_psi_url")]
    pub psi_url: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            psi_url: default_psi_url(),
        }
    }
}

fn default_psi_url() -> String {
    PSI_URL.to_string()
}
