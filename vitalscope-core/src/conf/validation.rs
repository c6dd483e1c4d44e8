use crate::conf::error::ConfigError;
use crate::conf::types::Config;
use url::Url;

/// Semantic checks that serde defaults can't express.
pub fn validate_config(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.field.enabled {
        if cfg.field.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        if cfg.field.timeout_ms == 0 {
            return Err(ConfigError::InvalidTimeout {
                timeout_ms: cfg.field.timeout_ms,
            });
        }
        validate_url("field.api_url", &cfg.field.api_url)?;
    }

    validate_url("report.psi_url", &cfg.report.psi_url)
}

fn validate_url(field: &'static str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value).map_err(|e| ConfigError::InvalidUrl {
        field,
        value: value.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidUrl {
            field,
            value: value.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(())
}
