use crate::conf::error::ConfigError;
use crate::conf::types::Config;
use crate::conf::validation::validate_config;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "vitalscope.hcl";
pub const API_KEY_ENV: &str = "VITALSCOPE_API_KEY";

/// Read, parse and validate a config file. `VITALSCOPE_API_KEY` overrides `field.api_key`.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let cfg = parse_config(path, &raw)?;
    finish(cfg)
}

/// Loads `path` if given, else `vitalscope.hcl` from the working directory if it
/// exists, else the built-in defaults.
pub fn load_config_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = path {
        return load_config(path);
    }

    let fallback = Path::new(DEFAULT_CONFIG_FILE);
    if fallback.is_file() {
        return load_config(fallback);
    }

    tracing::debug!("no config file found, using defaults");
    finish(Config::default())
}

pub fn parse_config(path: &Path, raw: &str) -> Result<Config, ConfigError> {
    hcl::from_str(raw).map_err(|e| ConfigError::parse(path, e))
}

pub fn apply_api_key_override(mut cfg: Config, api_key: Option<String>) -> Config {
    if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
        cfg.field.api_key = key;
    }
    cfg
}

fn finish(cfg: Config) -> Result<Config, ConfigError> {
    let cfg = apply_api_key_override(cfg, std::env::var(API_KEY_ENV).ok());
    validate_config(&cfg)?;
    Ok(cfg)
}
