mod error;
mod loader;
pub mod types;
mod validation;

pub use error::ConfigError;
pub use loader::{
    API_KEY_ENV, DEFAULT_CONFIG_FILE, apply_api_key_override, load_config, load_config_or_default,
    parse_config,
};
pub use types::{CacheConfig, Config, FieldConfig, FormFactor, ReportConfig};
pub use validation::validate_config;
