use crate::conf::{API_KEY_ENV, ConfigError, load_config};
use miette::Report;
use std::path::PathBuf;

pub fn check(path: PathBuf, plain: bool) -> anyhow::Result<()> {
    match load_config(&path) {
        Ok(cfg) => {
            println!("✔ Config loaded successfully");
            if cfg.field.enabled {
                println!(
                    "✔ field data enabled ({:?}, timeout {}ms)",
                    cfg.field.form_factor, cfg.field.timeout_ms
                );
            } else {
                println!("✔ field data disabled");
            }
            match &cfg.cache.path {
                Some(p) => println!("✔ cache file {}", p.display()),
                None => println!("✔ in-memory cache"),
            }
            Ok(())
        }
        Err(err) => {
            print_config_error(err, plain);
            std::process::exit(1);
        }
    }
}

fn print_config_error(err: ConfigError, plain: bool) {
    let hint = config_error_hint(&err);
    if plain {
        eprintln!("{}", err);
    } else {
        eprintln!();
        eprintln!("{:?}", Report::new(err));
    }
    if let Some(hint) = hint {
        eprintln!();
        eprintln!("{}", hint);
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<String> {
    match err {
        ConfigError::MissingApiKey => Some(format!(
            "Field data needs a Chrome UX Report API key.\n\
             \n\
             Either set it in the config:\n\
             \n\
             field {{\n\
             \x20 api_key = \"...\"\n\
             }}\n\
             \n\
             or export {API_KEY_ENV}, or disable field data with `enabled = false`."
        )),

        ConfigError::InvalidTimeout { .. } => Some(
            "The CrUX request timeout must be at least 1ms.\n\
             \n\
             field {\n\
             \x20 timeout_ms = 10000\n\
             }"
            .to_string(),
        ),

        ConfigError::InvalidUrl { .. } => {
            Some("URLs must be absolute and use the http or https scheme.".to_string())
        }

        //---------------------------------------------------------------------
        // Everything else: no hint
        //---------------------------------------------------------------------
        _ => None,
    }
}
