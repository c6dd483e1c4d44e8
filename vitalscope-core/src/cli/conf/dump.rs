use crate::conf::load_config;
use std::path::PathBuf;

/// Prints the resolved configuration. The API key is never included.
pub fn dump(path: PathBuf) -> anyhow::Result<()> {
    let cfg = load_config(&path)?;
    let s = serde_json::to_string_pretty(&cfg)?;
    println!("{s}");
    Ok(())
}
