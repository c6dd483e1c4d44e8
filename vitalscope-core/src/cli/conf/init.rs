use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

pub const CONFIG_TEMPLATE: &str = include_str!("../../../config-templates/vitalscope.hcl");

pub fn init(path: &Path) -> Result<()> {
    write_template(path)?;

    // User feedback
    println!("✔ Initialized vitalscope config in {}", path.display());
    println!();
    println!("Next steps:");
    println!("  set field.api_key (or export VITALSCOPE_API_KEY)");
    println!("  vitalscope config check --config {}", path.display());
    println!("  vitalscope report --url https://example.com/");

    Ok(())
}

pub fn write_template(path: &Path) -> Result<()> {
    // Refuse to overwrite an existing config
    if path.exists() {
        bail!("{} already exists", path.display());
    }

    fs::write(path, CONFIG_TEMPLATE.trim_start())
        .with_context(|| format!("failed to create {}", path.display()))
}
