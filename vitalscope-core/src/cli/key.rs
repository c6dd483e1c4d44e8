use crate::cache::derive_key;

pub fn key(url: &str) -> anyhow::Result<()> {
    println!("{}", derive_key(url));
    Ok(())
}
