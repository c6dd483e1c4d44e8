mod adapter;
mod error;
mod file;
mod key;
mod memory;
#[cfg(test)]
mod tests;

pub use adapter::CacheAdapter;
pub use error::CacheError;
pub use file::JsonFileCache;
pub use key::{derive_key, tab_flag_key};
pub use memory::MemoryCache;
