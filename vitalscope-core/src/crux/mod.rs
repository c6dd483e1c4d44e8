//! Chrome UX Report field data.
//!
//! The API answers either `{ "record": ... }` or `{ "error": ... }`, often with a
//! non-2xx status. Both shapes are decoded into one `Result` so callers never
//! inspect ad hoc fields.

mod adapter;
mod client;
mod error;
#[cfg(test)]
mod tests;
mod types;

pub use adapter::FetchAdapter;
pub use client::{CruxClient, origin_of};
pub use error::RemoteQueryError;
pub use types::{RemoteRecord, parse_response};
