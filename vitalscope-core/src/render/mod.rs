//! Presentation sinks.
//!
//! The session hands computed reports to a [`PresentationSink`] and never formats
//! anything itself. Text rendering is split into pure `render_*` functions that
//! return a `String`, and sinks that only decide where the string goes.

mod json;
mod sink;
mod text;
#[cfg(test)]
mod tests;

pub use json::JsonSink;
pub use sink::{FAILURE_MESSAGE, PresentationSink};
pub use text::{TextSink, render_field, render_local, render_local_unavailable};
