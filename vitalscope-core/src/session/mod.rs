//! One popup lifetime.
//!
//! Opening a session starts two independent paths for the active tab:
//!
//! - field: fetch the origin's CrUX record, classify it, render it once
//! - local: read the collector's bundle and background flag, render the local report
//!
//! Neither path waits for the other. Failures on either path are rendered at this
//! boundary and never propagate out of [`PopupSession::open`].

mod error;
mod popup;
mod state;
#[cfg(test)]
mod tests;

pub use error::FieldReportError;
pub use popup::{FieldOutcome, LocalOutcome, PopupSession, SessionOutcome, Tab};
pub use state::{FetchGuard, FetchState};
