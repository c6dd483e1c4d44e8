pub mod conf;
mod key;
mod record;
mod report;
#[cfg(test)]
mod tests;

pub use key::key;
pub use record::record;
pub use report::{ReportArgs, build_session, report};
