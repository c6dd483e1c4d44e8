mod field;
#[cfg(test)]
pub(crate) mod tests;

pub use field::{FieldMetric, FieldReport, psi_link};
