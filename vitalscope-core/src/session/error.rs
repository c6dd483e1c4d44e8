use crate::crux::RemoteQueryError;
use crate::metrics::ClassifyError;

#[derive(Debug, thiserror::Error)]
pub enum FieldReportError {
    #[error(transparent)]
    Remote(#[from] RemoteQueryError),

    #[error(transparent)]
    Classify(#[from] ClassifyError),
}
