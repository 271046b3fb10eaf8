use tracing::info;

use crate::form::domain::ApplicationRecord;

/// Outbound hand-off for accepted applications. What the collaborator does
/// with the record (network call, storage) is outside this crate.
pub trait SubmitHandler: Send + Sync {
    fn deliver(&self, record: &ApplicationRecord) -> Result<(), SubmitError>;
}

/// Hand-off failure. Always recoverable; the session stays editable so the
/// applicant can resubmit.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("submit hand-off failed: {0}")]
    Delivery(String),
    #[error("accepted record could not be serialized: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Logs accepted records as JSON, standing in for a real transport.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSubmitHandler;

impl SubmitHandler for LoggingSubmitHandler {
    fn deliver(&self, record: &ApplicationRecord) -> Result<(), SubmitError> {
        let payload = serde_json::to_string(record)?;
        info!(applicant = %record.full_name, %payload, "application accepted");
        Ok(())
    }
}
