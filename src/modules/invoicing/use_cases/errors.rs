use crate::shared::infrastructure::event_store::EventStoreError;
use crate::shared::infrastructure::intent_outbox::OutboxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    VersionConflict(#[from] EventStoreError),

    #[error(transparent)]
    Outbox(#[from] OutboxError),

    #[error("billing sources unavailable: {0}")]
    Sources(String),

    #[error("invoice numbering failed: {0}")]
    Numbering(String),

    #[error("vat rate must be a non-negative number, got {0}")]
    InvalidVatRate(f64),

    #[error("domain rejected: {0}")]
    Domain(String),
}
