use crate::shared::core::errors::DomainError;
use crate::shared::infrastructure::event_store::EventStoreError;
use thiserror::Error;

/// Failure of a query or command cycle. Both variants are transparent so the
/// caller sees the message produced where the failure happened.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    EventStore(#[from] EventStoreError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ApplicationError {
    pub fn is_version_conflict(&self) -> bool {
        matches!(
            self,
            ApplicationError::EventStore(EventStoreError::VersionMismatch { .. })
        )
    }
}
