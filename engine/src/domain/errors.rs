//! Error taxonomy for the reporting engine.
//!
//! Validation and not-found failures reject the operation with no partial
//! mutation. Source failures are surfaced as-is and leave the ledger's
//! cached aggregate at its last-known-good value. The engine performs no
//! automatic retries; every error is propagated for UI-level presentation.

use thiserror::Error;

/// Rejected input to an add or edit operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Description cannot be empty")]
    EmptyDescription,
    #[error("Amount must be a positive value")]
    NonPositiveAmount,
}

/// Rejected period specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PeriodError {
    #[error("Period start must not be after its end")]
    InvertedBounds,
    #[error("Date arithmetic left the supported calendar range")]
    UnrepresentableDate,
}

/// Failure of a category ledger operation.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("No entry with id '{id}' in the loaded set")]
    NotFound { id: String },
    #[error("Record source failure")]
    Source(#[source] anyhow::Error),
}
