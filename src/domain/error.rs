//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the seating model's rules.
///
/// Running out of seats is not an error: `Row::reserve_block` reports a
/// capacity shortfall as `Ok(false)` so the caller can try the next row.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    #[error("seat {seat} already reserved for {customer}")]
    AlreadyReserved { seat: String, customer: String },

    #[error("row {row} out of range: theater has rows 1..={rows}")]
    OutOfRange { row: usize, rows: usize },
}

impl DomainError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
