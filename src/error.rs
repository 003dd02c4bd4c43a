//! Validation errors raised when a grade is refused by the ledger.

/// Why an entry was kept out of the ledger.
///
/// Both variants are recoverable: the ledger is unchanged and the caller may
/// retry or skip the entry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("'{0}' is not a valid number")]
    NotANumber(String),

    #[error("{0} is outside the 0-100 range")]
    OutOfRange(f64),
}
