//! Error and warning types.
//!
//! Fatal conditions abort the call and surface as [`Error`]. Recoverable
//! conditions never abort: they are carried next to the result as a
//! [`RandWarning`].

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A secondary ordering column does not have the length of the first one.
    #[error("argument lengths differ: column {column} has length {found}, expected {expected}")]
    ArgumentLengthMismatch {
        column: usize,
        expected: usize,
        found: usize,
    },
    /// A length argument resolved to NA or to a negative value.
    #[error("invalid arguments: length must be a non-negative integer, got {0}")]
    InvalidLengthSpec(String),
}

/// Recoverable condition raised by vectorized random generation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandWarning {
    #[error("NAs produced")]
    NaProduced,
    #[error("NaNs produced")]
    NanProduced,
}
