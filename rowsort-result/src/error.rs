use std::fmt;

use thiserror::Error;

/// Unified error type for the rowsort checked-reader APIs.
///
/// Errors propagate upward with the `?` operator. The comparator and
/// skipper entry points never return this type: they trust their input and
/// treat malformed bytes as a caller bug.
#[derive(Error, Debug)]
pub enum Error {
    /// The input buffer ended before a complete field could be read.
    #[error("unexpected end of input: need {needed} more bytes, {remaining} remaining")]
    UnexpectedEof {
        /// Bytes the reader still needed.
        needed: usize,
        /// Bytes left in the buffer.
        remaining: usize,
    },

    /// Invalid user input or API parameter.
    ///
    /// Raised when a checked reader encounters bytes that no conforming
    /// writer produces: impossible header combinations, negative lengths
    /// where only null's sentinel is negative, out-of-range scales.
    #[error("Invalid argument: {0}")]
    InvalidArgumentError(String),

    /// Internal error indicating a bug or unexpected state.
    ///
    /// This should never occur during normal operation.
    #[error("An internal operation failed: {0}")]
    Internal(String),
}

impl Error {
    /// Create an [`Error::InvalidArgumentError`] from any displayable value.
    #[inline]
    pub fn invalid_argument<E: fmt::Display>(err: E) -> Self {
        Error::InvalidArgumentError(err.to_string())
    }
}
