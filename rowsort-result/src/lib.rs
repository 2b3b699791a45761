//! Error types and result definitions for the rowsort comparator engine.
//!
//! This crate provides the unified error type ([`Error`]) and result type
//! alias ([`Result<T>`]) shared by the rowsort crates. The comparator and
//! skipper hot paths deliberately have no error channel (their inputs are
//! produced by a trusted writer); the error type exists for the checked
//! reader layer, which consumes byte streams that cannot be trusted.

#![forbid(unsafe_code)]

pub mod error;
pub mod result;

pub use error::Error;
pub use result::Result;
