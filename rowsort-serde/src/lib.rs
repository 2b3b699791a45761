//! Zero-copy field comparators and skippers over serialized record
//! buffers.
//!
//! A record is a concatenation of typed fields. An external dispatcher
//! walks a schema and, per field slot, calls either the comparator for
//! that type (consuming one field from each of two [`Cursor`]s and
//! returning an [`std::cmp::Ordering`]) or the skipper (consuming one
//! field from a single cursor). Comparators advance **both** cursors past
//! their field on every path, ties included, so the dispatcher can move
//! on to the next field without re-parsing.
//!
//! Field wire formats (numeric payloads little-endian):
//!
//! | type      | encoding                                              |
//! |-----------|-------------------------------------------------------|
//! | boolean   | 1 byte: -1 null, 0 false, 1 true                      |
//! | byte..double | header byte (0 = null) + fixed-width LE payload    |
//! | date      | i32, negative = null                                  |
//! | date-time | i64, negative = null                                  |
//! | string    | compact-varint byte length (negative = null) + bytes  |
//! | decimal   | header + varint scale + varint or length-prefixed     |
//! |           | big-endian magnitude (see [`compare::compare_decimal`])|
//!
//! The comparators trust their input: the producer in this workspace is
//! the [`encode`] module, and validation belongs upstream. Malformed
//! buffers panic. The [`decode`] module offers checked, `Result`-based
//! readers for byte streams that cannot be trusted.

#![forbid(unsafe_code)]

pub mod compare;
pub mod cursor;
pub mod decode;
pub mod encode;
pub mod skip;
pub mod varint;

pub use compare::*;
pub use cursor::Cursor;
pub use skip::*;

/// Header byte marking a null numeric field; any other value means a
/// payload follows.
pub const NULL_HEADER: i8 = 0;

/// Decimal header for null (no further bytes follow).
pub const DECIMAL_NULL: i8 = 0;

/// Decimal header bit: value present.
pub const DECIMAL_PRESENT_MASK: i8 = 1;

/// Decimal header bit: value is non-negative.
pub const DECIMAL_PLUS_MASK: i8 = 1 << 1;

/// Decimal header bit: significand is a compact varint rather than a
/// length-prefixed big-endian magnitude.
pub const DECIMAL_COMPACT_MASK: i8 = 1 << 2;
