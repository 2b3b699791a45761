//! Multi-precision unsigned integers and exponent-aligned decimal
//! comparison.
//!
//! Sorted-run merging compares serialized decimal fields once per row pair,
//! so the comparison path has to be cheap: [`Decimal::compare_to`] orders
//! `significand × 10^exponent` pairs without normalizing them to a common
//! scale unless it absolutely must. The layering, fastest first:
//!
//! 1. equal exponents compare significands directly;
//! 2. u64 significands use a divmod against a 64-bit power of ten instead
//!    of constructing the scaled value;
//! 3. multi-precision operands go through a bit-length pre-filter that
//!    decides most mismatched-magnitude cases without multiplying;
//! 4. only when the filter cannot decide is the scaled significand
//!    materialized, against a process-wide cache of 10^k values.
//!
//! [`BigUint`] provides exactly the arithmetic the comparison needs
//! (construction, bit length, comparison, multiplication) and nothing more.

#![forbid(unsafe_code)]

pub mod biguint;
pub mod decimal;

pub use biguint::BigUint;
pub use decimal::{
    compare_decimal_bytes, compare_decimal_bytes_u64, compare_decimal_u64,
    compare_decimal_u64_bytes, Decimal, Significand,
};
