//! Producer-side field writers.
//!
//! Each writer appends one field in the wire format the comparators and
//! skippers consume. `None` writes the type's null encoding.

use rowsort_decimal::BigUint;

use crate::varint::{write_compact_int, write_compact_long};
use crate::{DECIMAL_COMPACT_MASK, DECIMAL_NULL, DECIMAL_PLUS_MASK, DECIMAL_PRESENT_MASK, NULL_HEADER};

const NON_NULL_HEADER: i8 = 1;

/// Null sentinel for the sign-flagged encodings (boolean, date,
/// date-time, string length).
const UNSIGNED_NULL: i8 = -1;

pub fn write_boolean(dst: &mut Vec<u8>, value: Option<bool>) {
    match value {
        None => dst.push(UNSIGNED_NULL as u8),
        Some(v) => dst.push(v as u8),
    }
}

#[inline]
fn write_numeric<const N: usize>(dst: &mut Vec<u8>, payload: Option<[u8; N]>) {
    match payload {
        None => dst.push(NULL_HEADER as u8),
        Some(bytes) => {
            dst.push(NON_NULL_HEADER as u8);
            dst.extend_from_slice(&bytes);
        }
    }
}

pub fn write_byte(dst: &mut Vec<u8>, value: Option<i8>) {
    write_numeric(dst, value.map(i8::to_le_bytes));
}

pub fn write_short(dst: &mut Vec<u8>, value: Option<i16>) {
    write_numeric(dst, value.map(i16::to_le_bytes));
}

pub fn write_int(dst: &mut Vec<u8>, value: Option<i32>) {
    write_numeric(dst, value.map(i32::to_le_bytes));
}

pub fn write_long(dst: &mut Vec<u8>, value: Option<i64>) {
    write_numeric(dst, value.map(i64::to_le_bytes));
}

pub fn write_float(dst: &mut Vec<u8>, value: Option<f32>) {
    write_numeric(dst, value.map(f32::to_le_bytes));
}

pub fn write_double(dst: &mut Vec<u8>, value: Option<f64>) {
    write_numeric(dst, value.map(f64::to_le_bytes));
}

/// Non-null dates are clamped to zero: the negative range is reserved for
/// the null sentinel.
pub fn write_date(dst: &mut Vec<u8>, value: Option<i32>) {
    let raw = match value {
        None => -1i32,
        Some(v) => v.max(0),
    };
    dst.extend_from_slice(&raw.to_le_bytes());
}

pub fn write_date_time(dst: &mut Vec<u8>, value: Option<i64>) {
    let raw = match value {
        None => -1i64,
        Some(v) => v.max(0),
    };
    dst.extend_from_slice(&raw.to_le_bytes());
}

pub fn write_string(dst: &mut Vec<u8>, value: Option<&[u8]>) {
    match value {
        None => write_compact_int(dst, i32::from(UNSIGNED_NULL)),
        Some(bytes) => {
            write_compact_int(dst, bytes.len() as i32);
            dst.extend_from_slice(bytes);
        }
    }
}

/// Writes a decimal as `(negative, scale, magnitude)`.
///
/// Magnitudes below 2^63 take the compact form (varint significand);
/// wider ones are written as a length-prefixed minimal big-endian body.
/// A zero magnitude is always compact and always carries the plus bit.
pub fn write_decimal(dst: &mut Vec<u8>, value: Option<(bool, i32, &BigUint)>) {
    let (negative, scale, magnitude) = match value {
        None => {
            dst.push(DECIMAL_NULL as u8);
            return;
        }
        Some(parts) => parts,
    };
    let plus = !negative || magnitude.is_zero();
    let sign_bits = DECIMAL_PRESENT_MASK | if plus { DECIMAL_PLUS_MASK } else { 0 };
    match magnitude.to_u64() {
        Some(compact) if compact <= i64::MAX as u64 => {
            dst.push((sign_bits | DECIMAL_COMPACT_MASK) as u8);
            write_compact_int(dst, scale);
            write_compact_long(dst, compact as i64);
        }
        _ => {
            dst.push(sign_bits as u8);
            write_compact_int(dst, scale);
            let body = magnitude.to_be_bytes();
            write_compact_int(dst, body.len() as i32);
            dst.extend_from_slice(&body);
        }
    }
}

/// [`write_decimal`] for magnitudes already held as a `u64`.
pub fn write_decimal_u64(dst: &mut Vec<u8>, value: Option<(bool, i32, u64)>) {
    match value {
        None => write_decimal(dst, None),
        Some((negative, scale, magnitude)) => {
            write_decimal(dst, Some((negative, scale, &BigUint::from(magnitude))));
        }
    }
}
