//! Per-type field comparators.
//!
//! Every comparator reads one field from each cursor and returns the
//! ordering of the two values. Both cursors end up past their field on
//! every path, null vs non-null included, so ties let the caller fall
//! through to the next field of the same records.
//!
//! Null ordering is uniform: null < any non-null, two nulls are equal.

use std::cmp::Ordering;

use rowsort_decimal::{
    compare_decimal_bytes, compare_decimal_bytes_u64, compare_decimal_u64,
    compare_decimal_u64_bytes,
};

use crate::cursor::Cursor;
use crate::skip::skip_decimal_body;
use crate::varint::read_compact_int;
use crate::{DECIMAL_COMPACT_MASK, DECIMAL_NULL, DECIMAL_PLUS_MASK, NULL_HEADER};

/// Fixed-width little-endian field payload.
trait Payload: Copy + PartialOrd {
    fn read(cursor: &mut Cursor<'_>) -> Self;
}

impl Payload for i8 {
    #[inline]
    fn read(cursor: &mut Cursor<'_>) -> Self {
        cursor.read_i8()
    }
}

impl Payload for i16 {
    #[inline]
    fn read(cursor: &mut Cursor<'_>) -> Self {
        cursor.read_i16_le()
    }
}

impl Payload for i32 {
    #[inline]
    fn read(cursor: &mut Cursor<'_>) -> Self {
        cursor.read_i32_le()
    }
}

impl Payload for i64 {
    #[inline]
    fn read(cursor: &mut Cursor<'_>) -> Self {
        cursor.read_i64_le()
    }
}

impl Payload for f32 {
    #[inline]
    fn read(cursor: &mut Cursor<'_>) -> Self {
        cursor.read_f32_le()
    }
}

impl Payload for f64 {
    #[inline]
    fn read(cursor: &mut Cursor<'_>) -> Self {
        cursor.read_f64_le()
    }
}

/// Total-order fallback for payload types: floats never carry NaN on sort
/// keys, so ties on incomparable values are acceptable; `-0.0 == 0.0` per
/// natural IEEE-754 ordering.
#[inline]
fn compare_value<T: PartialOrd>(a: T, b: T) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Header-prefixed fixed-width field: null header, then both payloads.
#[inline]
fn compare_numeric<T: Payload>(a: &mut Cursor<'_>, b: &mut Cursor<'_>) -> Ordering {
    let header_a = a.read_i8();
    let header_b = b.read_i8();
    match (header_a == NULL_HEADER, header_b == NULL_HEADER) {
        (true, true) => Ordering::Equal,
        (true, false) => {
            T::read(b);
            Ordering::Less
        }
        (false, true) => {
            T::read(a);
            Ordering::Greater
        }
        (false, false) => compare_value(T::read(a), T::read(b)),
    }
}

/// Sign-flagged field: negative payloads are null.
#[inline]
fn compare_unsigned<T: Payload + Default>(a: &mut Cursor<'_>, b: &mut Cursor<'_>) -> Ordering {
    let value_a = T::read(a);
    let value_b = T::read(b);
    let zero = T::default();
    match (value_a < zero, value_b < zero) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => compare_value(value_a, value_b),
    }
}

/// Single signed byte, compared directly (null is the smallest encoding).
pub fn compare_boolean(a: &mut Cursor<'_>, b: &mut Cursor<'_>) -> Ordering {
    a.read_i8().cmp(&b.read_i8())
}

pub fn compare_byte(a: &mut Cursor<'_>, b: &mut Cursor<'_>) -> Ordering {
    compare_numeric::<i8>(a, b)
}

pub fn compare_short(a: &mut Cursor<'_>, b: &mut Cursor<'_>) -> Ordering {
    compare_numeric::<i16>(a, b)
}

pub fn compare_int(a: &mut Cursor<'_>, b: &mut Cursor<'_>) -> Ordering {
    compare_numeric::<i32>(a, b)
}

pub fn compare_long(a: &mut Cursor<'_>, b: &mut Cursor<'_>) -> Ordering {
    compare_numeric::<i64>(a, b)
}

pub fn compare_float(a: &mut Cursor<'_>, b: &mut Cursor<'_>) -> Ordering {
    compare_numeric::<f32>(a, b)
}

pub fn compare_double(a: &mut Cursor<'_>, b: &mut Cursor<'_>) -> Ordering {
    compare_numeric::<f64>(a, b)
}

/// 32-bit day count; the sign bit doubles as the null flag.
pub fn compare_date(a: &mut Cursor<'_>, b: &mut Cursor<'_>) -> Ordering {
    compare_unsigned::<i32>(a, b)
}

/// 64-bit second count; the sign bit doubles as the null flag.
pub fn compare_date_time(a: &mut Cursor<'_>, b: &mut Cursor<'_>) -> Ordering {
    compare_unsigned::<i64>(a, b)
}

/// Length-prefixed bytes: lexicographic over the common prefix, then the
/// shorter value wins. Negative lengths are null.
pub fn compare_string(a: &mut Cursor<'_>, b: &mut Cursor<'_>) -> Ordering {
    let len_a = read_compact_int(a);
    let len_b = read_compact_int(b);
    match (len_a < 0, len_b < 0) {
        (true, true) => Ordering::Equal,
        (true, false) => {
            b.advance(len_b as usize);
            Ordering::Less
        }
        (false, true) => {
            a.advance(len_a as usize);
            Ordering::Greater
        }
        (false, false) => a.take(len_a as usize).cmp(b.take(len_b as usize)),
    }
}

/// Reads a decimal significand body, advancing the cursor fully past it.
enum Magnitude<'a> {
    Compact(u64),
    Big(&'a [u8]),
}

#[inline]
fn read_magnitude<'a>(cursor: &mut Cursor<'a>, compact: bool) -> Magnitude<'a> {
    if compact {
        Magnitude::Compact(read_compact_int(cursor) as u64)
    } else {
        let length = read_compact_int(cursor);
        Magnitude::Big(cursor.take(length as usize))
    }
}

/// Sign-and-scale aware decimal comparison.
///
/// Header layout: 0 is null; otherwise bit 1 is the non-negative flag and
/// bit 2 selects a compact-varint significand over a length-prefixed
/// big-endian magnitude. A compact-varint scale follows the header, then
/// the significand body; the exponent handed to the magnitude comparison
/// is the negated scale.
pub fn compare_decimal(a: &mut Cursor<'_>, b: &mut Cursor<'_>) -> Ordering {
    let head_a = a.read_i8();
    let head_b = b.read_i8();
    match (head_a == DECIMAL_NULL, head_b == DECIMAL_NULL) {
        (true, true) => return Ordering::Equal,
        (true, false) => {
            skip_decimal_body(b, head_b);
            return Ordering::Less;
        }
        (false, true) => {
            skip_decimal_body(a, head_a);
            return Ordering::Greater;
        }
        (false, false) => {}
    }
    let plus_a = head_a & DECIMAL_PLUS_MASK != 0;
    let plus_b = head_b & DECIMAL_PLUS_MASK != 0;
    if plus_a != plus_b {
        skip_decimal_body(a, head_a);
        skip_decimal_body(b, head_b);
        return if plus_a { Ordering::Greater } else { Ordering::Less };
    }
    let exponent_a = -(read_compact_int(a) as i32);
    let exponent_b = -(read_compact_int(b) as i32);
    let magnitude_a = read_magnitude(a, head_a & DECIMAL_COMPACT_MASK != 0);
    let magnitude_b = read_magnitude(b, head_b & DECIMAL_COMPACT_MASK != 0);
    let unsigned = match (magnitude_a, magnitude_b) {
        (Magnitude::Compact(x), Magnitude::Compact(y)) => {
            compare_decimal_u64(x, exponent_a, y, exponent_b)
        }
        (Magnitude::Compact(x), Magnitude::Big(y)) => {
            compare_decimal_u64_bytes(x, exponent_a, y, exponent_b)
        }
        (Magnitude::Big(x), Magnitude::Compact(y)) => {
            compare_decimal_bytes_u64(x, exponent_a, y, exponent_b)
        }
        (Magnitude::Big(x), Magnitude::Big(y)) => {
            compare_decimal_bytes(x, exponent_a, y, exponent_b)
        }
    };
    // both operands share a sign here; negatives invert magnitude order
    if plus_a {
        unsigned
    } else {
        unsigned.reverse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::{write_date, write_int, write_string};

    #[test]
    fn null_int_orders_first_and_advances() {
        let mut null_buf = Vec::new();
        let mut value_buf = Vec::new();
        write_int(&mut null_buf, None);
        write_int(&mut value_buf, Some(-7));
        let mut a = Cursor::new(&null_buf);
        let mut b = Cursor::new(&value_buf);
        assert_eq!(compare_int(&mut a, &mut b), Ordering::Less);
        assert_eq!(a.remaining(), 0);
        assert_eq!(b.remaining(), 0);
    }

    #[test]
    fn negative_date_is_null() {
        let mut null_buf = Vec::new();
        let mut zero_buf = Vec::new();
        null_buf.extend_from_slice(&(-1i32).to_le_bytes());
        write_date(&mut zero_buf, Some(0));
        let mut a = Cursor::new(&null_buf);
        let mut b = Cursor::new(&zero_buf);
        assert_eq!(compare_date(&mut a, &mut b), Ordering::Less);
        // fixed-width field: 4 bytes consumed either way
        assert_eq!(a.position(), 4);
        assert_eq!(b.position(), 4);
    }

    #[test]
    fn string_prefix_then_length() {
        let mut abc = Vec::new();
        let mut abcd = Vec::new();
        write_string(&mut abc, Some(b"abc"));
        write_string(&mut abcd, Some(b"abcd"));
        let mut a = Cursor::new(&abc);
        let mut b = Cursor::new(&abcd);
        assert_eq!(compare_string(&mut a, &mut b), Ordering::Less);
        assert_eq!(a.remaining(), 0);
        assert_eq!(b.remaining(), 0);
    }

    #[test]
    fn float_negative_zero_ties_positive_zero() {
        let mut neg = Vec::new();
        let mut pos = Vec::new();
        crate::encode::write_float(&mut neg, Some(-0.0));
        crate::encode::write_float(&mut pos, Some(0.0));
        let mut a = Cursor::new(&neg);
        let mut b = Cursor::new(&pos);
        assert_eq!(compare_float(&mut a, &mut b), Ordering::Equal);
    }
}
