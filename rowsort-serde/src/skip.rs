//! Per-type field skippers.
//!
//! Skippers advance a single cursor past one field without comparing.
//! They are used when records are keyed on a suffix of their fields, and
//! they advance by exactly the same amount as the corresponding
//! comparator consumes per side.

use crate::cursor::Cursor;
use crate::varint::{read_compact_int, skip_compact_int};
use crate::{DECIMAL_COMPACT_MASK, DECIMAL_NULL, NULL_HEADER};

#[inline]
fn skip_numeric(cursor: &mut Cursor<'_>, width: usize) {
    if cursor.read_i8() != NULL_HEADER {
        cursor.advance(width);
    }
}

pub fn skip_boolean(cursor: &mut Cursor<'_>) {
    cursor.advance(1);
}

pub fn skip_byte(cursor: &mut Cursor<'_>) {
    skip_numeric(cursor, 1);
}

pub fn skip_short(cursor: &mut Cursor<'_>) {
    skip_numeric(cursor, 2);
}

pub fn skip_int(cursor: &mut Cursor<'_>) {
    skip_numeric(cursor, 4);
}

pub fn skip_long(cursor: &mut Cursor<'_>) {
    skip_numeric(cursor, 8);
}

pub fn skip_float(cursor: &mut Cursor<'_>) {
    skip_numeric(cursor, 4);
}

pub fn skip_double(cursor: &mut Cursor<'_>) {
    skip_numeric(cursor, 8);
}

pub fn skip_date(cursor: &mut Cursor<'_>) {
    cursor.advance(4);
}

pub fn skip_date_time(cursor: &mut Cursor<'_>) {
    cursor.advance(8);
}

pub fn skip_string(cursor: &mut Cursor<'_>) {
    let length = read_compact_int(cursor);
    if length > 0 {
        cursor.advance(length as usize);
    }
}

pub fn skip_decimal(cursor: &mut Cursor<'_>) {
    let head = cursor.read_i8();
    if head != DECIMAL_NULL {
        skip_decimal_body(cursor, head);
    }
}

/// Skips a non-null decimal's scale and significand, the header byte
/// already consumed. Shared with the decimal comparator's null and
/// sign-mismatch paths.
pub(crate) fn skip_decimal_body(cursor: &mut Cursor<'_>, head: i8) {
    // scale
    skip_compact_int(cursor);
    if head & DECIMAL_COMPACT_MASK != 0 {
        skip_compact_int(cursor);
    } else {
        let length = read_compact_int(cursor);
        cursor.advance(length as usize);
    }
}
