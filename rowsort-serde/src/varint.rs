//! Compact signed integer codec.
//!
//! Used for string lengths, decimal scales, and compact decimal
//! significands. Layout:
//!
//! - values in `[HEAD_MIN, 127]` are a single byte;
//! - otherwise the head byte is `HEAD_MIN - scale` with scale 1..=4,
//!   followed by an i8/i16/i32/i64 little-endian payload.
//!
//! The writers always pick the smallest sufficient scale; the reader
//! accepts any declared scale, so over-wide encodings from foreign
//! producers still decode.

use crate::cursor::Cursor;
use rowsort_result::{Error, Result};

/// Smallest value encodable directly in the head byte.
pub const COMPACT_INT_HEAD_MIN: i8 = i8::MIN + 4;

/// Total encoded length (head included), given only the head byte.
#[inline]
pub fn compact_int_size(head: i8) -> usize {
    if head >= COMPACT_INT_HEAD_MIN {
        return 1;
    }
    let scale = (COMPACT_INT_HEAD_MIN - head) as usize;
    (1 << (scale - 1)) + 1
}

/// Decodes one compact signed integer, advancing the cursor past it.
pub fn read_compact_int(cursor: &mut Cursor<'_>) -> i64 {
    let head = cursor.read_i8();
    if head >= COMPACT_INT_HEAD_MIN {
        return i64::from(head);
    }
    match COMPACT_INT_HEAD_MIN - head {
        1 => i64::from(cursor.read_i8()),
        2 => i64::from(cursor.read_i16_le()),
        3 => i64::from(cursor.read_i32_le()),
        4 => cursor.read_i64_le(),
        // head >= i8::MIN bounds the scale to 4
        _ => unreachable!(),
    }
}

/// Checked [`read_compact_int`] for untrusted input.
pub fn try_read_compact_int(cursor: &mut Cursor<'_>) -> Result<i64> {
    let head = cursor.try_read_i8()?;
    if head >= COMPACT_INT_HEAD_MIN {
        return Ok(i64::from(head));
    }
    match COMPACT_INT_HEAD_MIN - head {
        1 => Ok(i64::from(cursor.try_read_i8()?)),
        2 => Ok(i64::from(cursor.try_read_i16_le()?)),
        3 => Ok(i64::from(cursor.try_read_i32_le()?)),
        4 => cursor.try_read_i64_le(),
        _ => Err(Error::Internal("compact int scale out of range".into())),
    }
}

/// Skips one compact signed integer without decoding the payload.
#[inline]
pub fn skip_compact_int(cursor: &mut Cursor<'_>) {
    cursor.advance(compact_int_size(cursor.peek_i8()));
}

/// Encodes a 32-bit value in the smallest sufficient scale.
pub fn write_compact_int(dst: &mut Vec<u8>, value: i32) {
    if let Ok(v) = i8::try_from(value) {
        if v >= COMPACT_INT_HEAD_MIN {
            dst.push(v as u8);
        } else {
            dst.push((COMPACT_INT_HEAD_MIN - 1) as u8);
            dst.push(v as u8);
        }
    } else if let Ok(v) = i16::try_from(value) {
        dst.push((COMPACT_INT_HEAD_MIN - 2) as u8);
        dst.extend_from_slice(&v.to_le_bytes());
    } else {
        dst.push((COMPACT_INT_HEAD_MIN - 3) as u8);
        dst.extend_from_slice(&value.to_le_bytes());
    }
}

/// Encodes a 64-bit value in the smallest sufficient scale.
pub fn write_compact_long(dst: &mut Vec<u8>, value: i64) {
    if let Ok(v) = i32::try_from(value) {
        write_compact_int(dst, v);
    } else {
        dst.push((COMPACT_INT_HEAD_MIN - 4) as u8);
        dst.extend_from_slice(&value.to_le_bytes());
    }
}
