//! Checked field readers.
//!
//! The comparators trust their input; these readers do not. Every read is
//! bounds-checked and every header validated, which makes them suitable
//! for materializing record values out of buffers of unknown provenance
//! (and for exercising the writers in tests). Returned values follow the
//! writers' conventions: `Ok(None)` is a well-formed null.

use rowsort_decimal::Decimal;
use rowsort_result::{Error, Result};

use crate::cursor::Cursor;
use crate::varint::try_read_compact_int;
use crate::{DECIMAL_COMPACT_MASK, DECIMAL_NULL, DECIMAL_PLUS_MASK, DECIMAL_PRESENT_MASK, NULL_HEADER};

/// A decoded decimal field: unsigned magnitude plus a sign flag.
#[derive(Clone, Debug)]
pub struct SignedDecimal {
    /// Whether the value is negative.
    pub negative: bool,
    /// The unsigned magnitude with its ten's exponent.
    pub magnitude: Decimal,
}

pub fn read_boolean(cursor: &mut Cursor<'_>) -> Result<Option<bool>> {
    match cursor.try_read_i8()? {
        v if v < 0 => Ok(None),
        v => Ok(Some(v != 0)),
    }
}

macro_rules! numeric_reader {
    ($name:ident, $read:ident, $ty:ty) => {
        pub fn $name(cursor: &mut Cursor<'_>) -> Result<Option<$ty>> {
            if cursor.try_read_i8()? == NULL_HEADER {
                return Ok(None);
            }
            Ok(Some(cursor.$read()?))
        }
    };
}

numeric_reader!(read_byte, try_read_i8, i8);
numeric_reader!(read_short, try_read_i16_le, i16);
numeric_reader!(read_int, try_read_i32_le, i32);
numeric_reader!(read_long, try_read_i64_le, i64);
numeric_reader!(read_float, try_read_f32_le, f32);
numeric_reader!(read_double, try_read_f64_le, f64);

pub fn read_date(cursor: &mut Cursor<'_>) -> Result<Option<i32>> {
    match cursor.try_read_i32_le()? {
        v if v < 0 => Ok(None),
        v => Ok(Some(v)),
    }
}

pub fn read_date_time(cursor: &mut Cursor<'_>) -> Result<Option<i64>> {
    match cursor.try_read_i64_le()? {
        v if v < 0 => Ok(None),
        v => Ok(Some(v)),
    }
}

/// Reads a string field, borrowing the payload from the cursor's buffer.
pub fn read_string<'a>(cursor: &mut Cursor<'a>) -> Result<Option<&'a [u8]>> {
    let length = try_read_compact_int(cursor)?;
    if length < 0 {
        return Ok(None);
    }
    let length = usize::try_from(length)
        .map_err(|_| Error::invalid_argument(format!("string length {length} out of range")))?;
    Ok(Some(cursor.try_take(length)?))
}

pub fn read_decimal(cursor: &mut Cursor<'_>) -> Result<Option<SignedDecimal>> {
    let head = cursor.try_read_i8()?;
    if head == DECIMAL_NULL {
        return Ok(None);
    }
    if head & DECIMAL_PRESENT_MASK == 0 {
        return Err(Error::invalid_argument(format!(
            "invalid decimal header {head:#04x}"
        )));
    }
    let negative = head & DECIMAL_PLUS_MASK == 0;
    let scale = try_read_compact_int(cursor)?;
    let exponent = i32::try_from(scale)
        .ok()
        .and_then(i32::checked_neg)
        .ok_or_else(|| Error::invalid_argument(format!("decimal scale {scale} out of range")))?;
    let magnitude = if head & DECIMAL_COMPACT_MASK != 0 {
        let significand = try_read_compact_int(cursor)?;
        if significand < 0 {
            return Err(Error::invalid_argument(format!(
                "negative compact significand {significand}"
            )));
        }
        Decimal::compact(significand as u64, exponent)
    } else {
        let length = try_read_compact_int(cursor)?;
        let length = usize::try_from(length).map_err(|_| {
            Error::invalid_argument(format!("decimal body length {length} out of range"))
        })?;
        Decimal::from_be_bytes(cursor.try_take(length)?, exponent)
    };
    Ok(Some(SignedDecimal {
        negative,
        magnitude,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::{write_boolean, write_decimal_u64, write_long, write_string};

    #[test]
    fn rejects_impossible_decimal_header() {
        // bit 0 clear but non-zero header: no conforming writer emits this
        let buf = [0b0000_0110u8, 0x00];
        let mut cursor = Cursor::new(&buf);
        assert!(read_decimal(&mut cursor).is_err());
    }

    #[test]
    fn truncated_long_is_an_error_not_a_panic() {
        let mut buf = Vec::new();
        write_long(&mut buf, Some(i64::MAX));
        buf.truncate(5);
        let mut cursor = Cursor::new(&buf);
        assert!(read_long(&mut cursor).is_err());
    }

    #[test]
    fn null_fields_decode_to_none() {
        let mut buf = Vec::new();
        write_boolean(&mut buf, None);
        write_long(&mut buf, None);
        write_string(&mut buf, None);
        write_decimal_u64(&mut buf, None);
        let mut cursor = Cursor::new(&buf);
        assert!(read_boolean(&mut cursor).unwrap().is_none());
        assert!(read_long(&mut cursor).unwrap().is_none());
        assert!(read_string(&mut cursor).unwrap().is_none());
        assert!(read_decimal(&mut cursor).unwrap().is_none());
        assert_eq!(cursor.remaining(), 0);
    }
}
