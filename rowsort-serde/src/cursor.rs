//! A read position over a caller-owned byte buffer.
//!
//! Comparators and skippers mutate only the offset; the underlying bytes
//! are never touched, so independent workers can walk disjoint cursors
//! over shared buffers without synchronization.

use rowsort_result::{Error, Result};

/// Advancing view over a byte slice.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    /// A cursor at the start of `data`.
    #[inline]
    pub fn new(data: &'a [u8]) -> Self {
        Cursor { data, offset: 0 }
    }

    /// Current offset from the start of the buffer.
    #[inline]
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Bytes left to read.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    /// Moves the read position forward without reading.
    #[inline]
    pub fn advance(&mut self, len: usize) {
        debug_assert!(len <= self.remaining(), "cursor advanced past the buffer");
        self.offset += len;
    }

    /// Reads `len` bytes, advancing past them. Panics when the buffer is
    /// exhausted.
    #[inline]
    pub fn take(&mut self, len: usize) -> &'a [u8] {
        let bytes = &self.data[self.offset..self.offset + len];
        self.offset += len;
        bytes
    }

    /// Fallible [`Cursor::take`] for untrusted input.
    #[inline]
    pub fn try_take(&mut self, len: usize) -> Result<&'a [u8]> {
        if len > self.remaining() {
            return Err(Error::UnexpectedEof {
                needed: len - self.remaining(),
                remaining: self.remaining(),
            });
        }
        Ok(self.take(len))
    }

    /// The next byte, without advancing.
    #[inline]
    pub fn peek_i8(&self) -> i8 {
        self.data[self.offset] as i8
    }

    #[inline]
    pub fn read_i8(&mut self) -> i8 {
        let v = self.data[self.offset] as i8;
        self.offset += 1;
        v
    }

    #[inline]
    pub fn read_i16_le(&mut self) -> i16 {
        i16::from_le_bytes(self.take(2).try_into().unwrap())
    }

    #[inline]
    pub fn read_i32_le(&mut self) -> i32 {
        i32::from_le_bytes(self.take(4).try_into().unwrap())
    }

    #[inline]
    pub fn read_i64_le(&mut self) -> i64 {
        i64::from_le_bytes(self.take(8).try_into().unwrap())
    }

    #[inline]
    pub fn read_f32_le(&mut self) -> f32 {
        f32::from_le_bytes(self.take(4).try_into().unwrap())
    }

    #[inline]
    pub fn read_f64_le(&mut self) -> f64 {
        f64::from_le_bytes(self.take(8).try_into().unwrap())
    }

    /// Fallible [`Cursor::read_i8`] for untrusted input.
    #[inline]
    pub fn try_read_i8(&mut self) -> Result<i8> {
        Ok(self.try_take(1)?[0] as i8)
    }

    #[inline]
    pub fn try_read_i16_le(&mut self) -> Result<i16> {
        Ok(i16::from_le_bytes(self.try_take(2)?.try_into().unwrap()))
    }

    #[inline]
    pub fn try_read_i32_le(&mut self) -> Result<i32> {
        Ok(i32::from_le_bytes(self.try_take(4)?.try_into().unwrap()))
    }

    #[inline]
    pub fn try_read_i64_le(&mut self) -> Result<i64> {
        Ok(i64::from_le_bytes(self.try_take(8)?.try_into().unwrap()))
    }

    #[inline]
    pub fn try_read_f32_le(&mut self) -> Result<f32> {
        Ok(f32::from_le_bytes(self.try_take(4)?.try_into().unwrap()))
    }

    #[inline]
    pub fn try_read_f64_le(&mut self) -> Result<f64> {
        Ok(f64::from_le_bytes(self.try_take(8)?.try_into().unwrap()))
    }
}
