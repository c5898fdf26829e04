//! A bounds-checked sequential reader over an in-memory byte slice.
//!
//! All multi-byte primitives are little-endian unconditionally: the SPC
//! variant this crate supports (version byte `0x4B`) is always LSB-ordered,
//! and the MSB variant is rejected before any cursor is built (see
//! [`crate::header`]).

use crate::error::SpcError;

/// Sequential, read-only view over a byte slice.
///
/// The cursor never seeks backwards; callers that need to re-read a region
/// (the dispatcher's "did we land on the log offset" check) track the
/// absolute byte position themselves via [`Cursor::position`].
pub(crate) struct Cursor<'data> {
    whole: &'data [u8],
    rest: &'data [u8],
    position: usize,
}

impl<'data> Cursor<'data> {
    pub(crate) fn new(data: &'data [u8]) -> Self {
        Self {
            whole: data,
            rest: data,
            position: 0,
        }
    }

    pub(crate) fn position(&self) -> usize {
        self.position
    }

    pub(crate) fn remaining(&self) -> usize {
        self.rest.len()
    }

    pub(crate) fn len(&self) -> usize {
        self.whole.len()
    }

    fn truncated(&self, field: &'static str, needed: usize) -> SpcError {
        SpcError::Truncated {
            field,
            needed,
            remaining: self.rest.len(),
        }
    }

    /// Returns `n` raw bytes and advances the cursor past them.
    pub(crate) fn take(&mut self, n: usize, field: &'static str) -> Result<&'data [u8], SpcError> {
        if self.rest.len() < n {
            return Err(self.truncated(field, n - self.rest.len()));
        }
        let (taken, rest) = self.rest.split_at(n);
        self.rest = rest;
        self.position += n;
        Ok(taken)
    }

    pub(crate) fn skip(&mut self, n: usize, field: &'static str) -> Result<(), SpcError> {
        self.take(n, field).map(|_| ())
    }

    pub(crate) fn u8(&mut self, field: &'static str) -> Result<u8, SpcError> {
        Ok(self.take(1, field)?[0])
    }

    pub(crate) fn i8(&mut self, field: &'static str) -> Result<i8, SpcError> {
        Ok(self.u8(field)? as i8)
    }

    pub(crate) fn u16(&mut self, field: &'static str) -> Result<u16, SpcError> {
        let bytes: [u8; 2] = self.take(2, field)?.try_into().unwrap();
        Ok(u16::from_le_bytes(bytes))
    }

    pub(crate) fn i16(&mut self, field: &'static str) -> Result<i16, SpcError> {
        let bytes: [u8; 2] = self.take(2, field)?.try_into().unwrap();
        Ok(i16::from_le_bytes(bytes))
    }

    pub(crate) fn u32(&mut self, field: &'static str) -> Result<u32, SpcError> {
        let bytes: [u8; 4] = self.take(4, field)?.try_into().unwrap();
        Ok(u32::from_le_bytes(bytes))
    }

    pub(crate) fn i32(&mut self, field: &'static str) -> Result<i32, SpcError> {
        let bytes: [u8; 4] = self.take(4, field)?.try_into().unwrap();
        Ok(i32::from_le_bytes(bytes))
    }

    pub(crate) fn f32(&mut self, field: &'static str) -> Result<f32, SpcError> {
        let bytes: [u8; 4] = self.take(4, field)?.try_into().unwrap();
        Ok(f32::from_le_bytes(bytes))
    }

    pub(crate) fn f64(&mut self, field: &'static str) -> Result<f64, SpcError> {
        let bytes: [u8; 8] = self.take(8, field)?.try_into().unwrap();
        Ok(f64::from_le_bytes(bytes))
    }
}
