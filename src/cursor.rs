//! Strict byte cursor over an in-memory buffer.

use crate::error::BmpError;

/// Sequential reader over `&[u8]` with forward seek. Every read that would
/// pass the end of the buffer fails with [`BmpError::UnexpectedEof`].
pub(crate) struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub(crate) fn read_u8(&mut self) -> Result<u8, BmpError> {
        if self.pos < self.data.len() {
            let b = self.data[self.pos];
            self.pos += 1;
            Ok(b)
        } else {
            Err(BmpError::UnexpectedEof)
        }
    }

    pub(crate) fn get_u16_le(&mut self) -> Result<u16, BmpError> {
        if self.pos + 2 > self.data.len() {
            return Err(BmpError::UnexpectedEof);
        }
        let val = u16::from_le_bytes([self.data[self.pos], self.data[self.pos + 1]]);
        self.pos += 2;
        Ok(val)
    }

    pub(crate) fn get_u16_be(&mut self) -> Result<u16, BmpError> {
        if self.pos + 2 > self.data.len() {
            return Err(BmpError::UnexpectedEof);
        }
        let val = u16::from_be_bytes([self.data[self.pos], self.data[self.pos + 1]]);
        self.pos += 2;
        Ok(val)
    }

    pub(crate) fn get_u32_le(&mut self) -> Result<u32, BmpError> {
        if self.pos + 4 > self.data.len() {
            return Err(BmpError::UnexpectedEof);
        }
        let val = u32::from_le_bytes([
            self.data[self.pos],
            self.data[self.pos + 1],
            self.data[self.pos + 2],
            self.data[self.pos + 3],
        ]);
        self.pos += 4;
        Ok(val)
    }

    /// Seek forward by `n` bytes without reading their contents.
    pub(crate) fn skip(&mut self, n: usize) -> Result<(), BmpError> {
        let new_pos = self.pos.checked_add(n).ok_or(BmpError::UnexpectedEof)?;
        if new_pos > self.data.len() {
            return Err(BmpError::UnexpectedEof);
        }
        self.pos = new_pos;
        Ok(())
    }
}
