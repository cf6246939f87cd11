// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::error::Error;
use byteorder::{BigEndian, ByteOrder, WriteBytesExt};

/// Growable binary sink for encoding.
///
/// Writes never fail; the backing `Vec<u8>` grows as needed. Hessian2 is a
/// big-endian wire format, so all multi-byte writes are big-endian.
#[derive(Default)]
pub struct Writer {
    bf: Vec<u8>,
}

impl Writer {
    /// Keep capacity and reset len to 0 so the writer can be reused.
    pub fn reset(&mut self) {
        self.bf.clear();
    }

    pub fn dump(&self) -> Vec<u8> {
        self.bf.clone()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bf
    }

    pub fn len(&self) -> usize {
        self.bf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bf.is_empty()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.bf.reserve(additional);
    }

    pub fn write_bytes(&mut self, v: &[u8]) {
        self.bf.extend_from_slice(v);
    }

    pub fn write_u8(&mut self, value: u8) {
        self.bf.write_u8(value).unwrap();
    }

    pub fn write_i8(&mut self, value: i8) {
        self.bf.write_i8(value).unwrap();
    }

    pub fn write_u16(&mut self, value: u16) {
        self.bf.write_u16::<BigEndian>(value).unwrap();
    }

    pub fn write_i16(&mut self, value: i16) {
        self.bf.write_i16::<BigEndian>(value).unwrap();
    }

    pub fn write_u32(&mut self, value: u32) {
        self.bf.write_u32::<BigEndian>(value).unwrap();
    }

    pub fn write_i32(&mut self, value: i32) {
        self.bf.write_i32::<BigEndian>(value).unwrap();
    }

    pub fn write_i64(&mut self, value: i64) {
        self.bf.write_i64::<BigEndian>(value).unwrap();
    }

    pub fn write_f64(&mut self, value: f64) {
        self.bf.write_f64::<BigEndian>(value).unwrap();
    }
}

/// Cursor over a borrowed byte slice for decoding.
///
/// Every read is bounds-checked: running out of bytes is an expected outcome
/// for a decoder fed truncated input, so it surfaces as
/// [`Error::BufferOutOfBound`] rather than a panic. `peek_*` variants never
/// advance the cursor.
pub struct Reader<'bf> {
    bf: &'bf [u8],
    cursor: usize,
}

impl<'bf> Reader<'bf> {
    pub fn new(bf: &'bf [u8]) -> Reader<'bf> {
        Reader { bf, cursor: 0 }
    }

    /// Bytes consumed so far.
    pub fn offset(&self) -> usize {
        self.cursor
    }

    /// Total size of the backing slice.
    pub fn len(&self) -> usize {
        self.bf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bf.is_empty()
    }

    /// Bytes still available: `len() - offset()`.
    pub fn remaining(&self) -> usize {
        self.bf.len() - self.cursor
    }

    #[inline]
    fn check(&self, needed: usize) -> Result<(), Error> {
        if self.cursor + needed > self.bf.len() {
            return Err(Error::buffer_out_of_bound(
                self.cursor,
                needed,
                self.bf.len(),
            ));
        }
        Ok(())
    }

    #[inline]
    fn slice_at_cursor(&self, len: usize) -> Result<&'bf [u8], Error> {
        self.check(len)?;
        Ok(&self.bf[self.cursor..self.cursor + len])
    }

    pub fn read_u8(&mut self) -> Result<u8, Error> {
        self.check(1)?;
        let result = self.bf[self.cursor];
        self.cursor += 1;
        Ok(result)
    }

    pub fn read_i8(&mut self) -> Result<i8, Error> {
        Ok(self.read_u8()? as i8)
    }

    pub fn read_u16(&mut self) -> Result<u16, Error> {
        let result = BigEndian::read_u16(self.slice_at_cursor(2)?);
        self.cursor += 2;
        Ok(result)
    }

    pub fn read_i16(&mut self) -> Result<i16, Error> {
        let result = BigEndian::read_i16(self.slice_at_cursor(2)?);
        self.cursor += 2;
        Ok(result)
    }

    pub fn read_u32(&mut self) -> Result<u32, Error> {
        let result = BigEndian::read_u32(self.slice_at_cursor(4)?);
        self.cursor += 4;
        Ok(result)
    }

    pub fn read_i32(&mut self) -> Result<i32, Error> {
        let result = BigEndian::read_i32(self.slice_at_cursor(4)?);
        self.cursor += 4;
        Ok(result)
    }

    pub fn read_i64(&mut self) -> Result<i64, Error> {
        let result = BigEndian::read_i64(self.slice_at_cursor(8)?);
        self.cursor += 8;
        Ok(result)
    }

    pub fn read_f64(&mut self) -> Result<f64, Error> {
        let result = BigEndian::read_f64(self.slice_at_cursor(8)?);
        self.cursor += 8;
        Ok(result)
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'bf [u8], Error> {
        let s = self.slice_at_cursor(len)?;
        self.cursor += len;
        Ok(s)
    }

    /// Look at the next byte without consuming it.
    pub fn peek_u8(&self) -> Result<u8, Error> {
        self.check(1)?;
        Ok(self.bf[self.cursor])
    }

    /// Look at the byte `ahead` positions past the cursor without consuming.
    pub fn peek_u8_at(&self, ahead: usize) -> Result<u8, Error> {
        self.check(ahead + 1)?;
        Ok(self.bf[self.cursor + ahead])
    }

    pub fn skip(&mut self, len: usize) -> Result<(), Error> {
        self.check(len)?;
        self.cursor += len;
        Ok(())
    }
}
