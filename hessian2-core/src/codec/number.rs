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

//! int32 / int64 / double productions.
//!
//! Encoding always picks the smallest tier that round-trips the value,
//! checked in ascending size order with fixed inclusive bounds; decoding is
//! the exact inverse, keyed on the leading tag byte's range.

use crate::codec::Serializer;
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::Error;
use crate::types::{
    TAG_DOUBLE, TAG_DOUBLE_BYTE, TAG_DOUBLE_MILLS, TAG_DOUBLE_ONE, TAG_DOUBLE_SHORT,
    TAG_DOUBLE_ZERO, TAG_INT, TAG_LONG, TAG_LONG_INT32,
};

const INT_DIRECT_MIN: i32 = -0x10; // -16
const INT_DIRECT_MAX: i32 = 0x2F; // 47
const INT_BYTE_MIN: i32 = -0x800; // -2048
const INT_BYTE_MAX: i32 = 0x7FF; // 2047
const INT_SHORT_MIN: i32 = -0x40000; // -262144
const INT_SHORT_MAX: i32 = 0x3FFFF; // 262143

const LONG_DIRECT_MIN: i64 = -0x08; // -8
const LONG_DIRECT_MAX: i64 = 0x0F; // 15
const LONG_BYTE_MIN: i64 = -0x800;
const LONG_BYTE_MAX: i64 = 0x7FF;
const LONG_SHORT_MIN: i64 = -0x40000;
const LONG_SHORT_MAX: i64 = 0x3FFFF;

impl Serializer for i32 {
    fn hessian_write(&self, encoder: &mut Encoder) -> Result<(), Error> {
        let v = *self;
        let w = &mut encoder.writer;
        if (INT_DIRECT_MIN..=INT_DIRECT_MAX).contains(&v) {
            w.write_u8((0x90 + v) as u8);
        } else if (INT_BYTE_MIN..=INT_BYTE_MAX).contains(&v) {
            w.write_u8((0xC8 + (v >> 8)) as u8);
            w.write_u8(v as u8);
        } else if (INT_SHORT_MIN..=INT_SHORT_MAX).contains(&v) {
            w.write_u8((0xD4 + (v >> 16)) as u8);
            w.write_u16(v as u16);
        } else {
            w.write_u8(TAG_INT);
            w.write_i32(v);
        }
        Ok(())
    }

    fn hessian_read(decoder: &mut Decoder) -> Result<Self, Error> {
        let pos = decoder.reader.offset();
        let tag = decoder.reader.read_u8()?;
        match tag {
            0x80..=0xBF => Ok(tag as i32 - 0x90),
            0xC0..=0xCF => {
                let b = decoder.reader.read_u8()? as i32;
                Ok(((tag as i32 - 0xC8) << 8) + b)
            }
            0xD0..=0xD7 => {
                let b = decoder.reader.read_u16()? as i32;
                Ok(((tag as i32 - 0xD4) << 16) + b)
            }
            TAG_INT => decoder.reader.read_i32(),
            _ => Err(Error::unexpected_tag(tag, pos)),
        }
    }
}

impl Serializer for i64 {
    fn hessian_write(&self, encoder: &mut Encoder) -> Result<(), Error> {
        let v = *self;
        let w = &mut encoder.writer;
        if (LONG_DIRECT_MIN..=LONG_DIRECT_MAX).contains(&v) {
            w.write_u8((0xE0 + v) as u8);
        } else if (LONG_BYTE_MIN..=LONG_BYTE_MAX).contains(&v) {
            w.write_u8((0xF8 + (v >> 8)) as u8);
            w.write_u8(v as u8);
        } else if (LONG_SHORT_MIN..=LONG_SHORT_MAX).contains(&v) {
            w.write_u8((0x3C + (v >> 16)) as u8);
            w.write_u16(v as u16);
        } else if (i32::MIN as i64..=i32::MAX as i64).contains(&v) {
            w.write_u8(TAG_LONG_INT32);
            w.write_i32(v as i32);
        } else {
            w.write_u8(TAG_LONG);
            w.write_i64(v);
        }
        Ok(())
    }

    fn hessian_read(decoder: &mut Decoder) -> Result<Self, Error> {
        let pos = decoder.reader.offset();
        let tag = decoder.reader.read_u8()?;
        match tag {
            0xD8..=0xEF => Ok(tag as i64 - 0xE0),
            0xF0..=0xFF => {
                let b = decoder.reader.read_u8()? as i64;
                Ok(((tag as i64 - 0xF8) << 8) + b)
            }
            0x38..=0x3F => {
                let b = decoder.reader.read_u16()? as i64;
                Ok(((tag as i64 - 0x3C) << 16) + b)
            }
            // 4-byte form: stored as int32, sign-extended here.
            TAG_LONG_INT32 => Ok(decoder.reader.read_i32()? as i64),
            TAG_LONG => decoder.reader.read_i64(),
            _ => Err(Error::unexpected_tag(tag, pos)),
        }
    }
}

impl Serializer for f64 {
    fn hessian_write(&self, encoder: &mut Encoder) -> Result<(), Error> {
        let v = *self;
        let w = &mut encoder.writer;
        // Compared by bit pattern: -0.0 takes the full form so its sign
        // survives the round trip.
        if v.to_bits() == 0.0f64.to_bits() {
            w.write_u8(TAG_DOUBLE_ZERO);
        } else if v.to_bits() == 1.0f64.to_bits() {
            w.write_u8(TAG_DOUBLE_ONE);
        } else if v != 0.0 && v.fract() == 0.0 && (-128.0..=127.0).contains(&v) {
            w.write_u8(TAG_DOUBLE_BYTE);
            w.write_i8(v as i8);
        } else if v != 0.0 && v.fract() == 0.0 && (-32768.0..=32767.0).contains(&v) {
            w.write_u8(TAG_DOUBLE_SHORT);
            w.write_i16(v as i16);
        } else {
            w.write_u8(TAG_DOUBLE);
            w.write_f64(v);
        }
        Ok(())
    }

    fn hessian_read(decoder: &mut Decoder) -> Result<Self, Error> {
        let pos = decoder.reader.offset();
        let tag = decoder.reader.read_u8()?;
        match tag {
            TAG_DOUBLE_ZERO => Ok(0.0),
            TAG_DOUBLE_ONE => Ok(1.0),
            TAG_DOUBLE_BYTE => Ok(decoder.reader.read_i8()? as f64),
            TAG_DOUBLE_SHORT => Ok(decoder.reader.read_i16()? as f64),
            // Decode-only legacy form: the stored int32 is a value in mills,
            // divided by 1000 here to match the Java reference behavior. The
            // encoder never emits this tag.
            TAG_DOUBLE_MILLS => Ok(decoder.reader.read_i32()? as f64 / 1000.0),
            TAG_DOUBLE => decoder.reader.read_f64(),
            _ => Err(Error::unexpected_tag(tag, pos)),
        }
    }
}
