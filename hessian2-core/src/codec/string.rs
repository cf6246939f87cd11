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

//! Chunked string production.
//!
//! Chunk lengths count *characters*, not bytes; values longer than 32768
//! characters are split into non-final `R` chunks followed by a final chunk
//! in the smallest applicable tier. The decoder walks UTF-8 lead bytes with
//! a 32-entry length table to consume exactly the advertised character
//! count.
//!
//! The opt-in Java compatibility mode
//! ([`crate::encoder::Encoder::java_surrogate_compat`]) rewrites
//! supplementary-plane characters (code points >= U+10000) as a UTF-16
//! surrogate pair, each half emitted as a deliberately invalid 3-byte UTF-8
//! sequence, and counts each half as one character. This reproduces a
//! known-wrong peer behavior byte for byte; it is not a general UTF-8 rule.

use crate::buffer::Writer;
use crate::codec::Serializer;
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::Error;
use crate::types::{TAG_STRING, TAG_STRING_CHUNK};

/// Maximum characters per chunk.
const CHUNK_CHAR_LEN: usize = 0x8000;
const STRING_DIRECT_MAX: usize = 0x1F; // 31
const STRING_SHORT_MAX: usize = 0x3FF; // 1023

/// Character byte-length keyed by the top 5 bits of the lead byte;
/// 0 marks an invalid lead (continuation bytes and 0xF8..0xFF).
const UTF8_CHAR_LEN: [u8; 32] = [
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 0xxxxxxx
    0, 0, 0, 0, 0, 0, 0, 0, // 10xxxxxx
    2, 2, 2, 2, // 110xxxxx
    3, 3, // 1110xxxx
    4, // 11110xxx
    0,
];

fn write_final_chunk(w: &mut Writer, nchars: usize, bytes: &[u8]) {
    if nchars <= STRING_DIRECT_MAX {
        w.write_u8(nchars as u8);
    } else if nchars <= STRING_SHORT_MAX {
        w.write_u8(0x30 + (nchars >> 8) as u8);
        w.write_u8(nchars as u8);
    } else {
        w.write_u8(TAG_STRING);
        w.write_u16(nchars as u16);
    }
    w.write_bytes(bytes);
}

/// Byte offset just past the first `nchars` characters of `s`.
fn byte_len_of_chars(s: &str, nchars: usize) -> usize {
    s.char_indices().nth(nchars).map_or(s.len(), |(i, _)| i)
}

pub(crate) fn write_str(encoder: &mut Encoder, s: &str) -> Result<(), Error> {
    if encoder.java_surrogate_compat {
        return write_str_surrogate_compat(encoder, s);
    }
    let mut rest = s;
    let mut rest_chars = s.chars().count();
    while rest_chars > CHUNK_CHAR_LEN {
        let split = byte_len_of_chars(rest, CHUNK_CHAR_LEN);
        let (chunk, tail) = rest.split_at(split);
        let w = &mut encoder.writer;
        w.write_u8(TAG_STRING_CHUNK);
        w.write_u16(CHUNK_CHAR_LEN as u16);
        w.write_bytes(chunk.as_bytes());
        rest = tail;
        rest_chars -= CHUNK_CHAR_LEN;
    }
    write_final_chunk(&mut encoder.writer, rest_chars, rest.as_bytes());
    Ok(())
}

/// One UTF-16 code unit rendered as a 3-byte UTF-8-shaped sequence. For
/// surrogate values this produces invalid UTF-8 on purpose.
fn push_utf16_unit(buf: &mut Vec<u8>, unit: u32) {
    buf.push(0xE0 | (unit >> 12) as u8);
    buf.push(0x80 | ((unit >> 6) & 0x3F) as u8);
    buf.push(0x80 | (unit & 0x3F) as u8);
}

fn write_str_surrogate_compat(encoder: &mut Encoder, s: &str) -> Result<(), Error> {
    let mut chunk: Vec<u8> = Vec::new();
    let mut chunk_units = 0usize;
    let mut utf8 = [0u8; 4];
    for c in s.chars() {
        let cp = c as u32;
        let units = if cp >= 0x10000 { 2 } else { 1 };
        // A surrogate pair never splits across a chunk boundary.
        if chunk_units + units > CHUNK_CHAR_LEN {
            let w = &mut encoder.writer;
            w.write_u8(TAG_STRING_CHUNK);
            w.write_u16(chunk_units as u16);
            w.write_bytes(&chunk);
            chunk.clear();
            chunk_units = 0;
        }
        if cp >= 0x10000 {
            let v = cp - 0x10000;
            push_utf16_unit(&mut chunk, 0xD800 + (v >> 10));
            push_utf16_unit(&mut chunk, 0xDC00 + (v & 0x3FF));
        } else {
            chunk.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
        }
        chunk_units += units;
    }
    write_final_chunk(&mut encoder.writer, chunk_units, &chunk);
    Ok(())
}

fn read_continuation(decoder: &mut Decoder) -> Result<u32, Error> {
    let pos = decoder.reader.offset();
    let b = decoder.reader.read_u8()?;
    if b & 0xC0 != 0x80 {
        return Err(Error::encoding_error(format!(
            "invalid UTF-8 continuation byte 0x{:02X} at offset {}",
            b, pos
        )));
    }
    Ok((b & 0x3F) as u32)
}

fn push_code_point(out: &mut String, cp: u32, pos: usize) -> Result<(), Error> {
    match char::from_u32(cp) {
        Some(c) => {
            out.push(c);
            Ok(())
        }
        None => Err(Error::encoding_error(format!(
            "invalid code point U+{:04X} at offset {}",
            cp, pos
        ))),
    }
}

/// Consume one 3-byte sequence and return its raw 16-bit value (no surrogate
/// filtering); used to pick up the low half of a surrogate pair.
fn read_3byte_value(decoder: &mut Decoder) -> Result<u32, Error> {
    let pos = decoder.reader.offset();
    let lead = decoder.reader.read_u8()?;
    if UTF8_CHAR_LEN[(lead >> 3) as usize] != 3 {
        return Err(Error::encoding_error(format!(
            "expected low surrogate sequence, found lead byte 0x{:02X} at offset {}",
            lead, pos
        )));
    }
    let b1 = read_continuation(decoder)?;
    let b2 = read_continuation(decoder)?;
    Ok(((lead as u32 & 0x0F) << 12) | (b1 << 6) | b2)
}

/// Consume exactly `nchars` characters' worth of UTF-8 from the reader.
fn read_chars(decoder: &mut Decoder, nchars: usize, out: &mut String) -> Result<(), Error> {
    let mut read = 0usize;
    while read < nchars {
        let pos = decoder.reader.offset();
        let lead = decoder.reader.read_u8()?;
        match UTF8_CHAR_LEN[(lead >> 3) as usize] {
            1 => {
                out.push(lead as char);
                read += 1;
            }
            2 => {
                let b1 = read_continuation(decoder)?;
                push_code_point(out, ((lead as u32 & 0x1F) << 6) | b1, pos)?;
                read += 1;
            }
            3 => {
                let b1 = read_continuation(decoder)?;
                let b2 = read_continuation(decoder)?;
                let cp = ((lead as u32 & 0x0F) << 12) | (b1 << 6) | b2;
                if decoder.java_surrogate_compat && (0xD800..=0xDBFF).contains(&cp) {
                    // Peer-compat surrogate pair: the low half follows as
                    // another 3-byte sequence, and the pair counts as two
                    // characters.
                    let low_pos = decoder.reader.offset();
                    let low = read_3byte_value(decoder)?;
                    if !(0xDC00..=0xDFFF).contains(&low) {
                        return Err(Error::encoding_error(format!(
                            "unpaired high surrogate U+{:04X} at offset {}",
                            cp, low_pos
                        )));
                    }
                    let combined = 0x10000 + ((cp - 0xD800) << 10) + (low - 0xDC00);
                    push_code_point(out, combined, pos)?;
                    read += 2;
                } else {
                    push_code_point(out, cp, pos)?;
                    read += 1;
                }
            }
            4 => {
                let b1 = read_continuation(decoder)?;
                let b2 = read_continuation(decoder)?;
                let b3 = read_continuation(decoder)?;
                let cp = ((lead as u32 & 0x07) << 18) | (b1 << 12) | (b2 << 6) | b3;
                push_code_point(out, cp, pos)?;
                read += 1;
            }
            _ => {
                return Err(Error::encoding_error(format!(
                    "invalid UTF-8 lead byte 0x{:02X} at offset {}",
                    lead, pos
                )));
            }
        }
    }
    Ok(())
}

pub(crate) fn read_string(decoder: &mut Decoder) -> Result<String, Error> {
    let mut out = String::new();
    loop {
        let pos = decoder.reader.offset();
        let tag = decoder.reader.read_u8()?;
        let (len, last) = match tag {
            0x00..=0x1F => (tag as usize, true),
            0x30..=0x33 => {
                let b = decoder.reader.read_u8()? as usize;
                (((tag as usize - 0x30) << 8) + b, true)
            }
            TAG_STRING => (decoder.reader.read_u16()? as usize, true),
            TAG_STRING_CHUNK => (decoder.reader.read_u16()? as usize, false),
            _ => return Err(Error::unexpected_tag(tag, pos)),
        };
        read_chars(decoder, len, &mut out)?;
        if last {
            return Ok(out);
        }
    }
}

impl Serializer for String {
    fn hessian_write(&self, encoder: &mut Encoder) -> Result<(), Error> {
        write_str(encoder, self)
    }

    fn hessian_read(decoder: &mut Decoder) -> Result<Self, Error> {
        read_string(decoder)
    }
}
