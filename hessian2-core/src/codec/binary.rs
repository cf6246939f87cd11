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

//! Chunked binary production. Chunk lengths count bytes; values past 1024
//! bytes become 1024-byte non-final `A` chunks plus one final `B` chunk.

use crate::codec::Serializer;
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::Error;
use crate::types::{TAG_BINARY, TAG_BINARY_CHUNK};

const CHUNK_BYTE_LEN: usize = 1024;
const BINARY_DIRECT_MAX: usize = 0x0F; // 15
const BINARY_SHORT_MAX: usize = 0x3FF; // 1023

pub(crate) fn write_binary(encoder: &mut Encoder, v: &[u8]) -> Result<(), Error> {
    let w = &mut encoder.writer;
    if v.len() <= BINARY_DIRECT_MAX {
        w.write_u8(0x20 + v.len() as u8);
        w.write_bytes(v);
    } else if v.len() <= BINARY_SHORT_MAX {
        w.write_u8(0x34 + (v.len() >> 8) as u8);
        w.write_u8(v.len() as u8);
        w.write_bytes(v);
    } else {
        let mut rest = v;
        while rest.len() > CHUNK_BYTE_LEN {
            let (chunk, tail) = rest.split_at(CHUNK_BYTE_LEN);
            w.write_u8(TAG_BINARY_CHUNK);
            w.write_u16(CHUNK_BYTE_LEN as u16);
            w.write_bytes(chunk);
            rest = tail;
        }
        w.write_u8(TAG_BINARY);
        w.write_u16(rest.len() as u16);
        w.write_bytes(rest);
    }
    Ok(())
}

pub(crate) fn read_binary(decoder: &mut Decoder) -> Result<Vec<u8>, Error> {
    let mut out = Vec::new();
    loop {
        let pos = decoder.reader.offset();
        let tag = decoder.reader.read_u8()?;
        let (len, last) = match tag {
            0x20..=0x2F => (tag as usize - 0x20, true),
            0x34..=0x37 => {
                let b = decoder.reader.read_u8()? as usize;
                (((tag as usize - 0x34) << 8) + b, true)
            }
            TAG_BINARY => (decoder.reader.read_u16()? as usize, true),
            TAG_BINARY_CHUNK => (decoder.reader.read_u16()? as usize, false),
            _ => return Err(Error::unexpected_tag(tag, pos)),
        };
        out.extend_from_slice(decoder.reader.read_bytes(len)?);
        if last {
            return Ok(out);
        }
    }
}

impl Serializer for Vec<u8> {
    fn hessian_write(&self, encoder: &mut Encoder) -> Result<(), Error> {
        write_binary(encoder, self)
    }

    fn hessian_read(decoder: &mut Decoder) -> Result<Self, Error> {
        read_binary(decoder)
    }
}
