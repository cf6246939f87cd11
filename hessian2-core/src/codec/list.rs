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

//! List productions, typed and untyped.
//!
//! Encoding uses the inline-count tags for up to seven elements and the
//! explicit-count tags beyond that; the sentinel-terminated variants (`U`,
//! `0x57`) are accepted on decode for peer compatibility but never emitted.
//! A list registers itself in the value-ref table before its elements so an
//! element `Ref` can point back at the list still being built.

use crate::codec::{read_type, write_type, Serializer};
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::Error;
use crate::object::{Object, TypedList};
use crate::types::{
    TAG_END, TAG_LIST_TYPED_FIXED, TAG_LIST_TYPED_VAR, TAG_LIST_UNTYPED_FIXED,
    TAG_LIST_UNTYPED_VAR,
};

const LIST_DIRECT_MAX: usize = 7;

pub(crate) fn write_typed_list(encoder: &mut Encoder, v: &TypedList) -> Result<(), Error> {
    encoder.value_refs.register();
    let n = v.values.len();
    if n <= LIST_DIRECT_MAX {
        encoder.writer.write_u8(0x70 + n as u8);
        write_type(encoder, &v.type_name)?;
    } else {
        encoder.writer.write_u8(TAG_LIST_TYPED_FIXED);
        write_type(encoder, &v.type_name)?;
        (n as i32).hessian_write(encoder)?;
    }
    for x in &v.values {
        x.hessian_write(encoder)?;
    }
    Ok(())
}

pub(crate) fn write_untyped_list(encoder: &mut Encoder, v: &[Object]) -> Result<(), Error> {
    encoder.value_refs.register();
    let n = v.len();
    if n <= LIST_DIRECT_MAX {
        encoder.writer.write_u8(0x78 + n as u8);
    } else {
        encoder.writer.write_u8(TAG_LIST_UNTYPED_FIXED);
        (n as i32).hessian_write(encoder)?;
    }
    for x in v {
        x.hessian_write(encoder)?;
    }
    Ok(())
}

fn read_fixed_values(decoder: &mut Decoder, n: usize) -> Result<Vec<Object>, Error> {
    let mut values = Vec::with_capacity(n.min(4096));
    for _ in 0..n {
        values.push(Object::hessian_read(decoder)?);
    }
    Ok(values)
}

fn read_values_until_end(decoder: &mut Decoder) -> Result<Vec<Object>, Error> {
    let mut values = Vec::new();
    while decoder.reader.peek_u8()? != TAG_END {
        values.push(Object::hessian_read(decoder)?);
    }
    decoder.reader.skip(1)?;
    Ok(values)
}

fn read_count(decoder: &mut Decoder) -> Result<usize, Error> {
    let pos = decoder.reader.offset();
    let n = i32::hessian_read(decoder)?;
    if n < 0 {
        return Err(Error::encoding_error(format!(
            "negative list length {} at offset {}",
            n, pos
        )));
    }
    Ok(n as usize)
}

pub(crate) fn read_typed_list(decoder: &mut Decoder) -> Result<TypedList, Error> {
    let pos = decoder.reader.offset();
    let tag = decoder.reader.read_u8()?;
    match tag {
        TAG_LIST_TYPED_VAR => {
            let type_name = read_type(decoder)?;
            decoder.value_refs.register();
            let values = read_values_until_end(decoder)?;
            Ok(TypedList { type_name, values })
        }
        TAG_LIST_TYPED_FIXED => {
            let type_name = read_type(decoder)?;
            let n = read_count(decoder)?;
            decoder.value_refs.register();
            let values = read_fixed_values(decoder, n)?;
            Ok(TypedList { type_name, values })
        }
        0x70..=0x77 => {
            let type_name = read_type(decoder)?;
            decoder.value_refs.register();
            let values = read_fixed_values(decoder, (tag - 0x70) as usize)?;
            Ok(TypedList { type_name, values })
        }
        _ => Err(Error::unexpected_tag(tag, pos)),
    }
}

pub(crate) fn read_untyped_list(decoder: &mut Decoder) -> Result<Vec<Object>, Error> {
    let pos = decoder.reader.offset();
    let tag = decoder.reader.read_u8()?;
    match tag {
        TAG_LIST_UNTYPED_VAR => {
            decoder.value_refs.register();
            read_values_until_end(decoder)
        }
        TAG_LIST_UNTYPED_FIXED => {
            let n = read_count(decoder)?;
            decoder.value_refs.register();
            read_fixed_values(decoder, n)
        }
        0x78..=0x7F => {
            decoder.value_refs.register();
            read_fixed_values(decoder, (tag - 0x78) as usize)
        }
        _ => Err(Error::unexpected_tag(tag, pos)),
    }
}
