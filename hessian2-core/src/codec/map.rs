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

//! Map productions. Both variants are sentinel-terminated on encode and
//! decode; the grammar has no fixed-count map form. Entry order on the wire
//! is whatever the backing map iterates, which is fine because map equality
//! is unordered. Same self-registration-before-children rule as lists.

use crate::codec::{read_type, write_type, Serializer};
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::ensure;
use crate::error::Error;
use crate::object::{Object, TypedMap};
use crate::types::{TAG_END, TAG_MAP_TYPED, TAG_MAP_UNTYPED};
use std::collections::HashMap;

pub(crate) fn write_typed_map(encoder: &mut Encoder, v: &TypedMap) -> Result<(), Error> {
    encoder.value_refs.register();
    encoder.writer.write_u8(TAG_MAP_TYPED);
    write_type(encoder, &v.type_name)?;
    for (key, value) in &v.entries {
        key.hessian_write(encoder)?;
        value.hessian_write(encoder)?;
    }
    encoder.writer.write_u8(TAG_END);
    Ok(())
}

pub(crate) fn write_untyped_map(
    encoder: &mut Encoder,
    entries: &HashMap<Object, Object>,
) -> Result<(), Error> {
    encoder.value_refs.register();
    encoder.writer.write_u8(TAG_MAP_UNTYPED);
    for (key, value) in entries {
        key.hessian_write(encoder)?;
        value.hessian_write(encoder)?;
    }
    encoder.writer.write_u8(TAG_END);
    Ok(())
}

fn read_entries(decoder: &mut Decoder) -> Result<HashMap<Object, Object>, Error> {
    let mut entries = HashMap::new();
    while decoder.reader.peek_u8()? != TAG_END {
        let key = Object::hessian_read(decoder)?;
        let value = Object::hessian_read(decoder)?;
        entries.insert(key, value);
    }
    decoder.reader.skip(1)?;
    Ok(entries)
}

pub(crate) fn read_typed_map(decoder: &mut Decoder) -> Result<TypedMap, Error> {
    let pos = decoder.reader.offset();
    let tag = decoder.reader.read_u8()?;
    ensure!(tag == TAG_MAP_TYPED, Error::unexpected_tag(tag, pos));
    let type_name = read_type(decoder)?;
    decoder.value_refs.register();
    let entries = read_entries(decoder)?;
    Ok(TypedMap { type_name, entries })
}

pub(crate) fn read_untyped_map(decoder: &mut Decoder) -> Result<HashMap<Object, Object>, Error> {
    let pos = decoder.reader.offset();
    let tag = decoder.reader.read_u8()?;
    ensure!(tag == TAG_MAP_UNTYPED, Error::unexpected_tag(tag, pos));
    decoder.value_refs.register();
    read_entries(decoder)
}
