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

//! Class-definition records and their back-references.
//!
//! A distinct schema appears on the wire once as a `C` record (type name,
//! field count, field names); every instance then carries a definition
//! reference, inline (`0x60`-`0x6F`) for the first sixteen classes or
//! `O` + int32 beyond that.

use crate::codec::{read_string, write_str, Serializer};
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::Error;
use crate::object::{Definition, RawDefinition};
use crate::types::{TAG_CLASS_DEF, TAG_OBJECT};
use std::rc::Rc;

/// Write `def`'s `C` record if this session has not emitted it yet, then
/// write the definition reference the instance data is keyed on.
pub(crate) fn write_definition(encoder: &mut Encoder, def: &Definition) -> Result<(), Error> {
    let idx = match encoder.def_refs.find(def) {
        Some(idx) => idx,
        None => {
            encoder.writer.write_u8(TAG_CLASS_DEF);
            write_str(encoder, &def.type_name)?;
            (def.field_names.len() as i32).hessian_write(encoder)?;
            for field in &def.field_names {
                write_str(encoder, field)?;
            }
            encoder.def_refs.register(def.clone())
        }
    };
    if idx <= 0x0F {
        encoder.writer.write_u8(0x60 + idx as u8);
        Ok(())
    } else {
        encoder.writer.write_u8(TAG_OBJECT);
        (idx as i32).hessian_write(encoder)
    }
}

/// Consume a `C` record and append the schema to the def-ref table. The
/// instance production follows immediately; the caller decodes it next.
pub(crate) fn read_definition_record(decoder: &mut Decoder) -> Result<(), Error> {
    let pos = decoder.reader.offset();
    let tag = decoder.reader.read_u8()?;
    if tag != TAG_CLASS_DEF {
        return Err(Error::unexpected_tag(tag, pos));
    }
    let type_name = read_string(decoder)?;
    let count = i32::hessian_read(decoder)?;
    if count < 0 {
        return Err(Error::encoding_error(format!(
            "negative field count {} at offset {}",
            count, pos
        )));
    }
    let mut field_names = Vec::with_capacity((count as usize).min(4096));
    for _ in 0..count {
        field_names.push(read_string(decoder)?);
    }
    decoder.def_refs.register(Rc::new(RawDefinition {
        type_name,
        field_names,
    }));
    Ok(())
}

/// Resolve a definition reference (`0x60`-`0x6F` inline or `O` + int32)
/// against the def-ref table.
pub(crate) fn read_def_ref(decoder: &mut Decoder) -> Result<Definition, Error> {
    let pos = decoder.reader.offset();
    let tag = decoder.reader.read_u8()?;
    let idx = match tag {
        0x60..=0x6F => (tag - 0x60) as i32,
        TAG_OBJECT => i32::hessian_read(decoder)?,
        _ => return Err(Error::unexpected_tag(tag, pos)),
    };
    decoder.def_refs.get(idx).cloned().ok_or_else(|| {
        Error::invalid_ref(format!("definition ref {} out of range at offset {}", idx, pos))
    })
}
