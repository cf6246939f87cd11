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

//! Self-describing element-type name for lists and maps: a full string on
//! first appearance, an int32 index into the type-ref table afterwards. The
//! decoder tells the two apart by the leading tag byte's range.

use crate::codec::{read_string, write_str, Serializer};
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::Error;
use crate::object::TypeRef;
use crate::types::is_string_tag;

pub(crate) fn write_type(encoder: &mut Encoder, name: &str) -> Result<(), Error> {
    if let Some(idx) = encoder.type_refs.get(name) {
        return (idx as i32).hessian_write(encoder);
    }
    write_str(encoder, name)?;
    encoder.type_refs.register(name);
    Ok(())
}

pub(crate) fn read_type(decoder: &mut Decoder) -> Result<String, Error> {
    let pos = decoder.reader.offset();
    if is_string_tag(decoder.reader.peek_u8()?) {
        let name = read_string(decoder)?;
        decoder.type_refs.register(name.clone());
        Ok(name)
    } else {
        let idx = i32::hessian_read(decoder)?;
        decoder
            .type_refs
            .get(idx)
            .map(str::to_string)
            .ok_or_else(|| {
                Error::invalid_ref(format!("type ref {} out of range at offset {}", idx, pos))
            })
    }
}

impl Serializer for TypeRef {
    fn hessian_write(&self, encoder: &mut Encoder) -> Result<(), Error> {
        write_type(encoder, &self.type_name)
    }

    fn hessian_read(decoder: &mut Decoder) -> Result<Self, Error> {
        Ok(TypeRef::new(read_type(decoder)?))
    }
}
