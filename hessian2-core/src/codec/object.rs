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

//! Generic [`Object`] dispatch.
//!
//! Encode matches exhaustively on the variant, so a new `Object` kind fails
//! to compile until every arm exists. Decode peeks one tag byte and routes
//! to exactly one production; the scalar tag ranges are checked last, after
//! every single-byte tag, because they cover wide ranges.

use crate::codec::{
    read_binary, read_class_instance, read_definition_record, read_ref, read_string,
    read_typed_list, read_typed_map, read_untyped_list, read_untyped_map, write_binary,
    write_class_instance, write_ref, write_str, write_typed_list, write_typed_map,
    write_untyped_list, write_untyped_map, Serializer,
};
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::Error;
use crate::object::Object;
use crate::types::{
    is_binary_tag, is_int_tag, is_long_tag, is_string_tag, TAG_CLASS_DEF, TAG_DATE_MILLIS,
    TAG_DATE_MINUTES, TAG_DOUBLE, TAG_DOUBLE_BYTE, TAG_DOUBLE_MILLS, TAG_DOUBLE_ONE,
    TAG_DOUBLE_SHORT, TAG_DOUBLE_ZERO, TAG_FALSE, TAG_LIST_TYPED_FIXED, TAG_LIST_TYPED_VAR,
    TAG_LIST_UNTYPED_FIXED, TAG_LIST_UNTYPED_VAR, TAG_MAP_TYPED, TAG_MAP_UNTYPED, TAG_NULL,
    TAG_OBJECT, TAG_REF, TAG_TRUE,
};
use chrono::NaiveDateTime;

impl Serializer for Object {
    fn hessian_write(&self, encoder: &mut Encoder) -> Result<(), Error> {
        match self {
            Object::Null => {
                encoder.writer.write_u8(TAG_NULL);
                Ok(())
            }
            Object::Boolean(v) => v.hessian_write(encoder),
            Object::Integer(v) => v.hessian_write(encoder),
            Object::Long(v) => v.hessian_write(encoder),
            Object::Double(v) => v.hessian_write(encoder),
            Object::Date(v) => v.hessian_write(encoder),
            Object::String(v) => write_str(encoder, v),
            Object::Binary(v) => write_binary(encoder, v),
            Object::TypedList(v) => write_typed_list(encoder, v),
            Object::UntypedList(v) => write_untyped_list(encoder, v),
            Object::TypedMap(v) => write_typed_map(encoder, v),
            Object::UntypedMap(v) => write_untyped_map(encoder, v),
            Object::ClassInstance(v) => write_class_instance(encoder, v),
            Object::Ref(ref_id) => write_ref(encoder, *ref_id),
        }
    }

    fn hessian_read(decoder: &mut Decoder) -> Result<Self, Error> {
        decoder.enter_value()?;
        let out = read_object(decoder);
        decoder.exit_value();
        out
    }
}

fn read_object(decoder: &mut Decoder) -> Result<Object, Error> {
    let pos = decoder.reader.offset();
    let tag = decoder.reader.peek_u8()?;
    match tag {
        TAG_NULL => {
            decoder.reader.skip(1)?;
            Ok(Object::Null)
        }
        TAG_TRUE | TAG_FALSE => Ok(Object::Boolean(bool::hessian_read(decoder)?)),
        TAG_DATE_MILLIS | TAG_DATE_MINUTES => {
            Ok(Object::Date(NaiveDateTime::hessian_read(decoder)?))
        }
        TAG_DOUBLE | TAG_DOUBLE_ZERO | TAG_DOUBLE_ONE | TAG_DOUBLE_BYTE | TAG_DOUBLE_SHORT
        | TAG_DOUBLE_MILLS => Ok(Object::Double(f64::hessian_read(decoder)?)),
        TAG_LIST_TYPED_VAR | TAG_LIST_TYPED_FIXED | 0x70..=0x77 => {
            Ok(Object::TypedList(read_typed_list(decoder)?))
        }
        TAG_LIST_UNTYPED_VAR | TAG_LIST_UNTYPED_FIXED | 0x78..=0x7F => {
            Ok(Object::UntypedList(read_untyped_list(decoder)?))
        }
        TAG_MAP_TYPED => Ok(Object::TypedMap(read_typed_map(decoder)?)),
        TAG_MAP_UNTYPED => Ok(Object::UntypedMap(read_untyped_map(decoder)?)),
        // A definition record is always followed by the instance (or
        // another definition) it introduces.
        TAG_CLASS_DEF => {
            read_definition_record(decoder)?;
            Object::hessian_read(decoder)
        }
        TAG_OBJECT | 0x60..=0x6F => Ok(Object::ClassInstance(read_class_instance(decoder)?)),
        TAG_REF => Ok(Object::Ref(read_ref(decoder)?)),
        t if is_string_tag(t) => Ok(Object::String(read_string(decoder)?)),
        t if is_binary_tag(t) => Ok(Object::Binary(read_binary(decoder)?)),
        t if is_long_tag(t) => Ok(Object::Long(i64::hessian_read(decoder)?)),
        t if is_int_tag(t) => Ok(Object::Integer(i32::hessian_read(decoder)?)),
        t => Err(Error::unexpected_tag(t, pos)),
    }
}
