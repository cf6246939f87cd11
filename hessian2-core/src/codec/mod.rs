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

//! Per-type wire codecs, one module per grammar production.
//!
//! Built-in impls cover `bool`, `i32`, `i64`, `f64`, `String`, `Vec<u8>`,
//! `chrono::NaiveDateTime`, [`crate::object::TypeRef`] and the generic
//! [`crate::object::Object`] tree. User aggregate types participate by
//! implementing [`Serializer`]; the engines dispatch through the trait, so
//! no engine changes are needed to add a type.

use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::Error;

mod binary;
mod bool;
mod class_instance;
mod date;
mod definition;
mod list;
mod map;
mod number;
mod object;
mod ref_;
mod string;
mod type_ref;

pub(crate) use binary::{read_binary, write_binary};
pub(crate) use class_instance::{read_class_instance, write_class_instance};
pub(crate) use definition::read_definition_record;
pub(crate) use list::{read_typed_list, read_untyped_list, write_typed_list, write_untyped_list};
pub(crate) use map::{read_typed_map, read_untyped_map, write_typed_map, write_untyped_map};
pub(crate) use ref_::{read_ref, write_ref};
pub(crate) use string::{read_string, write_str};
pub(crate) use type_ref::{read_type, write_type};

/// A value that knows its own Hessian2 wire form.
///
/// `hessian_write` appends the value's production to the encoder's output;
/// `hessian_read` consumes exactly one production from the decoder's cursor.
/// Implementations recurse through the engines for children so the session
/// tables stay consistent.
pub trait Serializer: Sized {
    fn hessian_write(&self, encoder: &mut Encoder) -> Result<(), Error>;

    fn hessian_read(decoder: &mut Decoder) -> Result<Self, Error>;
}
