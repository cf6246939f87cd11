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

use crate::codec::{definition, Serializer};
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::Error;
use crate::object::{ClassInstance, Object};

pub(crate) fn write_class_instance(encoder: &mut Encoder, v: &ClassInstance) -> Result<(), Error> {
    // A mismatched instance would produce wire data no peer can parse back.
    debug_assert_eq!(v.data.len(), v.def.field_names.len());
    if v.data.len() != v.def.field_names.len() {
        return Err(Error::encoding_error(format!(
            "class instance of {} has {} values for {} fields",
            v.def.type_name,
            v.data.len(),
            v.def.field_names.len()
        )));
    }
    encoder.value_refs.register();
    definition::write_definition(encoder, &v.def)?;
    for field in &v.data {
        field.hessian_write(encoder)?;
    }
    Ok(())
}

/// Decode the instance production: a definition reference followed by one
/// value per schema field. Any leading `C` records were consumed by the
/// generic dispatch before this is called. Registers itself in the value-ref
/// table before its children so fields can refer back to the instance.
pub(crate) fn read_class_instance(decoder: &mut Decoder) -> Result<ClassInstance, Error> {
    let def = definition::read_def_ref(decoder)?;
    decoder.value_refs.register();
    let mut data = Vec::with_capacity(def.field_names.len());
    for _ in 0..def.field_names.len() {
        data.push(Object::hessian_read(decoder)?);
    }
    Ok(ClassInstance { def, data })
}
