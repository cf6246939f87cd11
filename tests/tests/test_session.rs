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

use hessian2::{ClassInstance, Decoder, Encoder, Object, RawDefinition, TypedList};
use std::rc::Rc;

fn typed_list(n: i32) -> Object {
    Object::TypedList(TypedList {
        type_name: "[int".to_string(),
        values: vec![Object::Integer(n)],
    })
}

#[test]
fn test_tables_span_encode_calls() {
    // Two encode calls on one session share the type-ref table, so the
    // second list back-references the first one's type name.
    let mut encoder = Encoder::new();
    encoder.encode(&typed_list(1)).unwrap();
    encoder.encode(&typed_list(2)).unwrap();
    assert_eq!(encoder.type_ref_count(), 1);
    let bytes = encoder.into_bytes();
    assert_eq!(bytes, b"\x71\x04[int\x91\x71\x90\x92");

    let mut decoder = Decoder::new(&bytes);
    assert_eq!(decoder.decode::<Object>().unwrap(), typed_list(1));
    assert_eq!(decoder.decode::<Object>().unwrap(), typed_list(2));
    assert_eq!(decoder.offset(), bytes.len());
}

#[test]
fn test_reset_clears_all_tables() {
    let def = Rc::new(RawDefinition {
        type_name: "ex.thing".to_string(),
        field_names: vec!["v".to_string()],
    });
    let instance = Object::ClassInstance(ClassInstance {
        def,
        data: vec![Object::Integer(1)],
    });

    let mut encoder = Encoder::new();
    encoder.encode(&instance).unwrap();
    encoder.encode(&typed_list(1)).unwrap();
    let first = encoder.dump();
    assert_eq!(encoder.def_ref_count(), 1);
    assert_eq!(encoder.type_ref_count(), 1);
    assert_eq!(encoder.value_ref_count(), 2);

    encoder.reset();
    assert_eq!(encoder.def_ref_count(), 0);
    assert_eq!(encoder.type_ref_count(), 0);
    assert_eq!(encoder.value_ref_count(), 0);

    // A fresh session reproduces the same bytes, definitions included.
    encoder.encode(&instance).unwrap();
    encoder.encode(&typed_list(1)).unwrap();
    assert_eq!(encoder.dump(), first);
}

#[test]
fn test_from_writer_reuses_buffer() {
    let mut writer = hessian2::Writer::default();
    writer.reserve(64);
    let mut encoder = Encoder::from_writer(writer);
    encoder.encode(&7i32).unwrap();
    assert_eq!(encoder.into_bytes(), vec![0x97]);
}

#[test]
fn test_consecutive_values_one_buffer() {
    let mut encoder = Encoder::new();
    encoder.encode(&true).unwrap();
    encoder.encode(&false).unwrap();
    encoder.encode(&"mid".to_string()).unwrap();
    encoder.encode(&-1i64).unwrap();
    let bytes = encoder.into_bytes();
    assert_eq!(bytes, b"TF\x03mid\xDF");

    let mut decoder = Decoder::new(&bytes);
    assert!(decoder.decode::<bool>().unwrap());
    assert!(!decoder.decode::<bool>().unwrap());
    assert_eq!(decoder.decode::<String>().unwrap(), "mid");
    assert_eq!(decoder.decode::<i64>().unwrap(), -1);
    assert_eq!(decoder.offset(), bytes.len());
}

#[test]
fn test_null_roundtrip() {
    let mut encoder = Encoder::new();
    encoder.encode(&Object::Null).unwrap();
    let bytes = encoder.into_bytes();
    assert_eq!(bytes, vec![0x4E]);
    let mut decoder = Decoder::new(&bytes);
    assert_eq!(decoder.decode::<Object>().unwrap(), Object::Null);
}
