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

use hessian2::{ClassInstance, Decoder, Encoder, Error, Object, RawDefinition};
use std::collections::HashMap;
use std::rc::Rc;

fn encode_obj(v: &Object) -> Vec<u8> {
    let mut encoder = Encoder::new();
    encoder.encode(v).unwrap();
    encoder.into_bytes()
}

fn decode_obj(bytes: &[u8]) -> Object {
    let mut decoder = Decoder::new(bytes);
    let v = decoder.decode::<Object>().unwrap();
    assert_eq!(decoder.offset(), bytes.len());
    v
}

#[test]
fn test_self_referential_list() {
    // The list is container 0; its first element points back at it.
    let v = Object::UntypedList(vec![Object::Ref(0), Object::Integer(1)]);
    let bytes = encode_obj(&v);
    assert_eq!(bytes, vec![0x7A, 0x51, 0x90, 0x91]);
    assert_eq!(decode_obj(&bytes), v);
}

#[test]
fn test_shared_inner_list() {
    // Outer list is container 0, inner list is container 1, and the second
    // element refers to the inner list again.
    let v = Object::UntypedList(vec![Object::UntypedList(vec![]), Object::Ref(1)]);
    let bytes = encode_obj(&v);
    assert_eq!(bytes, vec![0x7A, 0x78, 0x51, 0x91]);
    assert_eq!(decode_obj(&bytes), v);
}

#[test]
fn test_cyclic_class_instance() {
    let def = Rc::new(RawDefinition {
        type_name: "ex.node".to_string(),
        field_names: vec!["next".to_string()],
    });
    let v = Object::ClassInstance(ClassInstance {
        def,
        data: vec![Object::Ref(0)],
    });
    assert_eq!(decode_obj(&encode_obj(&v)), v);
}

#[test]
fn test_map_referring_to_itself() {
    let v = Object::UntypedMap(HashMap::from([(Object::from("self"), Object::Ref(0))]));
    assert_eq!(decode_obj(&encode_obj(&v)), v);
}

#[test]
fn test_ref_numbering_spans_container_kinds() {
    // Containers are numbered in encounter order regardless of kind:
    // outer list 0, map 1, inner list 2.
    let v = Object::UntypedList(vec![
        Object::UntypedMap(HashMap::new()),
        Object::UntypedList(vec![Object::Ref(1)]),
        Object::Ref(2),
    ]);
    let mut encoder = Encoder::new();
    encoder.encode(&v).unwrap();
    assert_eq!(encoder.value_ref_count(), 3);
    let bytes = encoder.into_bytes();

    let mut decoder = Decoder::new(&bytes);
    assert_eq!(decoder.decode::<Object>().unwrap(), v);
    assert_eq!(decoder.value_ref_count(), 3);
}

#[test]
fn test_scalars_are_not_numbered() {
    let v = Object::UntypedList(vec![
        Object::from("text"),
        Object::Integer(5),
        Object::Binary(vec![1]),
    ]);
    let mut encoder = Encoder::new();
    encoder.encode(&v).unwrap();
    // Only the list itself is a referencable container.
    assert_eq!(encoder.value_ref_count(), 1);
}

#[test]
fn test_decode_ref_out_of_range() {
    // 'Q' 0 with no containers registered.
    let mut decoder = Decoder::new(&[0x51, 0x90]);
    assert!(matches!(
        decoder.decode::<Object>(),
        Err(Error::InvalidRef(_))
    ));
}

#[test]
fn test_decode_forward_ref_rejected() {
    // The list is container 0; index 1 does not exist yet.
    let mut decoder = Decoder::new(&[0x79, 0x51, 0x91]);
    assert!(matches!(
        decoder.decode::<Object>(),
        Err(Error::InvalidRef(_))
    ));
}

#[test]
fn test_decode_negative_ref_rejected() {
    // 'Q' followed by int -1.
    let mut decoder = Decoder::new(&[0x51, 0x8F]);
    assert!(matches!(
        decoder.decode::<Object>(),
        Err(Error::InvalidRef(_))
    ));
}
