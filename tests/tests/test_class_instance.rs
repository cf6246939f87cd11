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

use hessian2::{ClassInstance, Decoder, Definition, Encoder, Error, Object, RawDefinition};
use std::rc::Rc;

fn car_def() -> Definition {
    Rc::new(RawDefinition {
        type_name: "ex.car".to_string(),
        field_names: vec!["color".to_string(), "model".to_string()],
    })
}

fn car(def: &Definition, color: &str, model: &str) -> Object {
    Object::ClassInstance(ClassInstance {
        def: def.clone(),
        data: vec![Object::from(color), Object::from(model)],
    })
}

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
fn test_single_instance_wire_form() {
    let def = car_def();
    let v = car(&def, "red", "ford");
    let bytes = encode_obj(&v);
    let expected: &[u8] = b"\x43\x06ex.car\x92\x05color\x05model\x60\x03red\x04ford";
    assert_eq!(bytes, expected);
    assert_eq!(decode_obj(&bytes), v);
}

#[test]
fn test_definition_emitted_once() {
    let def = car_def();
    let v = Object::UntypedList(vec![car(&def, "red", "ford"), car(&def, "blue", "audi")]);
    let mut encoder = Encoder::new();
    encoder.encode(&v).unwrap();
    assert_eq!(encoder.def_ref_count(), 1);
    let bytes = encoder.into_bytes();
    // Exactly one 'C' record; the second instance reuses definition 0.
    assert_eq!(bytes.iter().filter(|&&b| b == 0x43).count(), 1);
    assert_eq!(bytes.iter().filter(|&&b| b == 0x60).count(), 2);

    let mut decoder = Decoder::new(&bytes);
    assert_eq!(decoder.decode::<Object>().unwrap(), v);
    assert_eq!(decoder.def_ref_count(), 1);
}

#[test]
fn test_decoded_instances_share_definition() {
    let def = car_def();
    let v = Object::UntypedList(vec![car(&def, "red", "ford"), car(&def, "blue", "audi")]);
    let decoded = decode_obj(&encode_obj(&v));
    let Object::UntypedList(items) = decoded else {
        panic!("expected list");
    };
    let (Object::ClassInstance(a), Object::ClassInstance(b)) = (&items[0], &items[1]) else {
        panic!("expected class instances");
    };
    assert!(Rc::ptr_eq(&a.def, &b.def));
}

#[test]
fn test_structurally_equal_defs_dedup() {
    // Two distinct Rc handles to equal schemas produce one wire record.
    let a = car_def();
    let b = car_def();
    assert!(!Rc::ptr_eq(&a, &b));
    let v = Object::UntypedList(vec![car(&a, "red", "ford"), car(&b, "blue", "audi")]);
    let mut encoder = Encoder::new();
    encoder.encode(&v).unwrap();
    assert_eq!(encoder.def_ref_count(), 1);
}

#[test]
fn test_zero_field_class() {
    let def = Rc::new(RawDefinition {
        type_name: "ex.unit".to_string(),
        field_names: vec![],
    });
    let v = Object::ClassInstance(ClassInstance {
        def,
        data: vec![],
    });
    let bytes = encode_obj(&v);
    assert_eq!(bytes, b"\x43\x07ex.unit\x90\x60");
    assert_eq!(decode_obj(&bytes), v);
}

#[test]
fn test_long_form_definition_ref() {
    // Seventeen distinct classes push the last reference past the sixteen
    // inline slots into the 'O' form.
    let make = |i: usize| {
        let def = Rc::new(RawDefinition {
            type_name: format!("ex.t{:02}", i),
            field_names: vec![],
        });
        Object::ClassInstance(ClassInstance { def, data: vec![] })
    };
    let v = Object::UntypedList((0..17).map(make).collect());
    let mut encoder = Encoder::new();
    encoder.encode(&v).unwrap();
    assert_eq!(encoder.def_ref_count(), 17);
    let bytes = encoder.into_bytes();
    // 'O' followed by compact int 16.
    let o_form = bytes.windows(2).any(|w| w == [0x4F, 0xA0]);
    assert!(o_form);

    let mut decoder = Decoder::new(&bytes);
    assert_eq!(decoder.decode::<Object>().unwrap(), v);
    assert_eq!(decoder.def_ref_count(), 17);
}

#[test]
fn test_nested_field_values() {
    let def = Rc::new(RawDefinition {
        type_name: "ex.bag".to_string(),
        field_names: vec!["items".to_string(), "label".to_string()],
    });
    let v = Object::ClassInstance(ClassInstance {
        def,
        data: vec![
            Object::UntypedList(vec![Object::Integer(1), Object::Null]),
            Object::from("stuff"),
        ],
    });
    assert_eq!(decode_obj(&encode_obj(&v)), v);
}

#[test]
fn test_def_refs_accessor_exposes_wire_order() {
    let def = car_def();
    let mut encoder = Encoder::new();
    encoder.encode(&car(&def, "red", "ford")).unwrap();
    assert_eq!(encoder.def_refs().len(), 1);
    assert_eq!(encoder.def_refs()[0].type_name, "ex.car");
}

#[test]
fn test_dangling_definition_ref() {
    // Instance tag with no preceding 'C' record.
    let mut decoder = Decoder::new(&[0x60]);
    assert!(matches!(
        decoder.decode::<Object>(),
        Err(Error::InvalidRef(_))
    ));
}

#[test]
fn test_huge_field_count_rejected() {
    // 'C', empty type name, then a field count of i32::MAX with no field
    // data behind it. Must fail cheaply, not reserve gigabytes up front.
    let bytes = [0x43, 0x00, 0x49, 0x7F, 0xFF, 0xFF, 0xFF];
    let mut decoder = Decoder::new(&bytes);
    assert!(decoder.decode::<Object>().is_err());
}

#[test]
fn test_truncated_definition_record() {
    let bytes = b"\x43\x06ex.car\x92\x05color";
    let mut decoder = Decoder::new(bytes);
    assert!(decoder.decode::<Object>().is_err());
}
