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

//! Feeding a decoder any strict prefix of a valid encoding must produce an
//! error, never a panic and never a bogus value.

use hessian2::{ClassInstance, Decoder, Encoder, Object, RawDefinition, TypedList};
use std::collections::HashMap;
use std::rc::Rc;

fn encode_obj(v: &Object) -> Vec<u8> {
    let mut encoder = Encoder::new();
    encoder.encode(v).unwrap();
    encoder.into_bytes()
}

fn assert_every_prefix_fails(bytes: &[u8]) {
    for cut in 0..bytes.len() {
        let mut decoder = Decoder::new(&bytes[..cut]);
        assert!(
            decoder.decode::<Object>().is_err(),
            "prefix of length {} of {:02X?} decoded successfully",
            cut,
            bytes
        );
    }
}

#[test]
fn test_truncated_scalars() {
    assert_every_prefix_fails(&encode_obj(&Object::Integer(300)));
    assert_every_prefix_fails(&encode_obj(&Object::Integer(i32::MAX)));
    assert_every_prefix_fails(&encode_obj(&Object::Long(i64::MAX)));
    assert_every_prefix_fails(&encode_obj(&Object::Double(12.25)));
    assert_every_prefix_fails(&encode_obj(&Object::from("hello world")));
    assert_every_prefix_fails(&encode_obj(&Object::Binary(vec![1, 2, 3, 4, 5])));
}

#[test]
fn test_truncated_date() {
    let dt = chrono::DateTime::from_timestamp_millis(894_621_091_000)
        .unwrap()
        .naive_utc();
    assert_every_prefix_fails(&encode_obj(&Object::Date(dt)));
}

#[test]
fn test_truncated_containers() {
    assert_every_prefix_fails(&encode_obj(&Object::UntypedList(vec![
        Object::Integer(1),
        Object::from("two"),
        Object::Integer(3),
    ])));
    assert_every_prefix_fails(&encode_obj(&Object::TypedList(TypedList {
        type_name: "[int".to_string(),
        values: vec![Object::Integer(7)],
    })));
    assert_every_prefix_fails(&encode_obj(&Object::UntypedMap(HashMap::from([(
        Object::from("key"),
        Object::Integer(1),
    )]))));
}

#[test]
fn test_truncated_class_instance() {
    let def = Rc::new(RawDefinition {
        type_name: "ex.pair".to_string(),
        field_names: vec!["a".to_string(), "b".to_string()],
    });
    let v = Object::ClassInstance(ClassInstance {
        def,
        data: vec![Object::Integer(1), Object::Integer(2)],
    });
    assert_every_prefix_fails(&encode_obj(&v));
}

#[test]
fn test_truncated_chunked_payloads() {
    let s: String = "x".repeat(40_000);
    assert_every_prefix_fails(&encode_obj(&Object::String(s)));
    let b: Vec<u8> = vec![0xAB; 2500];
    assert_every_prefix_fails(&encode_obj(&Object::Binary(b)));
}

#[test]
fn test_unassigned_tags_rejected() {
    // Tag bytes no production claims.
    for tag in [0x45u8, 0x47, 0x50, 0x5A] {
        let bytes = [tag];
        let mut decoder = Decoder::new(&bytes);
        assert!(decoder.decode::<Object>().is_err(), "tag 0x{:02X}", tag);
    }
}

#[test]
fn test_empty_input() {
    let mut decoder = Decoder::new(&[]);
    assert!(decoder.decode::<Object>().is_err());
}
