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

use hessian2_core::buffer::{Reader, Writer};
use hessian2_core::error::Error;

#[test]
fn test_write_read_primitives() {
    let mut writer = Writer::default();
    writer.write_u8(0xAB);
    writer.write_i8(-1);
    writer.write_u16(0x1234);
    writer.write_i16(-2);
    writer.write_i32(0x0102_0304);
    writer.write_i64(-3);
    writer.write_f64(12.25);
    writer.write_bytes(&[1, 2, 3]);
    let bytes = writer.dump();

    let mut reader = Reader::new(&bytes);
    assert_eq!(reader.read_u8().unwrap(), 0xAB);
    assert_eq!(reader.read_i8().unwrap(), -1);
    assert_eq!(reader.read_u16().unwrap(), 0x1234);
    assert_eq!(reader.read_i16().unwrap(), -2);
    assert_eq!(reader.read_i32().unwrap(), 0x0102_0304);
    assert_eq!(reader.read_i64().unwrap(), -3);
    assert_eq!(reader.read_f64().unwrap(), 12.25);
    assert_eq!(reader.read_bytes(3).unwrap(), &[1, 2, 3]);
    assert_eq!(reader.remaining(), 0);
}

#[test]
fn test_big_endian_layout() {
    let mut writer = Writer::default();
    writer.write_u16(0x0102);
    writer.write_i32(0x0304_0506);
    assert_eq!(writer.dump(), vec![0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);
}

#[test]
fn test_peek_does_not_advance() {
    let bytes = [0x10, 0x20, 0x30];
    let mut reader = Reader::new(&bytes);
    assert_eq!(reader.peek_u8().unwrap(), 0x10);
    assert_eq!(reader.peek_u8_at(2).unwrap(), 0x30);
    assert_eq!(reader.offset(), 0);
    assert_eq!(reader.read_u8().unwrap(), 0x10);
    assert_eq!(reader.offset(), 1);
}

#[test]
fn test_skip() {
    let bytes = [1, 2, 3, 4];
    let mut reader = Reader::new(&bytes);
    reader.skip(3).unwrap();
    assert_eq!(reader.read_u8().unwrap(), 4);
    assert!(reader.skip(1).is_err());
}

#[test]
fn test_out_of_bound_reads() {
    let bytes = [0x01, 0x02];
    let mut reader = Reader::new(&bytes);
    assert!(matches!(
        reader.read_i32(),
        Err(Error::BufferOutOfBound(0, 4, 2))
    ));
    // A failed read leaves the cursor where it was.
    assert_eq!(reader.offset(), 0);
    assert_eq!(reader.read_u16().unwrap(), 0x0102);
    assert!(reader.read_u8().is_err());

    let mut empty = Reader::new(&[]);
    assert!(empty.read_u8().is_err());
    assert!(empty.peek_u8().is_err());
}

#[test]
fn test_writer_reset_keeps_nothing() {
    let mut writer = Writer::default();
    writer.write_bytes(&[1, 2, 3]);
    assert_eq!(writer.len(), 3);
    writer.reset();
    assert!(writer.is_empty());
    writer.write_u8(9);
    assert_eq!(writer.into_bytes(), vec![9]);
}
