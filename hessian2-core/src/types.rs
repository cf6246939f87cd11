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

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Discriminant for the closed set of [`crate::object::Object`] variants.
///
/// The generic encoder/decoder dispatch matches exhaustively on this set, so
/// adding a variant is a compile error until every dispatch site handles it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum ObjectType {
    Null = 0,
    Boolean = 1,
    Integer = 2,
    Long = 3,
    Double = 4,
    Date = 5,
    String = 6,
    Binary = 7,
    TypedList = 8,
    UntypedList = 9,
    TypedMap = 10,
    UntypedMap = 11,
    ClassInstance = 12,
    Ref = 13,
}

// Single-byte wire tags. The ranged productions (compact ints, short
// strings, inline lengths) live in the per-type codec modules next to the
// arithmetic that uses them.
pub const TAG_NULL: u8 = b'N'; // 0x4E
pub const TAG_TRUE: u8 = b'T'; // 0x54
pub const TAG_FALSE: u8 = b'F'; // 0x46
pub const TAG_INT: u8 = b'I'; // 0x49
pub const TAG_LONG: u8 = b'L'; // 0x4C
pub const TAG_LONG_INT32: u8 = 0x59;
pub const TAG_DOUBLE: u8 = b'D'; // 0x44
pub const TAG_DOUBLE_ZERO: u8 = 0x5B;
pub const TAG_DOUBLE_ONE: u8 = 0x5C;
pub const TAG_DOUBLE_BYTE: u8 = 0x5D;
pub const TAG_DOUBLE_SHORT: u8 = 0x5E;
pub const TAG_DOUBLE_MILLS: u8 = 0x5F;
pub const TAG_DATE_MILLIS: u8 = b'J'; // 0x4A
pub const TAG_DATE_MINUTES: u8 = b'K'; // 0x4B
pub const TAG_STRING: u8 = b'S'; // 0x53
pub const TAG_STRING_CHUNK: u8 = b'R'; // 0x52, non-final
pub const TAG_BINARY: u8 = b'B'; // 0x42
pub const TAG_BINARY_CHUNK: u8 = b'A'; // 0x41, non-final
pub const TAG_LIST_TYPED_VAR: u8 = b'U'; // 0x55, sentinel-terminated
pub const TAG_LIST_TYPED_FIXED: u8 = b'V'; // 0x56
pub const TAG_LIST_UNTYPED_VAR: u8 = 0x57;
pub const TAG_LIST_UNTYPED_FIXED: u8 = b'X'; // 0x58
pub const TAG_MAP_TYPED: u8 = b'M'; // 0x4D
pub const TAG_MAP_UNTYPED: u8 = b'H'; // 0x48
pub const TAG_CLASS_DEF: u8 = b'C'; // 0x43
pub const TAG_OBJECT: u8 = b'O'; // 0x4F
pub const TAG_REF: u8 = b'Q'; // 0x51
pub const TAG_END: u8 = b'Z'; // 0x5A, list/map sentinel

// Inclusive tag ranges for the compact productions.
pub const INT_DIRECT_RANGE: std::ops::RangeInclusive<u8> = 0x80..=0xBF;
pub const INT_BYTE_RANGE: std::ops::RangeInclusive<u8> = 0xC0..=0xCF;
pub const INT_SHORT_RANGE: std::ops::RangeInclusive<u8> = 0xD0..=0xD7;
pub const LONG_DIRECT_RANGE: std::ops::RangeInclusive<u8> = 0xD8..=0xEF;
pub const LONG_BYTE_RANGE: std::ops::RangeInclusive<u8> = 0xF0..=0xFF;
pub const LONG_SHORT_RANGE: std::ops::RangeInclusive<u8> = 0x38..=0x3F;
pub const STRING_DIRECT_RANGE: std::ops::RangeInclusive<u8> = 0x00..=0x1F;
pub const STRING_SHORT_RANGE: std::ops::RangeInclusive<u8> = 0x30..=0x33;
pub const BINARY_DIRECT_RANGE: std::ops::RangeInclusive<u8> = 0x20..=0x2F;
pub const BINARY_SHORT_RANGE: std::ops::RangeInclusive<u8> = 0x34..=0x37;
pub const LIST_TYPED_DIRECT_RANGE: std::ops::RangeInclusive<u8> = 0x70..=0x77;
pub const LIST_UNTYPED_DIRECT_RANGE: std::ops::RangeInclusive<u8> = 0x78..=0x7F;
pub const OBJECT_DIRECT_RANGE: std::ops::RangeInclusive<u8> = 0x60..=0x6F;

/// True if `tag` opens any string production (used by the type-ref codec to
/// distinguish an inline type name from a back-reference index).
pub fn is_string_tag(tag: u8) -> bool {
    STRING_DIRECT_RANGE.contains(&tag)
        || STRING_SHORT_RANGE.contains(&tag)
        || tag == TAG_STRING
        || tag == TAG_STRING_CHUNK
}

/// True if `tag` opens any int32 production.
pub fn is_int_tag(tag: u8) -> bool {
    INT_DIRECT_RANGE.contains(&tag)
        || INT_BYTE_RANGE.contains(&tag)
        || INT_SHORT_RANGE.contains(&tag)
        || tag == TAG_INT
}

/// True if `tag` opens any int64 production.
pub fn is_long_tag(tag: u8) -> bool {
    LONG_DIRECT_RANGE.contains(&tag)
        || LONG_BYTE_RANGE.contains(&tag)
        || LONG_SHORT_RANGE.contains(&tag)
        || tag == TAG_LONG_INT32
        || tag == TAG_LONG
}

/// True if `tag` opens any binary production.
pub fn is_binary_tag(tag: u8) -> bool {
    BINARY_DIRECT_RANGE.contains(&tag)
        || BINARY_SHORT_RANGE.contains(&tag)
        || tag == TAG_BINARY
        || tag == TAG_BINARY_CHUNK
}
