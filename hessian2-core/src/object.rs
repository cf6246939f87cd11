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

use crate::types::ObjectType;
use chrono::NaiveDateTime;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// A class schema: type name plus the ordered field names of its instances.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RawDefinition {
    pub type_name: String,
    pub field_names: Vec<String>,
}

impl RawDefinition {
    pub fn new(type_name: impl Into<String>, field_names: Vec<String>) -> Self {
        RawDefinition {
            type_name: type_name.into(),
            field_names,
        }
    }
}

/// Shared-ownership handle to a [`RawDefinition`].
///
/// All [`ClassInstance`]s of the same class produced by one decode session
/// share one schema allocation; equality stays structural via `RawDefinition`.
pub type Definition = Rc<RawDefinition>;

/// Element-type name carried by typed lists and maps. Value-compared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TypeRef {
    pub type_name: String,
}

impl TypeRef {
    pub fn new(type_name: impl Into<String>) -> Self {
        TypeRef {
            type_name: type_name.into(),
        }
    }
}

/// A list with a declared element type name.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedList {
    pub type_name: String,
    pub values: Vec<Object>,
}

/// A map with a declared type name. Entry order is irrelevant.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedMap {
    pub type_name: String,
    pub entries: HashMap<Object, Object>,
}

/// A decoded object instance paired with its class schema.
///
/// Invariant upheld by both codec directions: `data.len()` equals
/// `def.field_names.len()`, with `data[i]` holding the value of field `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassInstance {
    pub def: Definition,
    pub data: Vec<Object>,
}

/// The closed set of values the Hessian2 wire grammar can carry.
///
/// `Ref` is an index into the session's value-ref numbering (containers are
/// numbered in encounter order, parents before their children), not a
/// pointer, so shared and cyclic structures need no ownership gymnastics:
/// `Ref(i)` designates the `i`-th container registered in the same
/// encode/decode pass.
///
/// Equality is structural. `Double` compares and hashes by bit pattern so
/// that `Eq` and `Hash` are lawful and `Object` can key a `HashMap`; map
/// variants compare as unordered entry sets and hash order-independently.
#[derive(Debug, Clone)]
pub enum Object {
    Null,
    Boolean(bool),
    Integer(i32),
    Long(i64),
    Double(f64),
    Date(NaiveDateTime),
    String(String),
    Binary(Vec<u8>),
    TypedList(TypedList),
    UntypedList(Vec<Object>),
    TypedMap(TypedMap),
    UntypedMap(HashMap<Object, Object>),
    ClassInstance(ClassInstance),
    Ref(u32),
}

impl Object {
    /// Stable variant discriminant for dispatch and diagnostics.
    pub fn object_type(&self) -> ObjectType {
        match self {
            Object::Null => ObjectType::Null,
            Object::Boolean(_) => ObjectType::Boolean,
            Object::Integer(_) => ObjectType::Integer,
            Object::Long(_) => ObjectType::Long,
            Object::Double(_) => ObjectType::Double,
            Object::Date(_) => ObjectType::Date,
            Object::String(_) => ObjectType::String,
            Object::Binary(_) => ObjectType::Binary,
            Object::TypedList(_) => ObjectType::TypedList,
            Object::UntypedList(_) => ObjectType::UntypedList,
            Object::TypedMap(_) => ObjectType::TypedMap,
            Object::UntypedMap(_) => ObjectType::UntypedMap,
            Object::ClassInstance(_) => ObjectType::ClassInstance,
            Object::Ref(_) => ObjectType::Ref,
        }
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Object::Null, Object::Null) => true,
            (Object::Boolean(a), Object::Boolean(b)) => a == b,
            (Object::Integer(a), Object::Integer(b)) => a == b,
            (Object::Long(a), Object::Long(b)) => a == b,
            // Bit equality: NaN == NaN, 0.0 != -0.0. Keeps Eq lawful.
            (Object::Double(a), Object::Double(b)) => a.to_bits() == b.to_bits(),
            (Object::Date(a), Object::Date(b)) => a == b,
            (Object::String(a), Object::String(b)) => a == b,
            (Object::Binary(a), Object::Binary(b)) => a == b,
            (Object::TypedList(a), Object::TypedList(b)) => a == b,
            (Object::UntypedList(a), Object::UntypedList(b)) => a == b,
            (Object::TypedMap(a), Object::TypedMap(b)) => a == b,
            (Object::UntypedMap(a), Object::UntypedMap(b)) => a == b,
            (Object::ClassInstance(a), Object::ClassInstance(b)) => a == b,
            (Object::Ref(a), Object::Ref(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Object {}

fn entry_hash(key: &Object, value: &Object) -> u64 {
    let mut h = DefaultHasher::new();
    key.hash(&mut h);
    value.hash(&mut h);
    h.finish()
}

/// Order-independent digest of a map's entries: wrapping sum of per-entry
/// hashes, so equal maps hash equal no matter the iteration order.
fn map_hash<H: Hasher>(entries: &HashMap<Object, Object>, state: &mut H) {
    let mut acc: u64 = 0;
    for (k, v) in entries {
        acc = acc.wrapping_add(entry_hash(k, v));
    }
    entries.len().hash(state);
    acc.hash(state);
}

impl Hash for Object {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let ty: u8 = self.object_type().into();
        ty.hash(state);
        match self {
            Object::Null => {}
            Object::Boolean(v) => v.hash(state),
            Object::Integer(v) => v.hash(state),
            Object::Long(v) => v.hash(state),
            Object::Double(v) => v.to_bits().hash(state),
            Object::Date(v) => v.hash(state),
            Object::String(v) => v.hash(state),
            Object::Binary(v) => v.hash(state),
            Object::TypedList(v) => {
                v.type_name.hash(state);
                v.values.hash(state);
            }
            Object::UntypedList(v) => v.hash(state),
            Object::TypedMap(v) => {
                v.type_name.hash(state);
                map_hash(&v.entries, state);
            }
            Object::UntypedMap(v) => map_hash(v, state),
            Object::ClassInstance(v) => {
                v.def.hash(state);
                v.data.hash(state);
            }
            Object::Ref(v) => v.hash(state),
        }
    }
}

impl From<bool> for Object {
    fn from(v: bool) -> Self {
        Object::Boolean(v)
    }
}

impl From<i32> for Object {
    fn from(v: i32) -> Self {
        Object::Integer(v)
    }
}

impl From<i64> for Object {
    fn from(v: i64) -> Self {
        Object::Long(v)
    }
}

impl From<f64> for Object {
    fn from(v: f64) -> Self {
        Object::Double(v)
    }
}

impl From<&str> for Object {
    fn from(v: &str) -> Self {
        Object::String(v.to_string())
    }
}

impl From<String> for Object {
    fn from(v: String) -> Self {
        Object::String(v)
    }
}

impl From<Vec<u8>> for Object {
    fn from(v: Vec<u8>) -> Self {
        Object::Binary(v)
    }
}

impl From<NaiveDateTime> for Object {
    fn from(v: NaiveDateTime) -> Self {
        Object::Date(v)
    }
}
