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

use crate::buffer::Writer;
use crate::codec::Serializer;
use crate::error::Error;
use crate::object::Definition;
use crate::resolver::def_resolver::DefWriter;
use crate::resolver::ref_resolver::RefWriter;
use crate::resolver::type_resolver::TypeRefWriter;

/// Hessian2 encoding engine.
///
/// Owns a [`Writer`] plus the three per-session de-duplication tables
/// (type names, class definitions, value identities). One `Encoder` serves
/// one encode session; the tables grow monotonically and are reset only by
/// [`Encoder::reset`]. Not safe for concurrent use.
///
/// # Examples
///
/// ```
/// use hessian2_core::encoder::Encoder;
///
/// let mut encoder = Encoder::new();
/// encoder.encode(&300i32).unwrap();
/// assert_eq!(encoder.dump(), vec![0xC9, 0x2C]);
/// ```
#[derive(Default)]
pub struct Encoder {
    pub writer: Writer,
    pub(crate) type_refs: TypeRefWriter,
    pub(crate) def_refs: DefWriter,
    pub(crate) value_refs: RefWriter,
    pub(crate) java_surrogate_compat: bool,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build on a caller-supplied writer, e.g. one with reserved capacity.
    pub fn from_writer(writer: Writer) -> Self {
        Encoder {
            writer,
            ..Self::default()
        }
    }

    /// Opt into the peer-compatibility string encoding that rewrites
    /// supplementary-plane characters as UTF-16 surrogate pairs in
    /// (deliberately invalid) 3-byte UTF-8 form, matching the behavior of a
    /// known Java peer library. Leave off unless that peer is on the other
    /// end; see [`crate::codec`] for details.
    pub fn java_surrogate_compat(mut self, enabled: bool) -> Self {
        self.java_surrogate_compat = enabled;
        self
    }

    /// Encode one value onto the output. May be called repeatedly; all calls
    /// share the session's de-duplication tables.
    pub fn encode<T: Serializer>(&mut self, value: &T) -> Result<(), Error> {
        value.hessian_write(self)
    }

    /// Copy of the bytes produced so far.
    pub fn dump(&self) -> Vec<u8> {
        self.writer.dump()
    }

    /// Consume the encoder and take the produced bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.writer.into_bytes()
    }

    /// Discard output and all session tables so the allocation can be reused
    /// for a fresh session.
    pub fn reset(&mut self) {
        self.writer.reset();
        self.type_refs.clear();
        self.def_refs.clear();
        self.value_refs.clear();
    }

    pub fn type_ref_count(&self) -> usize {
        self.type_refs.len()
    }

    pub fn def_ref_count(&self) -> usize {
        self.def_refs.len()
    }

    pub fn value_ref_count(&self) -> usize {
        self.value_refs.len()
    }

    /// The class definitions emitted this session, in wire order.
    pub fn def_refs(&self) -> &[Definition] {
        self.def_refs.defs()
    }

    /// The container type names emitted this session, in wire order.
    pub fn type_refs(&self) -> &[String] {
        self.type_refs.names()
    }
}
