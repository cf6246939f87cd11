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

use crate::buffer::Reader;
use crate::codec::Serializer;
use crate::error::Error;
use crate::object::Definition;
use crate::resolver::def_resolver::DefReader;
use crate::resolver::ref_resolver::RefReader;
use crate::resolver::type_resolver::TypeRefReader;

/// Container nesting ceiling. Hostile input can nest one-element lists
/// arbitrarily deep; past this limit decoding fails instead of exhausting
/// the stack.
pub(crate) const MAX_DEPTH: usize = 1024;

/// Hessian2 decoding engine over a borrowed byte buffer.
///
/// Owns a [`Reader`] plus the three per-session de-duplication tables.
/// Decode failures are ordinary `Err` values carrying the failing offset;
/// the session is considered poisoned after a failure (entries appended to
/// the tables before the failure are intentionally not undone) and should
/// be discarded. Not safe for concurrent use.
///
/// # Examples
///
/// ```
/// use hessian2_core::decoder::Decoder;
///
/// let mut decoder = Decoder::new(&[0x49, 0x00, 0x00, 0x01, 0x2C]);
/// assert_eq!(decoder.decode::<i32>().unwrap(), 300);
/// assert_eq!(decoder.offset(), 5);
/// ```
pub struct Decoder<'bf> {
    pub reader: Reader<'bf>,
    pub(crate) type_refs: TypeRefReader,
    pub(crate) def_refs: DefReader,
    pub(crate) value_refs: RefReader,
    pub(crate) java_surrogate_compat: bool,
    pub(crate) depth: usize,
}

impl<'bf> Decoder<'bf> {
    pub fn new(bf: &'bf [u8]) -> Decoder<'bf> {
        Self::from_reader(Reader::new(bf))
    }

    /// Build on a caller-positioned reader.
    pub fn from_reader(reader: Reader<'bf>) -> Decoder<'bf> {
        Decoder {
            reader,
            type_refs: TypeRefReader::new(),
            def_refs: DefReader::new(),
            value_refs: RefReader::new(),
            java_surrogate_compat: false,
            depth: 0,
        }
    }

    /// Mirror of [`crate::encoder::Encoder::java_surrogate_compat`]: undo
    /// the surrogate-pair string rewriting applied by a Java peer.
    pub fn java_surrogate_compat(mut self, enabled: bool) -> Self {
        self.java_surrogate_compat = enabled;
        self
    }

    /// Decode one value from the current cursor position.
    pub fn decode<T: Serializer>(&mut self) -> Result<T, Error> {
        T::hessian_read(self)
    }

    pub(crate) fn enter_value(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_DEPTH {
            return Err(Error::encoding_error(format!(
                "nesting deeper than {} at offset {}",
                MAX_DEPTH,
                self.reader.offset()
            )));
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn exit_value(&mut self) {
        self.depth -= 1;
    }

    /// Bytes consumed so far.
    pub fn offset(&self) -> usize {
        self.reader.offset()
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

    /// The class definitions decoded this session, in wire order.
    pub fn def_refs(&self) -> &[Definition] {
        self.def_refs.defs()
    }

    /// The container type names decoded this session, in wire order.
    pub fn type_refs(&self) -> &[String] {
        self.type_refs.names()
    }
}
