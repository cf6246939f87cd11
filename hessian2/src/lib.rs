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

//! # Hessian2
//!
//! A byte-exact implementation of the Hessian 2.0 binary serialization
//! protocol, the wire format spoken by Dubbo-style RPC frameworks. Values a
//! Java peer serializes decode here to the same data, and values encoded
//! here parse on the Java side, byte for byte.
//!
//! ## Key Features
//!
//! - **Byte-exact wire format**: compact variable-width integers, chunked
//!   strings and binaries, typed and untyped containers
//! - **Reference sharing**: repeated class definitions, type names and
//!   container values are encoded once and back-referenced after that
//! - **Dynamic values**: unknown payloads decode into the [`Object`] tree
//!   without any prior type registration
//! - **Java string compatibility**: optional UTF-16 surrogate-pair encoding
//!   for supplementary code points, matching Java peers
//!
//! ## Scalars and typed values
//!
//! Any type implementing [`Serializer`] goes through the same engine:
//!
//! ```rust
//! use hessian2::{Decoder, Encoder, Error};
//!
//! # fn main() -> Result<(), Error> {
//! let mut encoder = Encoder::new();
//! encoder.encode(&300i32)?;
//! encoder.encode(&"hello".to_string())?;
//! let bytes = encoder.into_bytes();
//! assert_eq!(&bytes[..2], &[0xC9, 0x2C]);
//!
//! let mut decoder = Decoder::new(&bytes);
//! assert_eq!(decoder.decode::<i32>()?, 300);
//! assert_eq!(decoder.decode::<String>()?, "hello");
//! # Ok(())
//! # }
//! ```
//!
//! ## Dynamic object graphs
//!
//! Class instances carry their definition on the wire, so arbitrary payloads
//! round-trip through [`Object`] with no schema up front:
//!
//! ```rust
//! use std::rc::Rc;
//! use hessian2::{ClassInstance, Decoder, Encoder, Error, Object, RawDefinition};
//!
//! # fn main() -> Result<(), Error> {
//! let def = Rc::new(RawDefinition {
//!     type_name: "example.Point".to_string(),
//!     field_names: vec!["x".to_string(), "y".to_string()],
//! });
//! let point = Object::ClassInstance(ClassInstance {
//!     def,
//!     data: vec![Object::Integer(3), Object::Integer(4)],
//! });
//!
//! let mut encoder = Encoder::new();
//! encoder.encode(&point)?;
//! let bytes = encoder.into_bytes();
//!
//! let mut decoder = Decoder::new(&bytes);
//! assert_eq!(decoder.decode::<Object>()?, point);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Decoding never panics on wire data. Truncated input, unknown tags and
//! out-of-range back-references all surface as [`Error`] values with the
//! byte offset of the fault.

pub use hessian2_core::{
    buffer::{Reader, Writer},
    codec::Serializer,
    decoder::Decoder,
    encoder::Encoder,
    error::Error,
    object::{ClassInstance, Definition, Object, RawDefinition, TypeRef, TypedList, TypedMap},
    types::ObjectType,
};
