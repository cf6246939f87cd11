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

//! # Hessian2 Core
//!
//! Core implementation of the Hessian 2.0 binary serialization protocol,
//! byte-compatible with the Java reference implementation used by
//! Dubbo-style RPC frameworks.
//!
//! ## Architecture
//!
//! - **`encoder`** / **`decoder`**: stateful per-message engines that own
//!   the session reference tables
//! - **`buffer`**: big-endian binary Reader/Writer cursors
//! - **`codec`**: one module per wire production plus the [`codec::Serializer`]
//!   trait and the generic [`object::Object`] dispatch
//! - **`resolver`**: session tables for type names, class definitions and
//!   value back-references
//! - **`object`**: the dynamic value tree decoded values materialize into
//! - **`types`**: wire tag constants and tag-range predicates
//! - **`error`**: error handling and result types
//!
//! ## Key Concepts
//!
//! ### Reference tables
//!
//! An encoder or decoder accumulates three tables over the lifetime of a
//! message: type names, class definitions and container value references.
//! Resetting the engine clears all three, so one engine instance can be
//! reused across messages.
//!
//! ### Java string compatibility
//!
//! Supplementary code points can optionally be encoded as UTF-16 surrogate
//! pairs, matching what Java peers emit. See
//! [`encoder::Encoder::java_surrogate_compat`].
//!
//! ## Usage
//!
//! This crate is typically used through the higher-level `hessian2` crate.
//!
//! ```rust
//! use hessian2_core::decoder::Decoder;
//! use hessian2_core::encoder::Encoder;
//! use hessian2_core::object::Object;
//!
//! let mut encoder = Encoder::new();
//! encoder.encode(&Object::from("hello")).unwrap();
//! let bytes = encoder.into_bytes();
//!
//! let mut decoder = Decoder::new(&bytes);
//! assert_eq!(decoder.decode::<Object>().unwrap(), Object::from("hello"));
//! ```

pub mod buffer;
pub mod codec;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod object;
pub mod resolver;
pub mod types;
