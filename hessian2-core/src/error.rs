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

use std::borrow::Cow;

use thiserror::Error;

/// Error type for Hessian2 encoding and decoding operations.
///
/// Decode failures are normal, recoverable outcomes: a decoder fed truncated
/// or foreign bytes returns one of these instead of panicking. Use the static
/// constructor functions ([`Error::buffer_out_of_bound`],
/// [`Error::unexpected_tag`], [`Error::invalid_ref`],
/// [`Error::encoding_error`]) rather than building variants directly; the
/// constructors keep `Into<Cow>` conversion in one place and stay out of the
/// hot path's way.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A read needed more bytes than remain: `offset + needed > capacity`.
    #[error("Buffer out of bound: {0} + {1} > {2}")]
    BufferOutOfBound(usize, usize, usize),

    /// A tag byte outside every recognized production for the requested type.
    #[error("Unexpected tag 0x{0:02X} at offset {1}")]
    UnexpectedTag(u8, usize),

    /// A type-ref, def-ref or value-ref index past the table's current size,
    /// or an encode of a `Ref` that was never registered in this session.
    #[error("{0}")]
    InvalidRef(Cow<'static, str>),

    /// Invalid UTF-8 payload or otherwise unrepresentable character data.
    #[error("{0}")]
    EncodingError(Cow<'static, str>),

    /// Anything else; carries the underlying cause.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn buffer_out_of_bound(offset: usize, needed: usize, capacity: usize) -> Self {
        Error::BufferOutOfBound(offset, needed, capacity)
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn unexpected_tag(tag: u8, offset: usize) -> Self {
        Error::UnexpectedTag(tag, offset)
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn invalid_ref<S: Into<Cow<'static, str>>>(s: S) -> Self {
        Error::InvalidRef(s.into())
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn encoding_error<S: Into<Cow<'static, str>>>(s: S) -> Self {
        Error::EncodingError(s.into())
    }
}

/// Ensures a condition holds; otherwise returns the given [`enum@Error`].
///
/// ```
/// use hessian2_core::ensure;
/// use hessian2_core::error::Error;
///
/// fn check_index(i: usize, len: usize) -> Result<(), Error> {
///     ensure!(i < len, Error::invalid_ref(format!("ref {} out of range", i)));
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
}
