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

use crate::codec::Serializer;
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::ensure;
use crate::error::Error;
use crate::types::TAG_REF;

/// Write a back-reference to the `ref_id`-th container of this session.
///
/// A `Ref` must point at something the encoder already numbered in the same
/// pass; anything else is caller misuse, loud in debug builds and an
/// [`Error::InvalidRef`] in release.
pub(crate) fn write_ref(encoder: &mut Encoder, ref_id: u32) -> Result<(), Error> {
    debug_assert!(
        encoder.value_refs.contains(ref_id),
        "ref {} was never registered in this session",
        ref_id
    );
    if !encoder.value_refs.contains(ref_id) {
        return Err(Error::invalid_ref(format!(
            "ref {} was never registered in this session",
            ref_id
        )));
    }
    encoder.writer.write_u8(TAG_REF);
    (ref_id as i32).hessian_write(encoder)
}

pub(crate) fn read_ref(decoder: &mut Decoder) -> Result<u32, Error> {
    let pos = decoder.reader.offset();
    let tag = decoder.reader.read_u8()?;
    ensure!(tag == TAG_REF, Error::unexpected_tag(tag, pos));
    let idx = i32::hessian_read(decoder)?;
    if idx < 0 || !decoder.value_refs.contains(idx as u32) {
        return Err(Error::invalid_ref(format!(
            "value ref {} out of range at offset {}",
            idx, pos
        )));
    }
    Ok(idx as u32)
}
