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
use crate::error::Error;
use crate::types::{TAG_FALSE, TAG_TRUE};

impl Serializer for bool {
    fn hessian_write(&self, encoder: &mut Encoder) -> Result<(), Error> {
        encoder
            .writer
            .write_u8(if *self { TAG_TRUE } else { TAG_FALSE });
        Ok(())
    }

    fn hessian_read(decoder: &mut Decoder) -> Result<Self, Error> {
        let pos = decoder.reader.offset();
        match decoder.reader.read_u8()? {
            TAG_TRUE => Ok(true),
            TAG_FALSE => Ok(false),
            tag => Err(Error::unexpected_tag(tag, pos)),
        }
    }
}
