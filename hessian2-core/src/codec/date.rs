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
use crate::types::{TAG_DATE_MILLIS, TAG_DATE_MINUTES};
use chrono::{DateTime, NaiveDateTime, TimeDelta};

const MILLIS_PER_MINUTE: i64 = 60_000;

// Compact minute form only when it reproduces the value exactly and the
// minute count fits the 4-byte field.
fn write_millis(encoder: &mut Encoder, millis: i64) {
    let minutes = millis / MILLIS_PER_MINUTE;
    let w = &mut encoder.writer;
    if minutes * MILLIS_PER_MINUTE == millis
        && (i32::MIN as i64..=i32::MAX as i64).contains(&minutes)
    {
        w.write_u8(TAG_DATE_MINUTES);
        w.write_i32(minutes as i32);
    } else {
        w.write_u8(TAG_DATE_MILLIS);
        w.write_i64(millis);
    }
}

fn read_millis(decoder: &mut Decoder) -> Result<i64, Error> {
    let pos = decoder.reader.offset();
    let tag = decoder.reader.read_u8()?;
    match tag {
        TAG_DATE_MILLIS => decoder.reader.read_i64(),
        TAG_DATE_MINUTES => Ok(decoder.reader.read_i32()? as i64 * MILLIS_PER_MINUTE),
        _ => Err(Error::unexpected_tag(tag, pos)),
    }
}

impl Serializer for NaiveDateTime {
    fn hessian_write(&self, encoder: &mut Encoder) -> Result<(), Error> {
        write_millis(encoder, self.and_utc().timestamp_millis());
        Ok(())
    }

    fn hessian_read(decoder: &mut Decoder) -> Result<Self, Error> {
        let pos = decoder.reader.offset();
        let millis = read_millis(decoder)?;
        DateTime::from_timestamp_millis(millis)
            .map(|dt| dt.naive_utc())
            .ok_or_else(|| {
                Error::encoding_error(format!("date value {} out of range at offset {}", millis, pos))
            })
    }
}

/// Spans of time share the date productions; the wire value is the span in
/// milliseconds since (or before) the epoch's zero point. `TimeDelta`'s
/// constructors cover the coarser units (seconds, minutes, hours, days,
/// weeks), all normalized to milliseconds here.
impl Serializer for TimeDelta {
    fn hessian_write(&self, encoder: &mut Encoder) -> Result<(), Error> {
        write_millis(encoder, self.num_milliseconds());
        Ok(())
    }

    fn hessian_read(decoder: &mut Decoder) -> Result<Self, Error> {
        Ok(TimeDelta::milliseconds(read_millis(decoder)?))
    }
}
