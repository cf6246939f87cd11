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

use crate::object::{Definition, RawDefinition};

/// Encode-side class-definition table.
///
/// Lookup is structural (type name + field names), so two `Definition`
/// handles to equal schemas dedup to one wire record. The table stays small
/// in practice (one entry per distinct class), so a linear scan beats a
/// hashed index here.
#[derive(Default)]
pub struct DefWriter {
    defs: Vec<Definition>,
}

impl DefWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(&self, def: &RawDefinition) -> Option<u32> {
        self.defs
            .iter()
            .position(|d| d.as_ref() == def)
            .map(|i| i as u32)
    }

    pub fn register(&mut self, def: Definition) -> u32 {
        let idx = self.defs.len() as u32;
        self.defs.push(def);
        idx
    }

    pub fn defs(&self) -> &[Definition] {
        &self.defs
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    pub fn clear(&mut self) {
        self.defs.clear();
    }
}

/// Decode-side class-definition table: schemas in wire-appearance order,
/// shared by `Rc` among every instance of the class.
#[derive(Default)]
pub struct DefReader {
    defs: Vec<Definition>,
}

impl DefReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, def: Definition) -> u32 {
        let idx = self.defs.len() as u32;
        self.defs.push(def);
        idx
    }

    pub fn get(&self, idx: i32) -> Option<&Definition> {
        if idx < 0 {
            return None;
        }
        self.defs.get(idx as usize)
    }

    pub fn defs(&self) -> &[Definition] {
        &self.defs
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    pub fn clear(&mut self) {
        self.defs.clear();
    }
}
