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

use std::collections::HashMap;

/// Encode-side type-name table.
///
/// The first time a type name is written it goes on the wire as a string and
/// gets the next index; later occurrences are written as that index.
#[derive(Default)]
pub struct TypeRefWriter {
    indices: HashMap<String, u32>,
    names: Vec<String>,
}

impl TypeRefWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index previously assigned to `name`, if any.
    pub fn get(&self, name: &str) -> Option<u32> {
        self.indices.get(name).copied()
    }

    /// Append `name` and return its index. Caller checks `get` first.
    pub fn register(&mut self, name: &str) -> u32 {
        let idx = self.names.len() as u32;
        self.indices.insert(name.to_string(), idx);
        self.names.push(name.to_string());
        idx
    }

    /// Names in index order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn clear(&mut self) {
        self.indices.clear();
        self.names.clear();
    }
}

/// Decode-side type-name table: names in the order they appeared on the wire.
#[derive(Default)]
pub struct TypeRefReader {
    names: Vec<String>,
}

impl TypeRefReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: String) -> u32 {
        let idx = self.names.len() as u32;
        self.names.push(name);
        idx
    }

    pub fn get(&self, idx: i32) -> Option<&str> {
        if idx < 0 {
            return None;
        }
        self.names.get(idx as usize).map(String::as_str)
    }

    /// Names in index order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }
}
