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

//! Value-identity numbering for shared and cyclic structures.
//!
//! Both sides number every list, map and class instance in encounter order,
//! a container before its children. `Object::Ref(i)` designates the `i`-th
//! container of the same session, so a child can refer back to an ancestor
//! that is still being encoded/decoded. Because `Ref` is an index rather
//! than a pointer, the tables only need to hand out indices and validate
//! them; they never hold the objects themselves.

/// Assigns reference IDs during encoding.
#[derive(Default)]
pub struct RefWriter {
    next_ref_id: u32,
}

impl RefWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number the container about to be encoded. Call before its children.
    pub fn register(&mut self) -> u32 {
        let ref_id = self.next_ref_id;
        self.next_ref_id += 1;
        ref_id
    }

    /// Whether `ref_id` was handed out earlier in this session.
    pub fn contains(&self, ref_id: u32) -> bool {
        ref_id < self.next_ref_id
    }

    pub fn len(&self) -> usize {
        self.next_ref_id as usize
    }

    pub fn is_empty(&self) -> bool {
        self.next_ref_id == 0
    }

    pub fn clear(&mut self) {
        self.next_ref_id = 0;
    }
}

/// Assigns reference IDs during decoding; mirror of [`RefWriter`].
#[derive(Default)]
pub struct RefReader {
    next_ref_id: u32,
}

impl RefReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number the container about to be decoded. Call before its children.
    pub fn register(&mut self) -> u32 {
        let ref_id = self.next_ref_id;
        self.next_ref_id += 1;
        ref_id
    }

    pub fn contains(&self, ref_id: u32) -> bool {
        ref_id < self.next_ref_id
    }

    pub fn len(&self) -> usize {
        self.next_ref_id as usize
    }

    pub fn is_empty(&self) -> bool {
        self.next_ref_id == 0
    }

    pub fn clear(&mut self) {
        self.next_ref_id = 0;
    }
}
