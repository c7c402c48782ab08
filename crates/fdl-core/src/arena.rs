// FDL - Flow Definition Language
//
// Copyright (c) 2025 FDL contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Append-only byte arena with stable handles.
//!
//! The arena stores byte sequences in a list of fixed-capacity blocks and
//! hands out opaque [`Handle`]s. A block is filled but never reallocated or
//! relocated; growth appends fresh blocks. Bytes reachable through a handle
//! are therefore immutable and valid for the arena's entire lifetime, no
//! matter how much is inserted afterwards.
//!
//! There is no deletion, no mutation after insert, and no shrink.
//!
//! # Examples
//!
//! ```
//! use fdl_core::{Arena, Handle};
//!
//! let mut arena = Arena::new();
//! let hello = arena.insert(b"hello");
//! let world = arena.insert(b"world");
//! assert_eq!(arena.get(hello), b"hello");
//! assert_eq!(arena.get(world), b"world");
//! ```

/// Minimum capacity of a storage block, in bytes.
///
/// Inserts larger than this get a dedicated block of exactly their size.
const MIN_BLOCK_SIZE: usize = 4096;

/// An opaque, copyable reference to a byte sequence inside an [`Arena`].
///
/// A handle is only meaningful to the arena that issued it. Passing a
/// handle to a different arena violates the caller contract; the arena
/// detects the out-of-range case by panicking rather than returning
/// unrelated bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(u32);

#[derive(Debug, Clone)]
struct Entry {
    block: u32,
    start: u32,
    len: u32,
}

/// Append-only block storage for byte sequences.
#[derive(Debug, Clone, Default)]
pub struct Arena {
    blocks: Vec<Vec<u8>>,
    entries: Vec<Entry>,
}

impl Arena {
    /// Creates an empty arena. No block is allocated until the first insert.
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            entries: Vec::new(),
        }
    }

    /// Appends `bytes` and returns a handle that stays valid for the
    /// arena's lifetime.
    pub fn insert(&mut self, bytes: &[u8]) -> Handle {
        let block = self.block_with_room(bytes.len());
        let target = &mut self.blocks[block];
        let start = target.len();
        // Capacity was ensured by block_with_room, so this never reallocates
        // and previously issued handles keep pointing at stable bytes.
        target.extend_from_slice(bytes);

        let id = self.entries.len() as u32;
        self.entries.push(Entry {
            block: block as u32,
            start: start as u32,
            len: bytes.len() as u32,
        });
        Handle(id)
    }

    /// Appends the UTF-8 bytes of `text`. The returned handle can be
    /// resolved with [`Arena::get_str`].
    pub fn insert_str(&mut self, text: &str) -> Handle {
        self.insert(text.as_bytes())
    }

    /// Returns the bytes behind `handle` in O(1).
    ///
    /// # Panics
    ///
    /// Panics if `handle` was not issued by this arena.
    pub fn get(&self, handle: Handle) -> &[u8] {
        let entry = &self.entries[handle.0 as usize];
        let start = entry.start as usize;
        &self.blocks[entry.block as usize][start..start + entry.len as usize]
    }

    /// Returns the text behind a handle issued by [`Arena::insert_str`].
    ///
    /// # Panics
    ///
    /// Panics if `handle` was not issued by this arena or the stored bytes
    /// are not valid UTF-8 (i.e. the handle came from a raw byte insert).
    pub fn get_str(&self, handle: Handle) -> &str {
        std::str::from_utf8(self.get(handle)).expect("handle was issued by insert_str")
    }

    /// Number of handles issued so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of a block with at least `needed` bytes of spare capacity,
    /// appending a new block if the current one is too full.
    fn block_with_room(&mut self, needed: usize) -> usize {
        if let Some(last) = self.blocks.last() {
            if last.capacity() - last.len() >= needed {
                return self.blocks.len() - 1;
            }
        }
        self.blocks
            .push(Vec::with_capacity(MIN_BLOCK_SIZE.max(needed)));
        self.blocks.len() - 1
    }
}
