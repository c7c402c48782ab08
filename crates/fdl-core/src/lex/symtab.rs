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

//! Identifier interning for the scanner.
//!
//! The table deduplicates identifier text while a single source buffer is
//! being scanned: interning the same spelling twice yields the same handle.
//! Lookups walk an unbalanced binary search tree ordered by exact byte-wise
//! string comparison; tree nodes live in a `Vec` and hold handles into a
//! private [`Arena`], so the structure is a plain value graph with no
//! pointer aliasing.
//!
//! The tree is never rebalanced. Sorted insertion degenerates into a chain,
//! which is acceptable for the table's scope of one parse with a modest
//! identifier count.

use crate::arena::{Arena, Handle};

#[derive(Debug, Clone)]
struct TreeNode {
    handle: Handle,
    left: Option<u32>,
    right: Option<u32>,
}

/// A string-interning symbol table backed by a binary search tree.
///
/// # Examples
///
/// ```
/// use fdl_core::lex::SymbolTable;
///
/// let mut table = SymbolTable::new();
/// let a = table.intern("velocity");
/// let b = table.intern("velocity");
/// assert_eq!(a, b);
/// assert_eq!(table.resolve(a), "velocity");
/// assert!(table.lookup("unseen").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    arena: Arena,
    nodes: Vec<TreeNode>,
    root: Option<u32>,
}

impl SymbolTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `text` if it is not present and returns its canonical handle.
    ///
    /// Equal strings always map to the identical handle, so handle equality
    /// is string equality for interned text.
    pub fn intern(&mut self, text: &str) -> Handle {
        match self.walk(text) {
            Walk::Found(handle) => handle,
            Walk::Missing(slot) => {
                let handle = self.arena.insert_str(text);
                let id = self.nodes.len() as u32;
                self.nodes.push(TreeNode {
                    handle,
                    left: None,
                    right: None,
                });
                match slot {
                    None => self.root = Some(id),
                    Some((parent, Side::Left)) => self.nodes[parent as usize].left = Some(id),
                    Some((parent, Side::Right)) => self.nodes[parent as usize].right = Some(id),
                }
                handle
            }
        }
    }

    /// Looks `text` up without inserting; `None` when it was never interned.
    pub fn lookup(&self, text: &str) -> Option<Handle> {
        match self.walk(text) {
            Walk::Found(handle) => Some(handle),
            Walk::Missing(_) => None,
        }
    }

    /// Resolves a handle issued by this table back to its text.
    ///
    /// # Panics
    ///
    /// Panics if `handle` was not issued by this table.
    pub fn resolve(&self, handle: Handle) -> &str {
        self.arena.get_str(handle)
    }

    /// Number of distinct strings interned.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if nothing has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Descends the tree comparing byte-wise; reports either the node that
    /// holds `text` or the attachment point a new node would take.
    fn walk(&self, text: &str) -> Walk {
        let mut current = match self.root {
            Some(id) => id,
            None => return Walk::Missing(None),
        };
        loop {
            let node = &self.nodes[current as usize];
            let stored = self.arena.get(node.handle);
            match text.as_bytes().cmp(stored) {
                std::cmp::Ordering::Equal => return Walk::Found(node.handle),
                std::cmp::Ordering::Less => match node.left {
                    Some(next) => current = next,
                    None => return Walk::Missing(Some((current, Side::Left))),
                },
                std::cmp::Ordering::Greater => match node.right {
                    Some(next) => current = next,
                    None => return Walk::Missing(Some((current, Side::Right))),
                },
            }
        }
    }
}

enum Side {
    Left,
    Right,
}

enum Walk {
    Found(Handle),
    Missing(Option<(u32, Side)>),
}
