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

//! Document structure for parsed FDL.
//!
//! The document owns its own name arena: every name handle stored in a
//! node, query, variable or event indexes that arena, populated by copying
//! identifier text out of the lexer as the parser consumes it. The document
//! is therefore independently valid after the lexer and its interning table
//! are discarded.

use crate::arena::{Arena, Handle};

/// Direction of an event, or of a variable carrying a direction prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Consumed by the node (`in`).
    In,
    /// Produced by the node (`out`).
    Out,
}

/// Scalar type of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    /// `bool`
    Bool,
    /// `float`
    Float,
}

/// A variable's default value, typed to match its scalar type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    /// Default for a `bool` variable.
    Bool(bool),
    /// Default for a `float` variable. Integer literals in source are cast.
    Float(f32),
}

/// A variable declared in a node or query body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variable {
    /// Name handle into the document's arena.
    pub name: Handle,
    /// Declared scalar type.
    pub ty: ScalarType,
    /// Default value, when the declaration carried `= ...`.
    pub default: Option<DefaultValue>,
    /// Direction prefix; `None` for plain node state fields.
    pub direction: Option<Direction>,
}

/// An event declared in a node or query body. Events always have a
/// direction; there is no undirected event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    /// Name handle into the document's arena.
    pub name: Handle,
    /// `in` or `out`.
    pub direction: Direction,
}

/// A declared component with variables and directional events.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Name handle into the document's arena.
    pub name: Handle,
    /// Variables in declaration order.
    pub variables: Vec<Variable>,
    /// Events in declaration order.
    pub events: Vec<Event>,
}

/// A declared output-only projection of node outputs. All members are
/// output-direction by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Name handle into the document's arena.
    pub name: Handle,
    /// Variables in declaration order.
    pub variables: Vec<Variable>,
    /// Events in declaration order.
    pub events: Vec<Event>,
}

/// The parsed form of one FDL source buffer.
///
/// Nodes and queries appear in declaration order. Resolve any name handle
/// with [`Document::resolve_name`]; the text stays valid for the document's
/// lifetime.
#[derive(Debug, Clone, Default)]
pub struct Document {
    names: Arena,
    /// Node definitions in declaration order.
    pub nodes: Vec<Node>,
    /// Query definitions in declaration order.
    pub queries: Vec<Query>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies `text` into the document's name arena.
    ///
    /// Names are re-inserted, not deduplicated: two declarations spelling
    /// the same identifier get distinct handles with equal text.
    pub(crate) fn insert_name(&mut self, text: &str) -> Handle {
        self.names.insert_str(text)
    }

    /// Resolves a name handle stored in this document.
    ///
    /// # Panics
    ///
    /// Panics if `handle` belongs to a different document.
    pub fn resolve_name(&self, handle: Handle) -> &str {
        self.names.get_str(handle)
    }

    /// Finds a node by name.
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes
            .iter()
            .find(|n| self.resolve_name(n.name) == name)
    }

    /// Finds a query by name.
    pub fn query(&self, name: &str) -> Option<&Query> {
        self.queries
            .iter()
            .find(|q| self.resolve_name(q.name) == name)
    }
}
