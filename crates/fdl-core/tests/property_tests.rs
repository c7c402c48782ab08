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

//! Property-based tests for the arena, symbol table and parser.
//!
//! # Properties Tested
//!
//! 1. **Arena stability**: inserting more data never changes the bytes
//!    behind previously issued handles.
//! 2. **Interning idempotence**: equal strings intern to the identical
//!    handle, in any insertion order (including sorted, the tree's
//!    degenerate worst case).
//! 3. **Name round-trip**: every identifier in a parsed document resolves
//!    back to its source spelling exactly.
//! 4. **Lookahead idempotence**: peeking any number of times returns the
//!    same token without advancing the cursor.

use fdl_core::lex::{Lexer, SymbolTable, TokenKind};
use fdl_core::{parse, Arena};
use proptest::prelude::*;

/// Strategy for FDL identifiers: alphabetic head, alphanumeric/underscore
/// tail, avoiding the keyword table.
fn identifier() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_]{0,15}".prop_filter("keywords are not identifiers", |s| {
        !matches!(
            s.as_str(),
            "in" | "out" | "event" | "node" | "query" | "float" | "bool" | "true" | "false"
        )
    })
}

proptest! {
    /// Property: bytes behind a handle never change as the arena grows.
    #[test]
    fn prop_arena_handles_stable_under_growth(
        chunks in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..512), 1..64)
    ) {
        let mut arena = Arena::new();
        let handles: Vec<_> = chunks.iter().map(|c| arena.insert(c)).collect();
        // Grow some more after the handles were issued.
        for chunk in &chunks {
            arena.insert(chunk);
        }
        for (chunk, handle) in chunks.iter().zip(&handles) {
            prop_assert_eq!(arena.get(*handle), chunk.as_slice());
        }
    }

    /// Property: interning the same string twice returns the identical
    /// handle, and resolving it returns byte-identical text both times.
    #[test]
    fn prop_intern_is_idempotent(names in prop::collection::vec(identifier(), 1..64)) {
        let mut table = SymbolTable::new();
        let first: Vec<_> = names.iter().map(|n| table.intern(n)).collect();
        let second: Vec<_> = names.iter().map(|n| table.intern(n)).collect();
        prop_assert_eq!(&first, &second);
        for (name, handle) in names.iter().zip(&first) {
            prop_assert_eq!(table.resolve(*handle), name.as_str());
            prop_assert_eq!(table.lookup(name), Some(*handle));
        }
    }

    /// Property: insertion order does not affect intern/lookup agreement.
    /// Sorted insertion exercises the degenerate chain.
    #[test]
    fn prop_intern_survives_sorted_insertion(names in prop::collection::vec(identifier(), 1..64)) {
        let mut sorted = names.clone();
        sorted.sort();
        let mut table = SymbolTable::new();
        for name in &sorted {
            table.intern(name);
        }
        for name in &names {
            let handle = table.lookup(name);
            prop_assert!(handle.is_some());
            prop_assert_eq!(table.resolve(handle.unwrap()), name.as_str());
        }
    }

    /// Property: lookup never invents handles for unseen strings.
    #[test]
    fn prop_lookup_misses_unseen(name in identifier()) {
        let mut table = SymbolTable::new();
        table.intern("only_entry");
        if name != "only_entry" {
            prop_assert!(table.lookup(&name).is_none());
        }
    }

    /// Property: document name handles round-trip to the source spelling,
    /// for a generated document with one node of events and one query.
    #[test]
    fn prop_document_names_roundtrip(
        node_name in identifier(),
        event_names in prop::collection::vec(identifier(), 0..8),
        query_name in identifier(),
    ) {
        let mut source = format!("node {node_name} {{ ");
        for ev in &event_names {
            source.push_str(&format!("in event {ev}; "));
        }
        source.push_str(&format!("}} query {query_name} {{ }}"));

        let doc = parse(&source).unwrap();
        prop_assert_eq!(doc.resolve_name(doc.nodes[0].name), node_name.as_str());
        prop_assert_eq!(doc.resolve_name(doc.queries[0].name), query_name.as_str());
        prop_assert_eq!(doc.nodes[0].events.len(), event_names.len());
        for (ev, parsed) in event_names.iter().zip(&doc.nodes[0].events) {
            prop_assert_eq!(doc.resolve_name(parsed.name), ev.as_str());
        }
    }

    /// Property: peek is idempotent and does not advance the cursor.
    #[test]
    fn prop_peek_idempotent(source in "[a-z0-9 ;{}=.]{0,40}", peeks in 1usize..8) {
        let mut lexer = Lexer::new(&source);
        let first = lexer.peek();
        let pos = lexer.position();
        for _ in 0..peeks {
            prop_assert_eq!(lexer.peek(), first);
            prop_assert_eq!(lexer.position(), pos);
        }
        prop_assert_eq!(lexer.next_token(), first);
    }

    /// Property: the scanner terminates on arbitrary input and ends every
    /// token stream with EOF.
    #[test]
    fn prop_scanner_terminates(source in ".{0,200}") {
        let mut lexer = Lexer::new(&source);
        // Bounded by construction: each scan consumes at least one byte.
        for _ in 0..=source.len() {
            if lexer.next_token().kind == TokenKind::Eof {
                return Ok(());
            }
        }
        prop_assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }
}
