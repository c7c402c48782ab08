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

//! Core parser and document model for FDL, a small declarative language
//! describing event-driven components ("nodes") and read-only projections
//! of their outputs ("queries").
//!
//! The pipeline is: source text -> [`lex::Lexer`] (interning identifiers in
//! its own symbol table) -> [`parse`] (recursive descent, copying names
//! into the document's own arena) -> [`Document`].
//!
//! # Examples
//!
//! ```
//! use fdl_core::parse;
//!
//! let doc = parse(
//!     "node SoundNode {\n\
//!      \tin event Play;\n\
//!      \tfloat volume = 0.5;\n\
//!      }\n\
//!      query Status { out event Playing; }",
//! )
//! .unwrap();
//!
//! let node = doc.node("SoundNode").unwrap();
//! assert_eq!(doc.resolve_name(node.events[0].name), "Play");
//! assert_eq!(doc.queries.len(), 1);
//! ```
//!
//! Parsing stops at the first grammar violation; the error's `Display`
//! output is the diagnostic:
//!
//! ```
//! use fdl_core::parse;
//!
//! let err = parse("query Bad { in event X; }").unwrap_err();
//! assert_eq!(format!("{err}"), "UNEXPECTED KEYWORD_IN at (Ln: 0, Col: 14)");
//! ```

mod arena;
mod document;
mod error;
pub mod lex;
mod parser;

pub use arena::{Arena, Handle};
pub use document::{DefaultValue, Direction, Document, Event, Node, Query, ScalarType, Variable};
pub use error::{FdlError, FdlResult};
pub use parser::parse;
