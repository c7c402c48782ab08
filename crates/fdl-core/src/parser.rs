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

//! Recursive-descent parser for FDL documents.
//!
//! # Grammar
//!
//! ```text
//! Document   := (NodeDecl | QueryDecl)*
//! NodeDecl   := "node" IDENT "{" NodeMember* "}"
//! NodeMember := Type IDENT DefaultOpt ";"
//!             | ("in"|"out") Type IDENT DefaultOpt ";"
//!             | ("in"|"out") "event" IDENT ";"
//! QueryDecl  := "query" IDENT "{" QueryMember* "}"
//! QueryMember:= "out" "event" IDENT ";"
//!             | "out" Type IDENT DefaultOpt ";"
//! Type       := "float" | "bool"
//! DefaultOpt := ("=" NumberLit)?    after "float"
//!             | ("=" BoolLit)?      after "bool"
//! ```
//!
//! Parsing is non-recovering: the first structural or token mismatch aborts
//! the whole parse and the error carries the only diagnostic. The document
//! under construction is dropped on failure, so callers never observe a
//! partial result.

use crate::document::{DefaultValue, Direction, Document, Event, Node, Query, ScalarType, Variable};
use crate::error::{FdlError, FdlResult};
use crate::lex::{Lexer, Token, TokenKind, TokenValue};
use crate::Handle;

/// Parses one FDL source buffer into a [`Document`].
///
/// # Examples
///
/// ```
/// use fdl_core::parse;
///
/// let doc = parse("node SoundNode { in event Play; }").unwrap();
/// assert_eq!(doc.nodes.len(), 1);
/// assert_eq!(doc.resolve_name(doc.nodes[0].name), "SoundNode");
///
/// let err = parse("node 5").unwrap_err();
/// assert!(err.to_string().starts_with("EXPECTED IDENT"));
/// ```
pub fn parse(input: &str) -> FdlResult<Document> {
    let mut parser = Parser {
        lexer: Lexer::new(input),
        doc: Document::new(),
    };
    parser.parse_document()?;
    Ok(parser.doc)
}

struct Parser<'a> {
    lexer: Lexer<'a>,
    doc: Document,
}

impl Parser<'_> {
    fn parse_document(&mut self) -> FdlResult<()> {
        loop {
            match self.lexer.peek().kind {
                TokenKind::Eof => return Ok(()),
                TokenKind::KwNode => {
                    let node = self.parse_node()?;
                    self.doc.nodes.push(node);
                }
                TokenKind::KwQuery => {
                    let query = self.parse_query()?;
                    self.doc.queries.push(query);
                }
                kind => return Err(self.unexpected(kind)),
            }
        }
    }

    fn parse_node(&mut self) -> FdlResult<Node> {
        self.expect(TokenKind::KwNode)?;
        let name = self.expect_name()?;
        self.expect(TokenKind::LeftBrace)?;

        let mut node = Node {
            name,
            variables: Vec::new(),
            events: Vec::new(),
        };

        loop {
            match self.lexer.peek().kind {
                TokenKind::TypeFloat | TokenKind::TypeBool => {
                    // Variable declaration without a direction prefix.
                    node.variables.push(self.parse_variable()?);
                }
                prefix @ (TokenKind::KwIn | TokenKind::KwOut) => {
                    self.lexer.next_token();
                    let direction = if prefix == TokenKind::KwIn {
                        Direction::In
                    } else {
                        Direction::Out
                    };
                    match self.lexer.peek().kind {
                        TokenKind::TypeFloat | TokenKind::TypeBool => {
                            let mut variable = self.parse_variable()?;
                            variable.direction = Some(direction);
                            node.variables.push(variable);
                        }
                        // Anything else must be an event declaration. A bare
                        // `event` with no prefix never reaches this arm; it
                        // ends the member loop above instead.
                        _ => node.events.push(self.parse_event(direction)?),
                    }
                }
                _ => break,
            }
        }

        self.expect_block_close()?;
        Ok(node)
    }

    /// A query can only contain output variables and events.
    fn parse_query(&mut self) -> FdlResult<Query> {
        self.expect(TokenKind::KwQuery)?;
        let name = self.expect_name()?;
        self.expect(TokenKind::LeftBrace)?;

        let mut query = Query {
            name,
            variables: Vec::new(),
            events: Vec::new(),
        };

        while self.lexer.peek().kind == TokenKind::KwOut {
            self.lexer.next_token();
            if self.lexer.peek().kind == TokenKind::KwEvent {
                query.events.push(self.parse_event(Direction::Out)?);
            } else {
                let mut variable = self.parse_variable()?;
                variable.direction = Some(Direction::Out);
                query.variables.push(variable);
            }
        }

        self.expect_block_close()?;
        Ok(query)
    }

    /// Parses `Type IDENT ("=" default)? ";"`. The caller fills in the
    /// direction when a prefix was consumed.
    fn parse_variable(&mut self) -> FdlResult<Variable> {
        let tok = self.lexer.next_token();
        let ty = match tok.kind {
            TokenKind::TypeFloat => ScalarType::Float,
            TokenKind::TypeBool => ScalarType::Bool,
            kind => return Err(self.unexpected(kind)),
        };

        let name = self.expect_name()?;

        let default = if self.lexer.peek().kind == TokenKind::Assign {
            self.lexer.next_token();
            Some(self.parse_default(ty)?)
        } else {
            None
        };

        self.expect(TokenKind::Semicolon)?;
        Ok(Variable {
            name,
            ty,
            default,
            direction: None,
        })
    }

    /// Parses the literal after `=`, typed by the variable being declared.
    /// A float default accepts an integer or real literal, cast to float; a
    /// bool default accepts only `true` / `false`.
    fn parse_default(&mut self, ty: ScalarType) -> FdlResult<DefaultValue> {
        let tok = self.lexer.next_token();
        match ty {
            ScalarType::Float => match tok.value {
                TokenValue::Integer(v) => Ok(DefaultValue::Float(v as f32)),
                TokenValue::Real(v) => Ok(DefaultValue::Float(v)),
                _ => Err(self.unexpected(tok.kind)),
            },
            ScalarType::Bool => match tok.kind {
                TokenKind::KwTrue => Ok(DefaultValue::Bool(true)),
                TokenKind::KwFalse => Ok(DefaultValue::Bool(false)),
                kind => Err(self.unexpected(kind)),
            },
        }
    }

    /// Parses `"event" IDENT ";"` with the direction the caller consumed.
    fn parse_event(&mut self, direction: Direction) -> FdlResult<Event> {
        self.expect(TokenKind::KwEvent)?;
        let name = self.expect_name()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(Event { name, direction })
    }

    /// Consumes the next token, requiring the given kind.
    fn expect(&mut self, expected: TokenKind) -> FdlResult<Token> {
        let tok = self.lexer.next_token();
        if tok.kind == expected {
            Ok(tok)
        } else {
            Err(FdlError::expected(
                expected,
                tok.kind,
                self.lexer.position(),
            ))
        }
    }

    /// Consumes the `}` ending a member loop. The loop breaks without
    /// consuming whatever token it did not recognize, so a mismatch here is
    /// reported as that token being unexpected, at its own position.
    fn expect_block_close(&mut self) -> FdlResult<()> {
        let tok = self.lexer.next_token();
        if tok.kind == TokenKind::RightBrace {
            Ok(())
        } else {
            Err(self.unexpected(tok.kind))
        }
    }

    /// Consumes an identifier and copies its text out of the lexer's
    /// interning table into the document's own arena. The returned handle
    /// outlives the lexer.
    fn expect_name(&mut self) -> FdlResult<Handle> {
        let tok = self.expect(TokenKind::Ident)?;
        match tok.value {
            TokenValue::Symbol(sym) => {
                let text = self.lexer.resolve(sym);
                Ok(self.doc.insert_name(text))
            }
            // An identifier token always carries its symbol.
            _ => Err(self.unexpected(tok.kind)),
        }
    }

    fn unexpected(&self, kind: TokenKind) -> FdlError {
        FdlError::unexpected(kind, self.lexer.position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source() {
        let doc = parse("").unwrap();
        assert!(doc.nodes.is_empty());
        assert!(doc.queries.is_empty());
    }

    #[test]
    fn test_empty_node() {
        let doc = parse("node X { }").unwrap();
        assert_eq!(doc.nodes.len(), 1);
        let node = &doc.nodes[0];
        assert_eq!(doc.resolve_name(node.name), "X");
        assert!(node.variables.is_empty());
        assert!(node.events.is_empty());
    }

    #[test]
    fn test_node_and_query_order_preserved() {
        let doc = parse("node A { } query Q { } node B { }").unwrap();
        let names: Vec<&str> = doc
            .nodes
            .iter()
            .map(|n| doc.resolve_name(n.name))
            .collect();
        assert_eq!(names, ["A", "B"]);
        assert_eq!(doc.resolve_name(doc.queries[0].name), "Q");
    }

    #[test]
    fn test_directed_and_undirected_variables() {
        let doc = parse("node N { float plain; in float speed; out bool done; }").unwrap();
        let vars = &doc.nodes[0].variables;
        assert_eq!(vars.len(), 3);
        assert_eq!(vars[0].direction, None);
        assert_eq!(vars[1].direction, Some(Direction::In));
        assert_eq!(vars[1].ty, ScalarType::Float);
        assert_eq!(vars[2].direction, Some(Direction::Out));
        assert_eq!(vars[2].ty, ScalarType::Bool);
    }

    #[test]
    fn test_float_default_from_integer_literal() {
        let doc = parse("node N { float f = 1; }").unwrap();
        let var = &doc.nodes[0].variables[0];
        assert_eq!(var.default, Some(DefaultValue::Float(1.0)));
    }

    #[test]
    fn test_float_default_from_real_literal() {
        let doc = parse("node N { float f = 0.5f; }").unwrap();
        let var = &doc.nodes[0].variables[0];
        assert_eq!(var.default, Some(DefaultValue::Float(0.5)));
    }

    #[test]
    fn test_bool_defaults() {
        let doc = parse("node N { bool a = true; bool b = false; bool c; }").unwrap();
        let vars = &doc.nodes[0].variables;
        assert_eq!(vars[0].default, Some(DefaultValue::Bool(true)));
        assert_eq!(vars[1].default, Some(DefaultValue::Bool(false)));
        assert_eq!(vars[2].default, None);
    }

    #[test]
    fn test_bare_event_is_not_a_node_member() {
        let err = parse("node N { event Orphan; }").unwrap_err();
        assert!(matches!(
            err,
            FdlError::Unexpected {
                token: TokenKind::KwEvent,
                ..
            }
        ));
    }

    #[test]
    fn test_missing_semicolon() {
        let err = parse("node N { in event Play }").unwrap_err();
        assert!(matches!(
            err,
            FdlError::Expected {
                expected: TokenKind::Semicolon,
                actual: TokenKind::RightBrace,
                ..
            }
        ));
    }

    #[test]
    fn test_missing_closer_at_eof() {
        let err = parse("node N { in event Play;").unwrap_err();
        assert!(matches!(
            err,
            FdlError::Unexpected {
                token: TokenKind::Eof,
                ..
            }
        ));
    }

    #[test]
    fn test_top_level_junk() {
        let err = parse("; node N { }").unwrap_err();
        assert!(matches!(
            err,
            FdlError::Unexpected {
                token: TokenKind::Semicolon,
                ..
            }
        ));
    }

    #[test]
    fn test_node_name_must_be_identifier() {
        let err = parse("node 5 { }").unwrap_err();
        assert!(matches!(
            err,
            FdlError::Expected {
                expected: TokenKind::Ident,
                actual: TokenKind::Integer,
                ..
            }
        ));
    }

    #[test]
    fn test_query_variable_without_type_keyword() {
        // `out` followed by neither `event` nor a type dispatches to the
        // variable rule, which rejects the identifier.
        let err = parse("query Q { out Status; }").unwrap_err();
        assert!(matches!(
            err,
            FdlError::Unexpected {
                token: TokenKind::Ident,
                ..
            }
        ));
    }

    #[test]
    fn test_document_survives_lexer_drop() {
        let doc = {
            let source = String::from("node Transient { out event Done; }");
            parse(&source).unwrap()
        };
        assert_eq!(doc.resolve_name(doc.nodes[0].events[0].name), "Done");
    }
}
