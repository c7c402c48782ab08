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

//! Token kinds and payloads produced by the scanner.
//!
//! The kind set covers the whole lexical surface of FDL, including the
//! operator and punctuation tokens that the current grammar never consumes;
//! the scanner classifies them all the same so the parser is the single
//! place that decides what is grammatical.

use crate::arena::Handle;
use std::fmt;

/// Classification of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// An interned identifier; the token carries a symbol handle.
    Ident,
    /// `in` keyword.
    KwIn,
    /// `out` keyword.
    KwOut,
    /// `node` keyword.
    KwNode,
    /// `query` keyword.
    KwQuery,
    /// `event` keyword.
    KwEvent,
    /// `true` keyword.
    KwTrue,
    /// `false` keyword.
    KwFalse,
    /// `float` type keyword.
    TypeFloat,
    /// `bool` type keyword.
    TypeBool,
    /// Integer literal; the token carries the parsed value.
    Integer,
    /// Real literal; the token carries the parsed value.
    Real,
    /// `=`
    Assign,
    /// `?`
    Question,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `.`
    Dot,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `==`
    Equal,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// A byte with no valid token shape, or an unconvertible literal.
    Failure,
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Diagnostic name of the kind, as it appears in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ident => "IDENT",
            Self::KwIn => "KEYWORD_IN",
            Self::KwOut => "KEYWORD_OUT",
            Self::KwNode => "KEYWORD_NODE",
            Self::KwQuery => "KEYWORD_QUERY",
            Self::KwEvent => "KEYWORD_EVENT",
            Self::KwTrue => "KEYWORD_TRUE",
            Self::KwFalse => "KEYWORD_FALSE",
            Self::TypeFloat => "TYPE_FLOAT",
            Self::TypeBool => "TYPE_BOOL",
            Self::Integer => "INTEGER",
            Self::Real => "REAL",
            Self::Assign => "ASSIGN",
            Self::Question => "QUESTION",
            Self::Comma => "COMMA",
            Self::Semicolon => "SEMICOLON",
            Self::Colon => "COLON",
            Self::Dot => "DOT",
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
            Self::LeftBracket => "LEFT_SQUARE_BRACKET",
            Self::RightBracket => "RIGHT_SQUARE_BRACKET",
            Self::LeftBrace => "LEFT_CURLY_BRACKET",
            Self::RightBrace => "RIGHT_CURLY_BRACKET",
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::Equal => "EQUAL",
            Self::Less => "LESS",
            Self::Greater => "GREATER",
            Self::LessEqual => "LESS_EQUAL",
            Self::GreaterEqual => "GREATER_EQUAL",
            Self::Failure => "FAILURE",
            Self::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Keyword spellings, matched case-sensitively against scanned identifiers
/// before interning.
pub(crate) const KEYWORDS: &[(&str, TokenKind)] = &[
    ("in", TokenKind::KwIn),
    ("out", TokenKind::KwOut),
    ("event", TokenKind::KwEvent),
    ("node", TokenKind::KwNode),
    ("query", TokenKind::KwQuery),
    ("float", TokenKind::TypeFloat),
    ("bool", TokenKind::TypeBool),
    ("true", TokenKind::KwTrue),
    ("false", TokenKind::KwFalse),
];

/// Single-character tokens returned directly from the scan loop.
pub(crate) const SINGLE_TOKENS: &[(u8, TokenKind)] = &[
    (b';', TokenKind::Semicolon),
    (b':', TokenKind::Colon),
    (b'.', TokenKind::Dot),
    (b'?', TokenKind::Question),
    (b',', TokenKind::Comma),
    (b'(', TokenKind::LeftParen),
    (b')', TokenKind::RightParen),
    (b'{', TokenKind::LeftBrace),
    (b'}', TokenKind::RightBrace),
    (b'[', TokenKind::LeftBracket),
    (b']', TokenKind::RightBracket),
    (b'+', TokenKind::Add),
    (b'-', TokenKind::Sub),
    (b'*', TokenKind::Mul),
    (b'/', TokenKind::Div),
];

/// Payload of a token, selected by its kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenValue {
    /// No payload (keywords, punctuation, operators, failure, end of input).
    None,
    /// Handle of an interned identifier in the lexer's symbol table.
    Symbol(Handle),
    /// Value of an integer literal.
    Integer(i32),
    /// Value of a real literal.
    Real(f32),
}

/// A scanned token: a kind plus its payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    /// The token's classification.
    pub kind: TokenKind,
    /// The token's payload; `TokenValue::None` unless the kind carries one.
    pub value: TokenValue,
}

impl Token {
    /// A payload-free token of the given kind.
    pub const fn bare(kind: TokenKind) -> Self {
        Self {
            kind,
            value: TokenValue::None,
        }
    }

    /// The symbol handle, if this is an identifier token.
    pub fn symbol(&self) -> Option<Handle> {
        match self.value {
            TokenValue::Symbol(h) => Some(h),
            _ => None,
        }
    }

    /// The integer payload, if this is an integer literal.
    pub fn int_value(&self) -> Option<i32> {
        match self.value {
            TokenValue::Integer(v) => Some(v),
            _ => None,
        }
    }

    /// The real payload, if this is a real literal.
    pub fn real_value(&self) -> Option<f32> {
        match self.value {
            TokenValue::Real(v) => Some(v),
            _ => None,
        }
    }
}
