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

//! Lexical analysis for FDL source text.
//!
//! # Module Structure
//!
//! - [`pos`] - 0-based source positions for diagnostics
//! - [`tokens`] - token kinds, payloads, and the keyword table
//! - [`symtab`] - identifier interning over a private arena
//!
//! The [`Lexer`] ties these together: it walks the source buffer one
//! character at a time, tracks the cursor position, interns identifiers,
//! and exposes a one-token lookahead.
//!
//! # Examples
//!
//! ```
//! use fdl_core::lex::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("node SoundNode { }");
//! assert_eq!(lexer.peek().kind, TokenKind::KwNode);
//! assert_eq!(lexer.next_token().kind, TokenKind::KwNode);
//!
//! let name = lexer.next_token();
//! assert_eq!(name.kind, TokenKind::Ident);
//! let handle = name.symbol().unwrap();
//! assert_eq!(lexer.resolve(handle), "SoundNode");
//! ```

pub mod pos;
pub mod symtab;
pub mod tokens;

pub use pos::Position;
pub use symtab::SymbolTable;
pub use tokens::{Token, TokenKind, TokenValue};

use crate::arena::Handle;
use tokens::{KEYWORDS, SINGLE_TOKENS};

/// The FDL tokenizer.
///
/// Single-owner, single-use: a lexer is scoped to one parse of one source
/// buffer. Its symbol table exists only to deduplicate identifier text
/// during scanning; the parser copies resolved text into the document's own
/// arena, so nothing in the finished document refers back to the lexer.
#[derive(Debug)]
pub struct Lexer<'a> {
    src: &'a [u8],
    cursor: usize,
    pos: Position,
    peeked: Option<Token>,
    symbols: SymbolTable,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `source` with the cursor at the origin.
    pub fn new(source: &'a str) -> Self {
        Self {
            src: source.as_bytes(),
            cursor: 0,
            pos: Position::default(),
            peeked: None,
            symbols: SymbolTable::new(),
        }
    }

    /// Returns the next token without consuming it.
    ///
    /// Idempotent: repeated peeks return the same token and do not advance
    /// the cursor; the cached token is handed out by the next
    /// [`Lexer::next_token`] call.
    pub fn peek(&mut self) -> Token {
        match self.peeked {
            Some(token) => token,
            None => {
                let token = self.scan();
                self.peeked = Some(token);
                token
            }
        }
    }

    /// Consumes and returns the next token.
    pub fn next_token(&mut self) -> Token {
        match self.peeked.take() {
            Some(token) => token,
            None => self.scan(),
        }
    }

    /// Current cursor position, for diagnostics attached to the token just
    /// produced. This is the position *after* the characters consumed while
    /// scanning it, not the token's start column.
    pub fn position(&self) -> Position {
        self.pos
    }

    /// Resolves an identifier handle issued by this lexer's symbol table.
    pub fn resolve(&self, handle: Handle) -> &str {
        self.symbols.resolve(handle)
    }

    /// The interning table accumulated while scanning.
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Scans one fresh token from the stream.
    fn scan(&mut self) -> Token {
        let first = loop {
            match self.get_byte() {
                None => return Token::bare(TokenKind::Eof),
                Some(b' ' | b'\t' | b'\n' | b'\r') => continue,
                Some(c) => break c,
            }
        };

        for &(byte, kind) in SINGLE_TOKENS {
            if byte == first {
                return Token::bare(kind);
            }
        }

        match first {
            b'=' => self.two_char_token(TokenKind::Equal, TokenKind::Assign),
            b'<' => self.two_char_token(TokenKind::LessEqual, TokenKind::Less),
            b'>' => self.two_char_token(TokenKind::GreaterEqual, TokenKind::Greater),
            c if c.is_ascii_digit() => self.scan_number(c),
            c if c.is_ascii_alphabetic() => self.scan_ident(c),
            // No valid token shape. The byte is already consumed, so the
            // cursor always advances and the scan loop cannot get stuck.
            _ => Token::bare(TokenKind::Failure),
        }
    }

    /// Handles `=` / `<` / `>`: a following `=` is consumed and the
    /// combined token returned, otherwise the single-character token is
    /// returned with the peeked byte left in the stream.
    fn two_char_token(&mut self, combined: TokenKind, single: TokenKind) -> Token {
        if self.peek_byte() == Some(b'=') {
            self.get_byte();
            Token::bare(combined)
        } else {
            Token::bare(single)
        }
    }

    /// Scans an integer literal, switching to fraction scanning when a `.`
    /// is encountered.
    fn scan_number(&mut self, first: u8) -> Token {
        let mut text = String::new();
        text.push(first as char);
        while let Some(c) = self.peek_byte() {
            if c.is_ascii_digit() {
                self.get_byte();
                text.push(c as char);
            } else if c == b'.' {
                self.get_byte();
                text.push('.');
                return self.scan_fraction(text);
            } else {
                break;
            }
        }
        match text.parse::<i32>() {
            Ok(value) => Token {
                kind: TokenKind::Integer,
                value: TokenValue::Integer(value),
            },
            Err(_) => Token::bare(TokenKind::Failure),
        }
    }

    /// Scans the fractional digits of a real literal. A trailing `f` suffix
    /// closes the literal and is discarded.
    fn scan_fraction(&mut self, mut text: String) -> Token {
        while let Some(c) = self.peek_byte() {
            if c.is_ascii_digit() {
                self.get_byte();
                text.push(c as char);
            } else if c == b'f' {
                self.get_byte();
                break;
            } else {
                break;
            }
        }
        match text.parse::<f32>() {
            Ok(value) => Token {
                kind: TokenKind::Real,
                value: TokenValue::Real(value),
            },
            Err(_) => Token::bare(TokenKind::Failure),
        }
    }

    /// Scans an identifier and matches it against the keyword table before
    /// interning.
    fn scan_ident(&mut self, first: u8) -> Token {
        let mut text = String::new();
        text.push(first as char);
        while let Some(c) = self.peek_byte() {
            if c.is_ascii_alphanumeric() || c == b'_' {
                self.get_byte();
                text.push(c as char);
            } else {
                break;
            }
        }
        for &(keyword, kind) in KEYWORDS {
            if text == keyword {
                return Token::bare(kind);
            }
        }
        let handle = self.symbols.intern(&text);
        Token {
            kind: TokenKind::Ident,
            value: TokenValue::Symbol(handle),
        }
    }

    /// Consumes one byte, updating the position.
    fn get_byte(&mut self) -> Option<u8> {
        let c = *self.src.get(self.cursor)?;
        self.cursor += 1;
        self.pos.advance(c as char);
        Some(c)
    }

    /// Looks at the next byte without consuming it.
    fn peek_byte(&self) -> Option<u8> {
        self.src.get(self.cursor).copied()
    }
}
