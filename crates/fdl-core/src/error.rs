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

//! Error types for FDL parsing.
//!
//! A failed parse produces exactly one diagnostic; the parser stops at the
//! first grammar violation, so the first error recorded is the one the
//! caller sees. The `Display` output is the sole user-visible error
//! surface; there is no source excerpt, only the row/column position.

use crate::lex::{Position, TokenKind};
use thiserror::Error;

/// A diagnostic produced by a failed parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FdlError {
    /// A specific token was required by the grammar and a different one was
    /// found.
    #[error("EXPECTED {expected} at {at}, actual {actual}")]
    Expected {
        /// The token the grammar required.
        expected: TokenKind,
        /// The token actually scanned.
        actual: TokenKind,
        /// Scanner position after the offending token.
        at: Position,
    },
    /// The current token starts no valid production in the current context.
    #[error("UNEXPECTED {token} at {at}")]
    Unexpected {
        /// The token no alternative accepts.
        token: TokenKind,
        /// Scanner position after the offending token.
        at: Position,
    },
}

impl FdlError {
    /// Builds an expectation-mismatch diagnostic.
    pub fn expected(expected: TokenKind, actual: TokenKind, at: Position) -> Self {
        Self::Expected {
            expected,
            actual,
            at,
        }
    }

    /// Builds a no-alternative diagnostic.
    pub fn unexpected(token: TokenKind, at: Position) -> Self {
        Self::Unexpected { token, at }
    }

    /// Position the diagnostic refers to.
    pub fn position(&self) -> Position {
        match self {
            Self::Expected { at, .. } | Self::Unexpected { at, .. } => *at,
        }
    }
}

/// Result type for FDL operations.
pub type FdlResult<T> = Result<T, FdlError>;
