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

//! Source position tracking for diagnostics.
//!
//! Positions are 0-based (row, column) pairs. They are used only in error
//! messages; the document model carries no position information.

use std::fmt;

/// A position in source text, 0-based.
///
/// The scanner advances positions one consumed character at a time: a
/// newline moves to the next row and resets the column, a tab advances the
/// column by four, any other character advances it by one.
///
/// # Examples
///
/// ```
/// use fdl_core::lex::Position;
///
/// let mut pos = Position::default();
/// pos.advance('a');
/// pos.advance('\t');
/// assert_eq!((pos.row, pos.col), (0, 5));
/// pos.advance('\n');
/// assert_eq!((pos.row, pos.col), (1, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Row (line) number, 0-based.
    pub row: usize,
    /// Column number, 0-based.
    pub col: usize,
}

impl Position {
    /// Creates a position at the given row and column.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Updates the position for one consumed character.
    #[inline]
    pub fn advance(&mut self, c: char) {
        match c {
            '\n' => {
                self.row += 1;
                self.col = 0;
            }
            '\t' => self.col += 4,
            _ => self.col += 1,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(Ln: {}, Col: {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_origin() {
        let pos = Position::default();
        assert_eq!(pos, Position::new(0, 0));
    }

    #[test]
    fn test_advance_plain_character() {
        let mut pos = Position::new(2, 7);
        pos.advance('x');
        assert_eq!(pos, Position::new(2, 8));
    }

    #[test]
    fn test_advance_newline_resets_column() {
        let mut pos = Position::new(0, 13);
        pos.advance('\n');
        assert_eq!(pos, Position::new(1, 0));
    }

    #[test]
    fn test_advance_tab_is_four_columns() {
        let mut pos = Position::default();
        pos.advance('\t');
        assert_eq!(pos, Position::new(0, 4));
    }

    #[test]
    fn test_carriage_return_counts_as_one_column() {
        let mut pos = Position::default();
        pos.advance('\r');
        assert_eq!(pos, Position::new(0, 1));
    }

    #[test]
    fn test_display_format() {
        assert_eq!(format!("{}", Position::new(3, 12)), "(Ln: 3, Col: 12)");
    }
}
