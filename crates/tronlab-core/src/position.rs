//! Line/column positions used by occurrences and diagnostics.
//!
//! Notes:
//! - Lines and columns are **0-based**; `Occurrence::line`/`Occurrence::column`
//!   are the only 1-based values and exist for display.
//! - Columns count characters (Unicode scalar values), not bytes. Byte offsets
//!   are kept separately where slicing is needed.

use core::fmt;
use serde::{Deserialize, Serialize};

/// A line/column coordinate (character-based column).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    #[inline]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 1-based display, the way editors show it
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// A half-open range `[start, end)` of positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Span covering columns `[start_col, end_col)` of a single line.
    #[inline]
    pub const fn on_line(line: usize, start_col: usize, end_col: usize) -> Self {
        Self {
            start: Position::new(line, start_col),
            end: Position::new(line, end_col),
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Character column of byte offset `byte` within `line`.
///
/// `byte` must lie on a char boundary; the scanners only produce offsets of
/// ASCII delimiters or regex match bounds, which always do.
#[inline]
pub fn char_column(line: &str, byte: usize) -> usize {
    line.get(..byte)
        .map(|prefix| prefix.chars().count())
        .unwrap_or_else(|| line.chars().count())
}
