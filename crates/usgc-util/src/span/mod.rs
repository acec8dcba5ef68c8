//! Source positions and ranges.
//!
//! A [`SourcePos`] is a (row, column, byte-offset) triple; a [`SourceRange`]
//! pairs a file name with a begin/end [`SourcePos`]. Every token and every
//! syntax node carries a range so diagnostics can always point at exact
//! source text.

pub mod source_map;

pub use source_map::{SourceFile, SourceMap};

use std::fmt;
use std::sync::Arc;

/// A position within a single source file: 1-based row and column, plus the
/// 0-based byte offset from the start of the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SourcePos {
    pub row: u32,
    pub col: u32,
    pub bytes: usize,
}

impl SourcePos {
    /// The position at the very start of a file: row 1, column 1, offset 0.
    pub const START: SourcePos = SourcePos { row: 1, col: 1, bytes: 0 };

    pub fn new(row: u32, col: u32, bytes: usize) -> Self {
        SourcePos { row, col, bytes }
    }

    /// Advance past a single byte, updating row/column per the lexer's rule:
    /// `\n` increments the row and resets the column; every other byte just
    /// increments the column.
    pub fn advance(self, byte: u8) -> Self {
        if byte == b'\n' {
            SourcePos { row: self.row + 1, col: 1, bytes: self.bytes + 1 }
        } else {
            SourcePos { row: self.row, col: self.col + 1, bytes: self.bytes + 1 }
        }
    }
}

impl fmt::Display for SourcePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

/// A range `[begin, end]` within a named file, with `end >= begin`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceRange {
    pub file_name: Arc<str>,
    pub begin: SourcePos,
    pub end: SourcePos,
}

impl SourceRange {
    pub fn new(file_name: Arc<str>, begin: SourcePos, end: SourcePos) -> Self {
        debug_assert!(end.bytes >= begin.bytes, "SourceRange end must not precede begin");
        SourceRange { file_name, begin, end }
    }

    /// A zero-width range at a single position, used before a node's `end`
    /// has been determined.
    pub fn point(file_name: Arc<str>, pos: SourcePos) -> Self {
        SourceRange { file_name, begin: pos, end: pos }
    }

    pub fn is_empty(&self) -> bool {
        self.end.bytes <= self.begin.bytes
    }

    pub fn len(&self) -> usize {
        self.end.bytes.saturating_sub(self.begin.bytes)
    }

    /// True iff `self` lies entirely within `other` (the "every node's range
    /// lies within its parent's range" invariant).
    pub fn contains(&self, other: &SourceRange) -> bool {
        self.file_name == other.file_name
            && self.begin.bytes <= other.begin.bytes
            && other.end.bytes <= self.end.bytes
    }
}

impl fmt::Display for SourceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({} - {})", self.file_name, self.begin, self.end)
    }
}
