//! Position tracking for name uses
//!
//! Stores where an identifier occurs in its file, for logging and for hosts
//! that want to point back into source.

use std::fmt;

/// A span representing a range in source code (0-indexed)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// A position in source code (0-indexed)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Span of an identifier of `len` characters starting at `line:column`.
    ///
    /// The end column saturates at `u32::MAX`, so `end` never precedes `start`.
    pub fn identifier(line: u32, column: u32, len: u32) -> Self {
        Self {
            start: Position::new(line, column),
            end: Position::new(line, column.saturating_add(len)),
        }
    }

    /// Check if a position falls within this span
    pub fn contains(&self, position: Position) -> bool {
        self.start <= position && position <= self.end
    }
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// Displays 1-indexed `line:column`, the form editors and compilers print.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start)
    }
}
