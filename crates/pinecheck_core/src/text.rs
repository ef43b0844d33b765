//! Line and column positions for source location tracking.
//!
//! Diagnostics are reported against human-facing coordinates, so the
//! scanner tracks line and column directly instead of byte offsets.

use std::fmt;

/// A line/column position in source text.
///
/// Lines start at 1. The column starts at 0 on each line and is advanced
/// before a character is examined, so the first character of a line sits
/// at column 1.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct LineCol {
    /// The 1-based line number.
    pub line: u32,
    /// The column of the most recently consumed character on this line.
    pub column: u32,
}

impl LineCol {
    /// Create a new position.
    #[inline]
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// The position before any character has been consumed.
    #[inline]
    pub fn start() -> Self {
        Self { line: 1, column: 0 }
    }

    /// Move one character to the right.
    #[inline]
    pub fn advance_column(&mut self) {
        self.column += 1;
    }

    /// Move to the beginning of the next line.
    #[inline]
    pub fn advance_line(&mut self) {
        self.line += 1;
        self.column = 0;
    }

    /// The position one column to the right, without moving.
    #[inline]
    pub fn next_column(&self) -> Self {
        Self {
            line: self.line,
            column: self.column + 1,
        }
    }

    /// This position with the column clamped to at least 1.
    ///
    /// End-of-file diagnostics on an empty line still need a printable column.
    #[inline]
    pub fn clamped_column(&self) -> Self {
        Self {
            line: self.line,
            column: self.column.max(1),
        }
    }
}

impl Default for LineCol {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Debug for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position() {
        let pos = LineCol::start();
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 0);
        assert_eq!(pos, LineCol::default());
    }

    #[test]
    fn test_advance() {
        let mut pos = LineCol::start();
        pos.advance_column();
        pos.advance_column();
        assert_eq!(pos, LineCol::new(1, 2));
        pos.advance_line();
        assert_eq!(pos, LineCol::new(2, 0));
    }

    #[test]
    fn test_next_column_does_not_move() {
        let pos = LineCol::new(3, 4);
        assert_eq!(pos.next_column(), LineCol::new(3, 5));
        assert_eq!(pos, LineCol::new(3, 4));
    }

    #[test]
    fn test_clamped_column() {
        assert_eq!(LineCol::new(2, 0).clamped_column(), LineCol::new(2, 1));
        assert_eq!(LineCol::new(2, 7).clamped_column(), LineCol::new(2, 7));
    }

    #[test]
    fn test_display() {
        assert_eq!(LineCol::new(12, 3).to_string(), "12:3");
    }

    #[test]
    fn test_ordering() {
        assert!(LineCol::new(1, 9) < LineCol::new(2, 1));
        assert!(LineCol::new(2, 1) < LineCol::new(2, 2));
    }
}
