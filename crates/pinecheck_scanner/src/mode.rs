//! Scanner state: the lexical mode and open bracket frames.

use crate::char_codes::{DOUBLE_QUOTE, SINGLE_QUOTE};
use crate::delimiters::closing_for;
use pinecheck_core::text::LineCol;

/// The lexical context of the scan cursor.
///
/// Exactly one mode is active at a time. Only `Code` can enter another
/// mode; every other mode returns to `Code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Code,
    LineComment,
    BlockComment,
    SingleQuoteString,
    DoubleQuoteString,
}

impl Mode {
    /// The string mode opened by a quote character, if any.
    pub fn for_quote(ch: char) -> Option<Mode> {
        match ch {
            SINGLE_QUOTE => Some(Mode::SingleQuoteString),
            DOUBLE_QUOTE => Some(Mode::DoubleQuoteString),
            _ => None,
        }
    }

    /// The quote that terminates a string mode.
    pub fn quote(self) -> Option<char> {
        match self {
            Mode::SingleQuoteString => Some(SINGLE_QUOTE),
            Mode::DoubleQuoteString => Some(DOUBLE_QUOTE),
            _ => None,
        }
    }

    pub fn is_string(self) -> bool {
        matches!(self, Mode::SingleQuoteString | Mode::DoubleQuoteString)
    }
}

/// One still-open bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketFrame {
    /// The opening delimiter.
    pub open: char,
    /// Where the opening delimiter was seen.
    pub position: LineCol,
}

impl BracketFrame {
    pub fn new(open: char, position: LineCol) -> Self {
        Self { open, position }
    }

    /// The closing delimiter that would close this frame.
    pub fn expected_close(&self) -> char {
        // Frames are only pushed for characters in the delimiter table.
        closing_for(self.open).unwrap_or(self.open)
    }
}
