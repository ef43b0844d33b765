//! The fixed table of delimiter pairs that must nest in code.
//!
//! Only parentheses and square brackets are tracked. The table is a
//! constant, so concurrent scans share it freely.

use crate::char_codes::*;

/// Opening → closing delimiter pairs.
pub const DELIMITER_PAIRS: &[(char, char)] = &[
    (OPEN_PAREN, CLOSE_PAREN),
    (OPEN_BRACKET, CLOSE_BRACKET),
];

/// The closing delimiter expected for an opening delimiter.
#[inline]
pub fn closing_for(open: char) -> Option<char> {
    DELIMITER_PAIRS
        .iter()
        .find(|&&(o, _)| o == open)
        .map(|&(_, c)| c)
}

/// The opening delimiter a closing delimiter pairs with.
#[inline]
pub fn opening_for(close: char) -> Option<char> {
    DELIMITER_PAIRS
        .iter()
        .find(|&&(_, c)| c == close)
        .map(|&(o, _)| o)
}

#[inline]
pub fn is_open_delimiter(ch: char) -> bool {
    closing_for(ch).is_some()
}

#[inline]
pub fn is_close_delimiter(ch: char) -> bool {
    opening_for(ch).is_some()
}
