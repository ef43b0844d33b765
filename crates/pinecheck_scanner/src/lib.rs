//! pinecheck_scanner: Lexical pre-checker for Pine Script source text.
//!
//! A single forward pass over the text that classifies every character
//! into a lexical mode (code, comment, string) and matches brackets,
//! producing positioned diagnostics for:
//! - Unterminated string literals (at a newline or at end of file)
//! - Unterminated block comments
//! - Unmatched, mismatched and unclosed `(` / `[` delimiters
//!
//! No tokens or syntax tree are built.

mod char_codes;
pub mod delimiters;
mod mode;
mod scanner;

pub use mode::{BracketFrame, Mode};
pub use scanner::{check_text, Scanner};
