//! The lexical scanner.
//!
//! Walks the source once, left to right, with one character of lookahead
//! for the two-character tokens `//`, `/*` and `*/`. The scanner never
//! fails: every problem becomes a diagnostic and scanning resumes in the
//! nearest sensible mode.

use crate::char_codes::*;
use crate::delimiters::{is_close_delimiter, is_open_delimiter};
use crate::mode::{BracketFrame, Mode};
use pinecheck_core::text::LineCol;
use pinecheck_diagnostics::{messages, Diagnostic, DiagnosticCollection, DiagnosticMessage};

/// Scans one file's text for lexical breakage.
pub struct Scanner {
    /// The file label used in diagnostics.
    file: String,
    /// The source text being scanned.
    text: Vec<char>,
    /// Current index into `text`.
    pos: usize,
    /// Line and column of the most recently consumed character.
    position: LineCol,
    /// The active lexical mode.
    mode: Mode,
    /// Brackets opened in code and not yet closed.
    stack: Vec<BracketFrame>,
    /// Accumulated diagnostics.
    diagnostics: DiagnosticCollection,
}

impl Scanner {
    /// Create a new scanner for the given file label and source text.
    pub fn new(file: impl Into<String>, text: &str) -> Self {
        Self {
            file: file.into(),
            text: text.chars().collect(),
            pos: 0,
            position: LineCol::start(),
            mode: Mode::Code,
            stack: Vec::new(),
            diagnostics: DiagnosticCollection::new(),
        }
    }

    /// Scan the whole text and return the diagnostics in emission order.
    pub fn scan(mut self) -> DiagnosticCollection {
        while !self.is_eof() {
            let ch = self.text[self.pos];
            if ch == LINE_FEED {
                self.scan_line_feed();
                continue;
            }

            self.position.advance_column();
            match self.mode {
                Mode::LineComment => self.pos += 1,
                Mode::BlockComment => self.scan_block_comment(ch),
                Mode::SingleQuoteString | Mode::DoubleQuoteString => self.scan_string(ch),
                Mode::Code => self.scan_code(ch),
            }
        }

        self.finish();
        tracing::debug!(
            file = %self.file,
            lines = self.position.line,
            diagnostics = self.diagnostics.len(),
            "scanned file"
        );
        self.diagnostics
    }

    #[inline]
    fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.text.get(self.pos + 1).copied()
    }

    /// Consume the current character and the lookahead as one unit.
    #[inline]
    fn consume_pair(&mut self) {
        self.pos += 2;
        self.position.advance_column();
    }

    fn report(&mut self, position: LineCol, message: &DiagnosticMessage, args: &[&str]) {
        self.diagnostics.add(Diagnostic::with_location(
            self.file.as_str(),
            position,
            message,
            args,
        ));
    }

    /// A newline ends strings (with a diagnostic) and line comments.
    /// Block comments and open brackets carry over to the next line.
    fn scan_line_feed(&mut self) {
        if self.mode.is_string() {
            self.report(
                self.position.next_column(),
                &messages::UNTERMINATED_STRING_LITERAL,
                &[],
            );
            self.mode = Mode::Code;
        } else if self.mode == Mode::LineComment {
            self.mode = Mode::Code;
        }
        self.position.advance_line();
        self.pos += 1;
    }

    fn scan_block_comment(&mut self, ch: char) {
        if ch == ASTERISK && self.peek() == Some(SLASH) {
            self.mode = Mode::Code;
            self.consume_pair();
        } else {
            self.pos += 1;
        }
    }

    fn scan_string(&mut self, ch: char) {
        if ch == BACKSLASH && self.peek().is_some() {
            // The escaped character is taken verbatim, whatever it is.
            self.consume_pair();
            return;
        }
        if Some(ch) == self.mode.quote() {
            self.mode = Mode::Code;
        }
        self.pos += 1;
    }

    fn scan_code(&mut self, ch: char) {
        if ch == SLASH {
            match self.peek() {
                Some(SLASH) => {
                    self.mode = Mode::LineComment;
                    self.consume_pair();
                    return;
                }
                Some(ASTERISK) => {
                    self.mode = Mode::BlockComment;
                    self.consume_pair();
                    return;
                }
                _ => {}
            }
        }

        if let Some(mode) = Mode::for_quote(ch) {
            self.mode = mode;
        } else if is_open_delimiter(ch) {
            self.stack.push(BracketFrame::new(ch, self.position));
        } else if is_close_delimiter(ch) {
            self.scan_close_delimiter(ch);
        }
        self.pos += 1;
    }

    /// Resolve a closing delimiter against the top of the stack. A mismatch
    /// still consumes the frame; deeper frames are never searched.
    fn scan_close_delimiter(&mut self, ch: char) {
        let seen = ch.to_string();
        let Some(frame) = self.stack.pop() else {
            self.report(self.position, &messages::UNMATCHED_CLOSING_0, &[&seen]);
            return;
        };

        let expected = frame.expected_close();
        if ch != expected {
            let expected = expected.to_string();
            let open = frame.open.to_string();
            let opened_at = frame.position.to_string();
            self.report(
                self.position,
                &messages::MISMATCHED_CLOSING_0_EXPECTED_1_FOR_2_OPENED_AT_3,
                &[&seen, &expected, &open, &opened_at],
            );
        }
    }

    /// End-of-file checks. String and comment problems come first, then
    /// unclosed brackets from the most recently opened down.
    fn finish(&mut self) {
        let eof = self.position.clamped_column();
        if self.mode.is_string() {
            self.report(eof, &messages::UNTERMINATED_STRING_LITERAL_AT_EOF, &[]);
        } else if self.mode == Mode::BlockComment {
            self.report(eof, &messages::UNTERMINATED_BLOCK_COMMENT_AT_EOF, &[]);
        }

        while let Some(frame) = self.stack.pop() {
            let open = frame.open.to_string();
            let expected = frame.expected_close().to_string();
            self.report(
                frame.position,
                &messages::UNCLOSED_0_EXPECTED_1,
                &[&open, &expected],
            );
        }
    }
}

/// Scan `text` as the contents of `file` and return its diagnostics.
pub fn check_text(text: &str, file: &str) -> DiagnosticCollection {
    Scanner::new(file, text).scan()
}
