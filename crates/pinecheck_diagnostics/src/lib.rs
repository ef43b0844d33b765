//! pinecheck_diagnostics: Diagnostic messages and error reporting infrastructure.
//!
//! Every issue the scanner finds is a [`Diagnostic`]: a file, a line/column
//! position and a resolved message. Diagnostics are collected in emission
//! order and rendered as `<file>:<line>:<col>: error: <message>`.

use pinecheck_core::text::LineCol;
use std::fmt;

/// The kind of lexical problem a diagnostic reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// A string literal reached a newline or the end of the file.
    UnterminatedString,
    /// A block comment reached the end of the file.
    UnterminatedBlockComment,
    /// A closing delimiter with nothing open.
    UnmatchedClosing,
    /// A closing delimiter that closes the wrong opener.
    MismatchedClosing,
    /// An opening delimiter never closed before the end of the file.
    UnclosedOpening,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::UnterminatedString => write!(f, "unterminated-string"),
            DiagnosticKind::UnterminatedBlockComment => write!(f, "unterminated-block-comment"),
            DiagnosticKind::UnmatchedClosing => write!(f, "unmatched-closing"),
            DiagnosticKind::MismatchedClosing => write!(f, "mismatched-closing"),
            DiagnosticKind::UnclosedOpening => write!(f, "unclosed-opening"),
        }
    }
}

/// A diagnostic message template with its kind.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    /// The kind of problem this message describes.
    pub kind: DiagnosticKind,
    /// The message template string. May contain `{0}`, `{1}`, etc. placeholders.
    pub message: &'static str,
}

/// A realized diagnostic with location information and resolved message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The file path as it was supplied or discovered.
    pub file: String,
    /// Where in the file the problem was found.
    pub position: LineCol,
    /// The resolved message.
    pub message_text: String,
    /// The kind of problem.
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    /// Create a new diagnostic with file and position info.
    pub fn with_location(
        file: impl Into<String>,
        position: LineCol,
        message: &DiagnosticMessage,
        args: &[&str],
    ) -> Self {
        Self {
            file: file.into(),
            position,
            message_text: format_message(message.message, args),
            kind: message.kind,
        }
    }

    /// The 1-based line of this diagnostic.
    pub fn line(&self) -> u32 {
        self.position.line
    }

    /// The column of this diagnostic.
    pub fn column(&self) -> u32 {
        self.position.column
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}: error: {}",
            self.file, self.position.line, self.position.column, self.message_text
        )
    }
}

/// Format a diagnostic message template by replacing `{0}`, `{1}`, etc. with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// An ordered collection of diagnostics.
///
/// Insertion order is the reporting order; the collection is never sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Every diagnostic this tool emits is an error.
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn extend(&mut self, other: DiagnosticCollection) {
        self.diagnostics.extend(other.diagnostics);
    }

    /// Count the diagnostics of one kind.
    pub fn count_of(&self, kind: DiagnosticKind) -> usize {
        self.diagnostics.iter().filter(|d| d.kind == kind).count()
    }
}

impl<'a> IntoIterator for &'a DiagnosticCollection {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($kind:ident, $msg:expr) => {
            DiagnosticMessage { kind: DiagnosticKind::$kind, message: $msg }
        };
    }

    // Strings and comments
    pub const UNTERMINATED_STRING_LITERAL: DiagnosticMessage = diag!(UnterminatedString, "Unterminated string literal");
    pub const UNTERMINATED_STRING_LITERAL_AT_EOF: DiagnosticMessage = diag!(UnterminatedString, "Unterminated string literal at EOF");
    pub const UNTERMINATED_BLOCK_COMMENT_AT_EOF: DiagnosticMessage = diag!(UnterminatedBlockComment, "Unterminated block comment at EOF");

    // Delimiters
    pub const UNMATCHED_CLOSING_0: DiagnosticMessage = diag!(UnmatchedClosing, "Unmatched closing '{0}'");
    pub const MISMATCHED_CLOSING_0_EXPECTED_1_FOR_2_OPENED_AT_3: DiagnosticMessage =
        diag!(MismatchedClosing, "Mismatched closing '{0}', expected '{1}' for '{2}' opened at {3}");
    pub const UNCLOSED_0_EXPECTED_1: DiagnosticMessage = diag!(UnclosedOpening, "Unclosed '{0}', expected '{1}'");
}
