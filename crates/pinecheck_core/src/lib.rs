//! pinecheck_core: Core types for the pinecheck pre-checker.
//!
//! Provides the line/column position type used by the scanner and
//! by every diagnostic it produces.

pub mod text;

// Re-export commonly used types
pub use text::LineCol;
