//! Parse errors.

use std::fmt;

use sx_lexer::Span;

/// What went wrong while reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input ended while a `(` was still open.
    ParseIncomplete,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParseIncomplete => write!(f, "unclosed `(`: input ended inside an expression"),
        }
    }
}

/// A parse failure, located at the token that caused it.
///
/// For `ParseIncomplete` the span is the opening `(`, since the end of
/// input has no token of its own.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at {span}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    #[cold]
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }
}
