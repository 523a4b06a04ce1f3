use crate::span::Span;
use thiserror::Error;

/// Error kinds for categorizing parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A block parser was asked to build a node from a window it does not
    /// match.
    NotMatched,
    /// A block parser matched a window but could not build a node from it.
    Inconsistent,
}

/// A block-level parse failure.
///
/// Failed probes and malformed inline syntax are never errors; this type
/// only reports a parser whose `parse` disagrees with its own `matches`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{parser}: {message} at bytes {}..{}", .span.start, .span.end)]
pub struct ParseError {
    /// Name of the block parser that failed.
    pub parser: &'static str,
    /// Human-readable error message
    pub message: String,
    /// Source location of the offending window.
    pub span: Span,
    pub kind: ParseErrorKind,
}

impl ParseError {
    /// A `parse` call on a window that `matches` rejects.
    pub fn not_matched(parser: &'static str, span: Span) -> Self {
        Self {
            parser,
            message: "not matched".to_string(),
            span,
            kind: ParseErrorKind::NotMatched,
        }
    }

    /// A matched window that did not produce a usable node.
    pub fn inconsistent(parser: &'static str, message: impl Into<String>, span: Span) -> Self {
        Self {
            parser,
            message: message.into(),
            span,
            kind: ParseErrorKind::Inconsistent,
        }
    }
}
