//! Parse error type.
//!
//! Parsing is fail-fast: the first violation aborts with a single error and
//! no partial tree.

use rulang_ir::{Combinator, Span, TokenKind};
use thiserror::Error;

/// A parse error with the span of the offending token.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
    pub span: Span,
}

impl ParseError {
    #[cold]
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        ParseError {
            message: message.into(),
            span,
        }
    }

    /// Source offset of the offending token.
    #[inline]
    pub fn offset(&self) -> u32 {
        self.span.start
    }

    /// `expected {what}, found {token}`
    #[cold]
    pub fn expected(what: &str, found: &TokenKind, span: Span) -> Self {
        Self::new(format!("expected {what}, found {}", found.display_name()), span)
    }

    #[cold]
    pub fn mismatched_parens(span: Span) -> Self {
        Self::new("mismatched parentheses", span)
    }

    #[cold]
    pub fn missing_comma(found: &TokenKind, span: Span) -> Self {
        Self::new(
            format!(
                "expected `,` or `]` in array literal, found {} (missing comma?)",
                found.display_name()
            ),
            span,
        )
    }

    #[cold]
    pub fn missing_operand(combinator: Combinator, side: &str, span: Span) -> Self {
        Self::new(format!("`{combinator}` is missing its {side} operand"), span)
    }
}
