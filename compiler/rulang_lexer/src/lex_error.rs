//! Lexer error type.
//!
//! Lexing is fail-fast: the first position no matcher accepts ends the scan
//! and is reported here with its span.

use rulang_ir::Span;
use thiserror::Error;

/// A lexer error.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum LexError {
    /// No token matcher accepts the character at this position.
    #[error("unexpected character `{ch}` at offset {}", .span.start)]
    UnexpectedChar { ch: char, span: Span },

    /// A quoted literal with no matching closing quote before end of input.
    #[error("unterminated string starting at offset {}", .span.start)]
    UnterminatedString { span: Span },

    /// A numeric literal with more than one decimal point.
    #[error("malformed number `{text}` at offset {}", .span.start)]
    MalformedNumber { text: String, span: Span },
}

impl LexError {
    #[cold]
    pub fn unexpected_char(ch: char, span: Span) -> Self {
        LexError::UnexpectedChar { ch, span }
    }

    #[cold]
    pub fn unterminated_string(span: Span) -> Self {
        LexError::UnterminatedString { span }
    }

    #[cold]
    pub fn malformed_number(text: impl Into<String>, span: Span) -> Self {
        LexError::MalformedNumber {
            text: text.into(),
            span,
        }
    }

    /// Where the error occurred.
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedChar { span, .. }
            | LexError::UnterminatedString { span }
            | LexError::MalformedNumber { span, .. } => *span,
        }
    }

    /// Source offset of the offending input.
    pub fn offset(&self) -> u32 {
        self.span().start
    }
}
