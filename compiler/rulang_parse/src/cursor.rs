//! Token cursor for navigating the token stream.
//!
//! The cursor is the only mutable state the parser carries. `position` and
//! `seek` let the expression parser rewind and re-read a chain as a boolean
//! expression once it sees a comparator.

use rulang_ir::{Span, Token, TokenKind, TokenList};

use crate::ParseError;

static EOF: Token = Token {
    kind: TokenKind::Eof,
    span: Span::DUMMY,
};

/// Cursor over an immutable, EOF-terminated token list.
///
/// Reads past the end yield an EOF token, so lookahead never fails.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// Token `offset` positions ahead of the current one.
    #[inline]
    pub fn peek(&self, offset: usize) -> &'a Token {
        self.tokens.get(self.pos + offset).unwrap_or(&EOF)
    }

    #[inline]
    pub fn peek_kind(&self, offset: usize) -> &'a TokenKind {
        &self.peek(offset).kind
    }

    #[inline]
    pub fn current(&self) -> &'a Token {
        self.peek(0)
    }

    #[inline]
    pub fn current_kind(&self) -> &'a TokenKind {
        &self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Consume the current token and return it.
    ///
    /// Never moves past EOF.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume `n` tokens.
    pub fn consume(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Current index into the token stream.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Rewind (or fast-forward) to a position obtained from `position`.
    pub fn seek(&mut self, pos: usize) {
        debug_assert!(
            pos <= self.tokens.len(),
            "cursor position {pos} out of bounds"
        );
        self.pos = pos.min(self.tokens.len());
    }

    /// Check if the current token has the same kind as `kind`.
    ///
    /// Payloads are ignored: any string matches `TokenKind::String(_)`.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(self.current_kind()) == std::mem::discriminant(kind)
    }

    /// Consume the current token if it matches `kind`, else error.
    #[inline]
    pub fn expect(&mut self, kind: &TokenKind) -> Result<&'a Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.make_expect_error(kind))
        }
    }

    #[cold]
    #[inline(never)]
    fn make_expect_error(&self, kind: &TokenKind) -> ParseError {
        let what = format!("`{}`", kind.display_name());
        ParseError::expected(&what, self.current_kind(), self.current_span())
    }

    /// Consume an identifier and return its text.
    pub fn expect_ident(&mut self) -> Result<&'a str, ParseError> {
        let token = self.current();
        if let TokenKind::Ident(name) = &token.kind {
            self.advance();
            Ok(name)
        } else {
            Err(ParseError::expected(
                "identifier",
                &token.kind,
                token.span,
            ))
        }
    }

    /// Skip all newline tokens.
    pub fn skip_newlines(&mut self) {
        while matches!(self.current_kind(), TokenKind::Newline) {
            self.advance();
        }
    }

    /// Offset of the first non-newline token at or after the current one.
    pub fn offset_past_newlines(&self) -> usize {
        let mut offset = 0;
        while matches!(self.peek_kind(offset), TokenKind::Newline) {
            offset += 1;
        }
        offset
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }
}
