//! Recursive descent parser for rulang.
//!
//! Produces an owned [`Sequence`] tree. Arithmetic chains fold strictly left
//! to right; boolean expressions are rebuilt with precedence climbing so that
//! `and` binds tighter than `or`.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::ParseError;

use rulang_ir::{Sequence, Span, Token, TokenKind, TokenList};

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    /// Create a new parser.
    pub fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    // Cursor delegation.

    #[inline]
    fn current_kind(&self) -> &'a TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn peek_kind(&self, offset: usize) -> &'a TokenKind {
        self.cursor.peek_kind(offset)
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    fn check(&self, kind: &TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn advance(&mut self) -> &'a Token {
        self.cursor.advance()
    }

    #[inline]
    fn skip_newlines(&mut self) {
        self.cursor.skip_newlines();
    }

    #[inline]
    fn expect(&mut self, kind: &TokenKind) -> Result<&'a Token, ParseError> {
        self.cursor.expect(kind)
    }

    #[inline]
    fn expect_ident(&mut self) -> Result<&'a str, ParseError> {
        self.cursor.expect_ident()
    }

    /// Error for the current token not fitting `what`.
    #[cold]
    fn unexpected(&self, what: &str) -> ParseError {
        ParseError::expected(what, self.current_kind(), self.current_span())
    }

    /// Parse a whole program.
    pub fn parse_program(mut self) -> Result<Sequence, ParseError> {
        let mut stmts = Vec::new();

        loop {
            while matches!(
                self.current_kind(),
                TokenKind::Newline | TokenKind::Semicolon
            ) {
                self.advance();
            }
            if self.is_at_end() {
                break;
            }

            stmts.push(self.parse_statement()?);
            self.expect_statement_end()?;
        }

        Ok(Sequence::new(stmts))
    }

    /// After a statement only a separator or end of input may follow.
    fn expect_statement_end(&self) -> Result<(), ParseError> {
        match self.current_kind() {
            kind if kind.is_statement_end() => Ok(()),
            TokenKind::RParen => Err(ParseError::mismatched_parens(self.current_span())),
            _ => Err(self.unexpected("end of statement")),
        }
    }
}

/// Parse tokens into a program.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: &TokenList) -> Result<Sequence, ParseError> {
    let program = Parser::new(tokens).parse_program()?;
    tracing::debug!(statements = program.len(), "parsed program");
    Ok(program)
}

#[cfg(test)]
mod tests;
