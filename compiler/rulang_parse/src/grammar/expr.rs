//! Value expressions.
//!
//! Arithmetic has a single precedence level: `1 + 2 * 3` is `(1 + 2) * 3`.
//! An expression that turns out to be a comparison or a combinator chain is
//! re-read from its first token as a boolean expression.

use rulang_ir::{ArithOp, Expr, Literal, TokenKind};
use rulang_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse the right-hand side of an assignment, an argument, an index or
    /// a loop count.
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_expression_inner())
    }

    fn parse_expression_inner(&mut self) -> Result<Expr, ParseError> {
        if self.check(&TokenKind::LParen) {
            return self.parse_boolean();
        }

        let start = self.cursor.position();
        let value = self.parse_arith()?;

        if self.at_boolean_operator() {
            tracing::trace!(start, "re-reading expression as boolean");
            self.cursor.seek(start);
            return self.parse_boolean();
        }

        Ok(value)
    }

    /// Comparator or combinator at the cursor.
    fn at_boolean_operator(&self) -> bool {
        self.current_comparator().is_some() || self.current_combinator().is_some()
    }

    /// `term (('+'|'-'|'*'|'/') term)*`, folded left.
    pub(crate) fn parse_arith(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_primary()?;

        if matches!(left, Expr::Literal(Literal::Str(_))) && self.check(&TokenKind::Plus) {
            left = self.parse_concat(left)?;
        }

        loop {
            let op = match self.current_kind() {
                TokenKind::Plus => ArithOp::Add,
                TokenKind::Minus => ArithOp::Sub,
                TokenKind::Star => ArithOp::Mul,
                TokenKind::Slash => ArithOp::Div,
                // `5 -3` lexes as `5` `-3`.
                TokenKind::Number(n) if n.is_sign_negative() => {
                    self.advance();
                    left = Expr::aggregate(left, ArithOp::Sub, Expr::number(-n));
                    continue;
                }
                _ => break,
            };
            self.advance();
            let right = self.parse_primary()?;
            left = Expr::aggregate(left, op, right);
        }

        Ok(left)
    }

    /// `'text' + part + part ...`, collected flat.
    fn parse_concat(&mut self, first: Expr) -> Result<Expr, ParseError> {
        let mut parts = vec![first];
        while self.check(&TokenKind::Plus) {
            self.advance();
            parts.push(self.parse_primary()?);
        }
        Ok(Expr::Concat(parts))
    }

    /// Literal, call, reference or object literal.
    pub(crate) fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let expr = match self.current_kind() {
            TokenKind::String(s) => {
                self.advance();
                Expr::string(s.as_str())
            }
            TokenKind::Number(n) => {
                self.advance();
                Expr::number(*n)
            }
            TokenKind::True => {
                self.advance();
                Expr::boolean(true)
            }
            TokenKind::False => {
                self.advance();
                Expr::boolean(false)
            }
            TokenKind::Ident(_) if self.peek_kind(1) == &TokenKind::LParen => {
                Expr::Call(self.parse_call()?)
            }
            TokenKind::Ident(_) => Expr::from(self.parse_reference()?),
            TokenKind::LBrace => Expr::Object(self.parse_object()?),
            _ => return Err(self.unexpected("value")),
        };
        Ok(expr)
    }
}
