//! Boolean expressions.
//!
//! Precedence climbing over the combinator table in
//! [`Combinator::precedence`]: `and` (2) binds tighter than `or` and `not`
//! (1), and equal levels associate left. `A not B` reads as `A and not B`.
//!
//! A parenthesized sub-expression is a single term and is never split by an
//! operator outside it.

use rulang_ir::{BooleanGroup, Combinator, CompareOp, Expr, TokenKind};
use rulang_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse a full boolean expression.
    pub(crate) fn parse_boolean(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_boolean_climb(1))
    }

    fn parse_boolean_climb(&mut self, min_precedence: u8) -> Result<Expr, ParseError> {
        let mut left = self.parse_boolean_term()?;

        while let Some(combinator) = self.current_combinator() {
            let precedence = combinator.precedence();
            if precedence < min_precedence {
                break;
            }
            let span = self.current_span();
            self.advance();

            if self.at_boolean_operand_end() {
                return Err(ParseError::missing_operand(combinator, "right", span));
            }
            let right = self.parse_boolean_climb(precedence + 1)?;
            left = Expr::Group(BooleanGroup::binary(left, combinator, right));
        }

        Ok(left)
    }

    /// `( boolExpr )`, `arith cmp arith`, or a bare value.
    fn parse_boolean_term(&mut self) -> Result<Expr, ParseError> {
        if self.check(&TokenKind::LParen) {
            self.advance();
            let inner = self.parse_boolean()?;
            if !self.check(&TokenKind::RParen) {
                return Err(self.unexpected("`)`"));
            }
            self.advance();

            let mut group = match inner {
                Expr::Group(group) => group,
                other => BooleanGroup::single(other),
            };
            group.parenthesized = true;
            return Ok(Expr::Group(group));
        }

        if let Some(combinator) = self.current_combinator() {
            return Err(ParseError::missing_operand(
                combinator,
                "left",
                self.current_span(),
            ));
        }

        let left = self.parse_arith()?;
        let Some(op) = self.current_comparator() else {
            return Ok(left);
        };
        self.advance();
        let right = self.parse_arith()?;
        Ok(Expr::comparison(left, op, right))
    }

    /// Nothing that could start an operand follows.
    fn at_boolean_operand_end(&self) -> bool {
        let kind = self.current_kind();
        kind.is_statement_end()
            || matches!(kind, TokenKind::Then | TokenKind::RParen | TokenKind::Comma)
            || self.current_combinator().is_some()
    }

    pub(crate) fn current_combinator(&self) -> Option<Combinator> {
        match self.current_kind() {
            TokenKind::And => Some(Combinator::And),
            TokenKind::Or => Some(Combinator::Or),
            TokenKind::Not => Some(Combinator::Not),
            _ => None,
        }
    }

    /// `is` is accepted as a spelling of `==`.
    pub(crate) fn current_comparator(&self) -> Option<CompareOp> {
        match self.current_kind() {
            TokenKind::EqEq | TokenKind::Is => Some(CompareOp::Eq),
            TokenKind::NotEq => Some(CompareOp::NotEq),
            TokenKind::Lt => Some(CompareOp::Lt),
            TokenKind::LtEq => Some(CompareOp::LtEq),
            TokenKind::Gt => Some(CompareOp::Gt),
            TokenKind::GtEq => Some(CompareOp::GtEq),
            TokenKind::In => Some(CompareOp::In),
            _ => None,
        }
    }
}
