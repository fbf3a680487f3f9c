//! Statement parsing.

use rulang_ir::{
    AssignOp, Branch, EachSource, ForLoop, Identifier, IndexAccess, LoopKind, Operation, PathStep,
    PropertyAccess, Reference, Sequence, Stmt, TokenKind,
};
use rulang_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse one statement: branch, loop, assignment or bare call.
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        ensure_sufficient_stack(|| self.parse_statement_inner())
    }

    fn parse_statement_inner(&mut self) -> Result<Stmt, ParseError> {
        match self.current_kind() {
            TokenKind::If => self.parse_branch().map(Stmt::Branch),
            TokenKind::For => self.parse_for_loop().map(Stmt::ForLoop),
            TokenKind::Ident(_) if self.peek_kind(1) == &TokenKind::LParen => {
                self.parse_call().map(Stmt::Call)
            }
            TokenKind::Ident(_) => self.parse_operation().map(Stmt::Operation),
            _ => Err(self.unexpected("statement")),
        }
    }

    /// Whether the current token can begin a statement.
    fn at_statement_start(&self) -> bool {
        matches!(
            self.current_kind(),
            TokenKind::If | TokenKind::For | TokenKind::Ident(_)
        )
    }

    /// Body of a branch or loop: `stmt (';' stmt)*`.
    ///
    /// A `;` not followed by another statement ends the body.
    fn parse_body(&mut self) -> Result<Sequence, ParseError> {
        self.skip_newlines();
        let mut stmts = vec![self.parse_statement()?];

        while self.check(&TokenKind::Semicolon) {
            self.advance();
            if !self.at_statement_start() {
                break;
            }
            stmts.push(self.parse_statement()?);
        }

        Ok(Sequence::new(stmts))
    }

    /// `if cond then body (else body)?`
    fn parse_branch(&mut self) -> Result<Branch, ParseError> {
        self.expect(&TokenKind::If)?;
        let condition = self.parse_boolean()?;

        match self.current_kind() {
            TokenKind::Then => {
                self.advance();
            }
            TokenKind::RParen => return Err(ParseError::mismatched_parens(self.current_span())),
            _ => return Err(self.unexpected("`then`")),
        }
        let then_body = self.parse_body()?;

        // `else` may sit on the following line.
        let offset = self.cursor.offset_past_newlines();
        let else_body = if self.peek_kind(offset) == &TokenKind::Else {
            self.cursor.consume(offset + 1);
            Some(self.parse_body()?)
        } else {
            None
        };

        Ok(Branch {
            condition,
            then_body,
            else_body,
        })
    }

    /// `for (expr) body` or `for each source body`.
    fn parse_for_loop(&mut self) -> Result<ForLoop, ParseError> {
        self.expect(&TokenKind::For)?;

        let kind = match self.current_kind() {
            TokenKind::Each => {
                self.advance();
                let source = match self.current_kind() {
                    TokenKind::LBracket => EachSource::Literal(self.parse_array_literal()?),
                    TokenKind::Ident(_) => EachSource::Reference(self.parse_reference()?),
                    _ => return Err(self.unexpected("array literal or reference after `each`")),
                };
                LoopKind::EachOf(source)
            }
            TokenKind::LParen => {
                self.advance();
                let count = self.parse_expression()?;
                self.expect(&TokenKind::RParen)?;
                LoopKind::Counted(count)
            }
            _ => return Err(self.unexpected("`(` or `each` after `for`")),
        };

        let body = self.parse_body()?;
        Ok(ForLoop { kind, body })
    }

    /// `reference (= | += | -=) expr`
    fn parse_operation(&mut self) -> Result<Operation, ParseError> {
        let target = self.parse_reference()?;

        let op = match self.current_kind() {
            TokenKind::Eq => AssignOp::Assign,
            TokenKind::PlusEq => AssignOp::AddAssign,
            TokenKind::MinusEq => AssignOp::SubAssign,
            _ => return Err(self.unexpected("assignment operator")),
        };
        self.advance();

        let value = self.parse_expression()?;
        Ok(Operation { target, op, value })
    }

    /// `ident ('.' ident | '[' expr ']')*`
    pub(crate) fn parse_reference(&mut self) -> Result<Reference, ParseError> {
        let base = Identifier::new(self.expect_ident()?);
        let mut steps = Vec::new();

        loop {
            match self.current_kind() {
                TokenKind::Dot => {
                    self.advance();
                    steps.push(PathStep::Field(Identifier::new(self.expect_ident()?)));
                }
                TokenKind::LBracket => {
                    self.advance();
                    let index = self.parse_expression()?;
                    self.expect(&TokenKind::RBracket)?;
                    steps.push(PathStep::Index(IndexAccess {
                        index: Box::new(index),
                    }));
                }
                _ => break,
            }
        }

        if steps.is_empty() {
            Ok(Reference::Identifier(base))
        } else {
            Ok(Reference::Property(PropertyAccess { base, steps }))
        }
    }
}
