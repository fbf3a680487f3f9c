//! Delimited forms: array literals, object literals and call arguments.

use rulang_ir::{FunctionCall, Literal, ObjectNode, ObjectProperty, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// `[ (string|number) (, (string|number))* ]`, or `[]`.
    pub(crate) fn parse_array_literal(&mut self) -> Result<Vec<Literal>, ParseError> {
        self.expect(&TokenKind::LBracket)?;
        self.skip_newlines();

        let mut items = Vec::new();
        if self.check(&TokenKind::RBracket) {
            self.advance();
            return Ok(items);
        }

        loop {
            let item = match self.current_kind() {
                TokenKind::String(s) => Literal::Str(s.clone()),
                TokenKind::Number(n) => Literal::Number(*n),
                _ => return Err(self.unexpected("string or number in array literal")),
            };
            self.advance();
            items.push(item);
            self.skip_newlines();

            match self.current_kind() {
                TokenKind::Comma => {
                    self.advance();
                    self.skip_newlines();
                }
                TokenKind::RBracket => {
                    self.advance();
                    return Ok(items);
                }
                kind @ (TokenKind::String(_) | TokenKind::Number(_)) => {
                    return Err(ParseError::missing_comma(kind, self.current_span()));
                }
                _ => return Err(self.unexpected("`,` or `]` in array literal")),
            }
        }
    }

    /// `{ 'name': expr, ... }` with an optional trailing comma.
    pub(crate) fn parse_object(&mut self) -> Result<ObjectNode, ParseError> {
        self.expect(&TokenKind::LBrace)?;
        self.skip_newlines();

        let mut properties = Vec::new();
        while !self.check(&TokenKind::RBrace) {
            let TokenKind::String(name) = self.current_kind() else {
                return Err(self.unexpected("property name string"));
            };
            self.advance();
            self.expect(&TokenKind::Colon)?;
            let value = self.parse_expression()?;
            properties.push(ObjectProperty {
                name: name.clone(),
                value,
            });
            self.skip_newlines();

            match self.current_kind() {
                TokenKind::Comma => {
                    self.advance();
                    self.skip_newlines();
                }
                TokenKind::RBrace => {}
                _ => return Err(self.unexpected("`,` or `}` in object literal")),
            }
        }
        self.advance();

        Ok(ObjectNode { properties })
    }

    /// `name(arg, ...)` with an optional trailing comma.
    pub(crate) fn parse_call(&mut self) -> Result<FunctionCall, ParseError> {
        let name = self.expect_ident()?.to_string();
        self.expect(&TokenKind::LParen)?;
        self.skip_newlines();

        let mut args = Vec::new();
        while !self.check(&TokenKind::RParen) {
            args.push(self.parse_expression()?);
            self.skip_newlines();

            match self.current_kind() {
                TokenKind::Comma => {
                    self.advance();
                    self.skip_newlines();
                }
                TokenKind::RParen => {}
                _ => return Err(self.unexpected("`,` or `)` in call arguments")),
            }
        }
        self.advance();

        Ok(FunctionCall { name, args })
    }
}
