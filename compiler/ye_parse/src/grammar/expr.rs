//! Expression parsing.

use ye_ir::{BinaryOp, Expr, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// `operand ( arith operand )?`
    ///
    /// Only one operator is taken; `is` is left for the `if` rule.
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        let left = self.parse_operand()?;

        let op = self
            .cursor
            .current()
            .filter(|token| token.kind == TokenKind::Operator)
            .and_then(|token| BinaryOp::from_symbol(&token.text))
            .filter(|op| op.is_arithmetic());
        let Some(op) = op else {
            return Ok(left);
        };

        self.cursor.advance();
        let right = self.parse_operand()?;
        Ok(Expr::binary(op, left, right))
    }

    /// `NUMBER | IDENT`
    fn parse_operand(&mut self) -> Result<Expr, ParseError> {
        match self.cursor.current() {
            Some(token) if token.kind == TokenKind::Number => {
                let value = token
                    .text
                    .parse::<i64>()
                    .map_err(|_| ParseError::literal_out_of_range(token))?;
                self.cursor.advance();
                Ok(Expr::Literal(value))
            }
            Some(token) if token.kind == TokenKind::Identifier => {
                self.cursor.advance();
                Ok(Expr::ident(token.text.as_str()))
            }
            _ => Err(self.cursor.error_here("number or identifier")),
        }
    }
}
