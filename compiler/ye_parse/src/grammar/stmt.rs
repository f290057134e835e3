//! Statement parsing.

use tracing::trace;
use ye_ir::{BinaryOp, Expr, Keyword, Stmt, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// `statement*` up to the end of the token list.
    pub(crate) fn parse_statements_until_end(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut statements = Vec::new();
        while !self.cursor.is_at_end() {
            if let Some(stmt) = self.parse_statement()? {
                statements.push(stmt);
            }
        }
        Ok(statements)
    }

    /// One statement. A bare `;` is consumed and yields `None`.
    pub(crate) fn parse_statement(&mut self) -> Result<Option<Stmt>, ParseError> {
        if self.cursor.check_punct(';') {
            self.cursor.advance();
            trace!("empty statement");
            return Ok(None);
        }

        let stmt = if self.cursor.check_keyword(Keyword::Ye) {
            self.parse_declaration()?
        } else if self.cursor.check_keyword(Keyword::De) {
            self.parse_debug()?
        } else if self.cursor.check_keyword(Keyword::If) {
            self.parse_if()?
        } else {
            return Err(self.cursor.error_here("statement"));
        };
        Ok(Some(stmt))
    }

    /// `ye IDENT = expression ;`
    fn parse_declaration(&mut self) -> Result<Stmt, ParseError> {
        self.cursor.advance();
        let name = self.cursor.expect_kind(TokenKind::Identifier)?;
        self.cursor.expect(TokenKind::Operator, "=")?;
        let value = self.parse_expression()?;
        self.cursor.expect_punct(';')?;
        trace!(name = %name.text, "declaration");
        Ok(Stmt::declare(name.text.as_str(), value))
    }

    /// `de IDENT ;`
    fn parse_debug(&mut self) -> Result<Stmt, ParseError> {
        self.cursor.advance();
        let name = self.cursor.expect_kind(TokenKind::Identifier)?;
        self.cursor.expect_punct(';')?;
        trace!(name = %name.text, "debug");
        Ok(Stmt::debug(name.text.as_str()))
    }

    /// `if expression is expression { statement* }`
    fn parse_if(&mut self) -> Result<Stmt, ParseError> {
        self.cursor.advance();
        let left = self.parse_expression()?;
        self.cursor.expect(TokenKind::Operator, BinaryOp::Is.symbol())?;
        let right = self.parse_expression()?;
        let consequent = ye_stack::ensure_sufficient_stack(|| self.parse_block())?;
        Ok(Stmt::If {
            condition: Expr::binary(BinaryOp::Is, left, right),
            consequent,
        })
    }

    /// `{ statement* }`. The body loop stops at `}` without consuming it.
    fn parse_block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        self.cursor.expect_punct('{')?;
        let mut body = Vec::new();
        while !self.cursor.is_at_end() && !self.cursor.check_punct('}') {
            if let Some(stmt) = self.parse_statement()? {
                body.push(stmt);
            }
        }
        self.cursor.expect_punct('}')?;
        Ok(body)
    }
}
