//! Token cursor for navigating the token stream.
//!
//! The token list has no EOF token, so every accessor that looks at the
//! current position returns an `Option` and end of input is `None`.

use tracing::trace;
use ye_ir::{Keyword, Span, Token, TokenKind, TokenList};

use crate::{Found, ParseError};


/// Cursor over a borrowed token list.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor { tokens, pos: 0 }
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    #[inline]
    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Zero-width span after the final token.
    pub fn end_span(&self) -> Span {
        let len = self.tokens.len();
        if len == 0 {
            Span::point(0)
        } else {
            Span::point(self.tokens[len - 1].span.end)
        }
    }

    /// Consume the current token.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.current()?;
        trace!(pos = self.pos, token = %token, "advance");
        self.pos += 1;
        Some(token)
    }

    #[inline]
    pub fn check_keyword(&self, keyword: Keyword) -> bool {
        self.current().is_some_and(|token| token.is_keyword(keyword))
    }

    #[inline]
    pub fn check_punct(&self, punct: char) -> bool {
        self.current().is_some_and(|token| token.is_punct(punct))
    }

    /// Consume a token with this kind and text, or fail.
    pub fn expect(&mut self, kind: TokenKind, text: &str) -> Result<&'a Token, ParseError> {
        match self.current() {
            Some(token) if token.is(kind, text) => {
                self.advance();
                Ok(token)
            }
            _ => Err(self.error_here(format!("`{text}`"))),
        }
    }

    #[inline]
    pub fn expect_punct(&mut self, punct: char) -> Result<&'a Token, ParseError> {
        self.expect(TokenKind::Punctuation, punct.encode_utf8(&mut [0; 4]))
    }

    /// Consume a token of this kind regardless of text, or fail.
    pub fn expect_kind(&mut self, kind: TokenKind) -> Result<&'a Token, ParseError> {
        match self.current() {
            Some(token) if token.kind == kind => {
                self.advance();
                Ok(token)
            }
            _ => Err(self.error_here(kind.display_name())),
        }
    }

    /// Error describing what sits at the current position.
    #[cold]
    pub fn error_here(&self, expected: impl Into<String>) -> ParseError {
        match self.current() {
            Some(token) => ParseError::unexpected(expected, Found::token(token), token.span),
            None => ParseError::unexpected(expected, Found::EndOfInput, self.end_span()),
        }
    }
}
