//! Parse error types.
//!
//! Parsing stops at the first error. There is no recovery and no partial
//! program.

use std::fmt;

use ye_ir::{Span, Token, TokenKind};


/// What kind of problem stopped the parser.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ParseErrorKind {
    /// The current token (or end of input) does not fit the grammar.
    UnexpectedToken,
    /// A number token does not fit in a signed 64-bit integer.
    LiteralOutOfRange,
}

/// What the parser found where it expected something else.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Found {
    Token { kind: TokenKind, text: String },
    EndOfInput,
}

impl Found {
    pub fn token(token: &Token) -> Self {
        Found::Token {
            kind: token.kind,
            text: token.text.clone(),
        }
    }
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Token { kind, text } => write!(f, "{} `{text}`", kind.display_name()),
            Found::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// First grammar violation in a token list.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("expected {expected}, found {found}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Description of the acceptable input, e.g. "`;`" or "identifier".
    pub expected: String,
    pub found: Found,
    pub span: Span,
}

impl ParseError {
    #[cold]
    pub fn unexpected(expected: impl Into<String>, found: Found, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::UnexpectedToken,
            expected: expected.into(),
            found,
            span,
        }
    }

    #[cold]
    pub fn literal_out_of_range(token: &Token) -> Self {
        ParseError {
            kind: ParseErrorKind::LiteralOutOfRange,
            expected: "integer literal in range".to_string(),
            found: Found::token(token),
            span: token.span,
        }
    }

    #[inline]
    pub fn is_end_of_input(&self) -> bool {
        self.found == Found::EndOfInput
    }
}
