//! Recursive descent parser for ye.
//!
//! One method per grammar rule, one token of lookahead, and no error
//! recovery: the first violation is returned and nothing else is parsed.
//!
//! ```text
//! program    := statement*
//! statement  := ";" | declare | debug | if
//! declare    := "ye" IDENT "=" expression ";"
//! debug      := "de" IDENT ";"
//! if         := "if" expression "is" expression "{" statement* "}"
//! expression := operand ( ("+" | "-" | "*" | "/") operand )?
//! operand    := NUMBER | IDENT
//! ```
//!
//! Operators do not chain. `a + b + c` stops after `a + b`, and whatever
//! rule is waiting for the next token reports the second `+`.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{Found, ParseError, ParseErrorKind};

use tracing::{debug, instrument};
use ye_ir::{Program, TokenList};

#[cfg(test)]
mod tests;

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    /// Parse the whole token list as a program.
    pub fn parse_program(mut self) -> Result<Program, ParseError> {
        let statements = self.parse_statements_until_end()?;
        debug!(statements = statements.len(), "parsed program");
        Ok(Program::new(statements))
    }
}

/// Parse a token list into a [`Program`].
#[instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: &TokenList) -> Result<Program, ParseError> {
    Parser::new(tokens).parse_program()
}
