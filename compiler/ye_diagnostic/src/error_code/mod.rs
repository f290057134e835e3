//! Error codes for all pipeline diagnostics.
//!
//! The first digit names the stage that failed.

use std::fmt;

#[cfg(test)]
mod tests;

/// Error codes for all pipeline diagnostics.
///
/// Format: E#### where the first digit indicates the stage:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E6xxx: Runtime / eval errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unrecognized character in source
    E0001,
    /// Source too large for 32-bit byte offsets
    E0002,

    // Parser Errors (E1xxx)
    /// Unexpected token or end of input
    E1001,
    /// Integer literal out of range
    E1002,

    // Runtime Errors (E6xxx)
    /// Unbound identifier
    E6001,
    /// Unknown operator for operands
    E6002,
    /// Division by zero
    E6003,
    /// Integer overflow
    E6004,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 8] = [
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
        ErrorCode::E6004,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
        }
    }

    /// Pipeline stage that owns this code.
    pub fn stage(self) -> &'static str {
        match self {
            ErrorCode::E0001 | ErrorCode::E0002 => "lex",
            ErrorCode::E1001 | ErrorCode::E1002 => "parse",
            ErrorCode::E6001 | ErrorCode::E6002 | ErrorCode::E6003 | ErrorCode::E6004 => "eval",
        }
    }

    /// Parse a code from its `E####` spelling.
    pub fn from_str_code(s: &str) -> Option<ErrorCode> {
        ErrorCode::ALL.into_iter().find(|code| code.as_str() == s)
    }

    /// Long-form explanation shown by `ye explain`.
    pub fn explanation(self) -> &'static str {
        match self {
            ErrorCode::E0001 => {
                "A character in the source is not part of the language.\n\
                 \n\
                 Source may contain letters, digits, underscores, whitespace, the\n\
                 operators `= + - * /`, the word `is`, and `( ) ; { }`. Anything\n\
                 else, including `#` and string quotes, stops the lexer."
            }
            ErrorCode::E0002 => {
                "The source is larger than 4 GiB.\n\
                 \n\
                 Token positions are 32-bit byte offsets, so longer input cannot be\n\
                 lexed. Split the program."
            }
            ErrorCode::E1001 => {
                "The parser found a token, or the end of input, where the grammar\n\
                 needs something else.\n\
                 \n\
                 Statements are `ye NAME = EXPR;`, `de NAME;` and\n\
                 `if EXPR is EXPR { ... }`. An expression is one operand or two\n\
                 operands joined by one of `+ - * /`; `a + b + c` is rejected."
            }
            ErrorCode::E1002 => {
                "An integer literal does not fit in a signed 64-bit integer.\n\
                 \n\
                 The largest literal is 9223372036854775807."
            }
            ErrorCode::E6001 => {
                "An expression read a variable that was never declared.\n\
                 \n\
                 Declare it with `ye NAME = ...;` first. A `de NAME;` statement\n\
                 does not fail on unbound names; it prints `NAME = Undefined`."
            }
            ErrorCode::E6002 => {
                "An operator was applied to values it has no rule for.\n\
                 \n\
                 Arithmetic works on integers only. Source programs cannot reach\n\
                 this; it guards trees built by other tools."
            }
            ErrorCode::E6003 => {
                "The right-hand side of `/` evaluated to zero."
            }
            ErrorCode::E6004 => {
                "An arithmetic result does not fit in a signed 64-bit integer."
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
