//! Pipeline problems and their rendering as diagnostics.
//!
//! Each stage has its own error type. `Problem` wraps whichever one stopped
//! the run and knows how to turn it into an [`ErrorCode`]-tagged
//! [`Diagnostic`].

use ye_diagnostic::{Diagnostic, ErrorCode};
use ye_eval::{EvalError, EvalErrorKind};
use ye_ir::Span;
use ye_lexer::LexError;
use ye_parse::{ParseError, ParseErrorKind};


/// The first failure in a run.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Problem {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("eval error: {0}")]
    Eval(#[from] EvalError),
}

impl Problem {
    /// Name of the stage that failed: `lex`, `parse` or `eval`.
    pub fn stage(&self) -> &'static str {
        self.code().stage()
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Problem::Lex(LexError::Unrecognized { .. }) => ErrorCode::E0001,
            Problem::Lex(LexError::SourceTooLarge { .. }) => ErrorCode::E0002,
            Problem::Parse(error) => match error.kind {
                ParseErrorKind::UnexpectedToken => ErrorCode::E1001,
                ParseErrorKind::LiteralOutOfRange => ErrorCode::E1002,
            },
            Problem::Eval(error) => match error.kind {
                EvalErrorKind::UnboundIdentifier(_) => ErrorCode::E6001,
                EvalErrorKind::UnknownOperator(_) => ErrorCode::E6002,
                EvalErrorKind::DivisionByZero => ErrorCode::E6003,
                EvalErrorKind::IntegerOverflow { .. } => ErrorCode::E6004,
            },
        }
    }

    /// Source location, when the failing stage tracks one.
    pub fn span(&self) -> Option<Span> {
        match self {
            Problem::Lex(error) => error.span(),
            Problem::Parse(error) => Some(error.span),
            Problem::Eval(_) => None,
        }
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            Problem::Lex(LexError::Unrecognized {
                character, span, ..
            }) => {
                diagnostic.with_label(span, format!("{character:?} is not part of the language"))
            }
            Problem::Lex(LexError::SourceTooLarge { .. }) => {
                diagnostic.with_note("source offsets are limited to 4 GiB")
            }
            Problem::Parse(error) => {
                let label = format!("expected {}", error.expected);
                let diagnostic = diagnostic.with_label(error.span, label);
                match error.kind {
                    ParseErrorKind::UnexpectedToken if error.is_end_of_input() => {
                        diagnostic.with_note("the source ended before this statement did")
                    }
                    ParseErrorKind::UnexpectedToken => diagnostic,
                    ParseErrorKind::LiteralOutOfRange => diagnostic
                        .with_note("integer literals must fit in a signed 64-bit integer"),
                }
            }
            Problem::Eval(error) => match error.kind {
                EvalErrorKind::UnboundIdentifier(name) => diagnostic
                    .with_note("`de` reports unbound names as Undefined, expressions do not")
                    .with_suggestion(format!("declare it first: `ye {name} = 0;`")),
                EvalErrorKind::UnknownOperator(_) => {
                    diagnostic.with_note("arithmetic operators only apply to integers")
                }
                EvalErrorKind::DivisionByZero => diagnostic,
                EvalErrorKind::IntegerOverflow { .. } => {
                    diagnostic.with_note("values are signed 64-bit integers")
                }
            },
        }
    }
}
