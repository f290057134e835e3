//! Shared vocabulary for the ye pipeline.
//!
//! ```text
//! source ──► ye_lexer::lex ──► TokenList
//!                                 │
//!                                 ▼
//!                        ye_parse::parse ──► Program
//!                                               │
//!                                               ▼
//!                                     ye_eval::Interpreter ──► Vec<Outcome>
//! ```
//!
//! Every stage consumes the complete output of the previous one; nothing
//! here holds process-wide state.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod span;
pub mod token;

pub use ast::{BinaryOp, Expr, Program, Stmt};
pub use span::{Span, SpanError};
pub use token::{Keyword, Token, TokenKind, TokenList};
