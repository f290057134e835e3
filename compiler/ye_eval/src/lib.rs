//! Tree-walking evaluator for ye.
//!
//! Walks a parsed [`Program`] depth first against one flat [`Environment`].
//! The only visible side effect is the debug line written through the
//! [`SharedPrintHandler`] for every executed `de` statement.

mod environment;
mod errors;
mod interpreter;
mod operators;
pub mod print_handler;
mod value;

pub use environment::Environment;
pub use errors::{EvalError, EvalErrorKind};
pub use interpreter::Interpreter;
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandlerImpl, SharedPrintHandler,
};
pub use value::{Outcome, Value};

use ye_ir::Program;

#[cfg(test)]
mod tests;

/// Evaluate `program` in a fresh environment.
pub fn evaluate(program: &Program, print: SharedPrintHandler) -> Result<Vec<Outcome>, EvalError> {
    Interpreter::new(print).eval_program(program)
}
