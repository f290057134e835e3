//! The statement and expression walker.

use tracing::{debug, instrument, trace};
use ye_ir::{Expr, Program, Stmt};

use crate::errors::unbound_identifier;
use crate::{evaluate_binary, Environment, EvalError, Outcome, SharedPrintHandler, Value};

#[cfg(test)]
mod tests;

/// Owns the environment for one run and the handler `de` writes to.
pub struct Interpreter {
    env: Environment,
    print: SharedPrintHandler,
}

impl Interpreter {
    pub fn new(print: SharedPrintHandler) -> Self {
        Interpreter::with_environment(Environment::new(), print)
    }

    /// Start from pre-seeded bindings.
    pub(crate) fn with_environment(env: Environment, print: SharedPrintHandler) -> Self {
        Interpreter { env, print }
    }

    #[inline]
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn into_environment(self) -> Environment {
        self.env
    }

    /// Evaluate every top-level statement in order.
    ///
    /// Stops at the first error. Bindings made before the error remain in
    /// the environment.
    #[instrument(level = "debug", skip_all, fields(statements = program.statements.len()))]
    pub fn eval_program(&mut self, program: &Program) -> Result<Vec<Outcome>, EvalError> {
        self.eval_block(&program.statements)
    }

    fn eval_block(&mut self, statements: &[Stmt]) -> Result<Vec<Outcome>, EvalError> {
        statements.iter().map(|stmt| self.eval_stmt(stmt)).collect()
    }

    pub fn eval_stmt(&mut self, stmt: &Stmt) -> Result<Outcome, EvalError> {
        match stmt {
            Stmt::VariableDeclaration { name, value } => {
                let value = self.eval_expr(value)?;
                debug!(name = %name, %value, "declare");
                self.env.define(name.as_str(), value);
                Ok(Outcome::Value(value))
            }
            Stmt::Debug { name } => {
                // Unlike expression lookup, an unbound name is not an error here.
                let value = self.env.lookup(name).unwrap_or(Value::Absent);
                debug!(name = %name, %value, "debug");
                self.print.println(&format!("{name} = {value}"));
                Ok(Outcome::Value(value))
            }
            Stmt::If {
                condition,
                consequent,
            } => {
                let taken = self.eval_expr(condition)?.is_truthy();
                debug!(taken, body = consequent.len(), "if");
                if !taken {
                    return Ok(Outcome::Skipped);
                }
                let outcomes = ye_stack::ensure_sufficient_stack(|| self.eval_block(consequent))?;
                Ok(Outcome::Branch(outcomes))
            }
        }
    }

    pub fn eval_expr(&self, expr: &Expr) -> Result<Value, EvalError> {
        match expr {
            Expr::Literal(n) => Ok(Value::Int(*n)),
            Expr::Identifier(name) => self
                .env
                .lookup(name)
                .ok_or_else(|| unbound_identifier(name)),
            Expr::Binary { op, left, right } => {
                let (left, right) = ye_stack::ensure_sufficient_stack(|| {
                    Ok::<_, EvalError>((self.eval_expr(left)?, self.eval_expr(right)?))
                })?;
                trace!(%op, %left, %right, "binary");
                evaluate_binary(*op, left, right)
            }
        }
    }
}
