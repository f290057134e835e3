//! Evaluation errors.
//!
//! Every runtime failure aborts the run; there is no way to continue
//! past one.

use ye_ir::BinaryOp;

/// Category of a runtime failure.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum EvalErrorKind {
    /// An expression read a name that was never declared.
    #[error("unbound identifier `{0}`")]
    UnboundIdentifier(String),
    /// No rule applies to this operator and these operand values.
    #[error("unknown operator `{0}` for these operands")]
    UnknownOperator(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in `{op}`")]
    IntegerOverflow { op: BinaryOp },
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
}

impl EvalError {
    pub fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError { kind }
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::from_kind(kind)
    }
}

#[cold]
pub(crate) fn unbound_identifier(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundIdentifier(name.to_string()))
}

#[cold]
pub(crate) fn unknown_operator(op: BinaryOp) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownOperator(op.symbol().to_string()))
}

#[cold]
pub(crate) fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub(crate) fn integer_overflow(op: BinaryOp) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow { op })
}
