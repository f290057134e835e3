//! Binary operator implementations.
//!
//! Integer arithmetic is checked. `/` truncates toward zero.

use ye_ir::BinaryOp;

use crate::errors::{division_by_zero, integer_overflow, unknown_operator};
use crate::{EvalError, Value};

/// Apply `op` to two evaluated operands.
///
/// `is` is defined for every pair and is false when the operand kinds
/// differ. Arithmetic needs two integers.
pub fn evaluate_binary(op: BinaryOp, left: Value, right: Value) -> Result<Value, EvalError> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(op, a, b),
        _ if op == BinaryOp::Is => Ok(Value::Bool(left == right)),
        _ => Err(unknown_operator(op)),
    }
}

fn eval_int_binary(op: BinaryOp, a: i64, b: i64) -> Result<Value, EvalError> {
    let result = match op {
        BinaryOp::Add => a.checked_add(b),
        BinaryOp::Sub => a.checked_sub(b),
        BinaryOp::Mul => a.checked_mul(b),
        BinaryOp::Div if b == 0 => return Err(division_by_zero()),
        BinaryOp::Div => a.checked_div(b),
        BinaryOp::Is => return Ok(Value::Bool(a == b)),
    };
    result.map(Value::Int).ok_or_else(|| integer_overflow(op))
}
