use pretty_assertions::assert_eq;
use ye_ir::BinaryOp;

use super::*;
use crate::{buffer_handler, EvalErrorKind};

fn interpreter() -> (Interpreter, SharedPrintHandler) {
    let print = buffer_handler();
    (Interpreter::new(print.clone()), print)
}

#[test]
fn test_declaration_binds_and_returns_value() {
    let (mut interp, _) = interpreter();
    let outcome = interp.eval_stmt(&Stmt::declare("x", Expr::Literal(10)));
    assert_eq!(outcome, Ok(Outcome::Value(Value::Int(10))));
    assert_eq!(interp.environment().lookup("x"), Some(Value::Int(10)));
}

#[test]
fn test_debug_prints_bound_value() {
    let env: Environment = [("z", Value::Int(30))].into_iter().collect();
    let print = buffer_handler();
    let mut interp = Interpreter::with_environment(env, print.clone());

    let outcome = interp.eval_stmt(&Stmt::debug("z"));
    assert_eq!(outcome, Ok(Outcome::Value(Value::Int(30))));
    assert_eq!(print.output(), "z = 30\n");
}

#[test]
fn test_debug_tolerates_unbound_name() {
    let (mut interp, print) = interpreter();
    let outcome = interp.eval_stmt(&Stmt::debug("ghost"));
    assert_eq!(outcome, Ok(Outcome::Value(Value::Absent)));
    assert_eq!(print.output(), "ghost = Undefined\n");
    assert!(interp.environment().is_empty());
}

#[test]
fn test_identifier_lookup_is_strict() {
    let (interp, _) = interpreter();
    let err = interp
        .eval_expr(&Expr::binary(BinaryOp::Add, Expr::ident("b"), Expr::Literal(1)))
        .map_err(|e| e.kind);
    assert_eq!(err, Err(EvalErrorKind::UnboundIdentifier("b".to_string())));
}

#[test]
fn test_if_untaken_is_skipped() {
    let (mut interp, print) = interpreter();
    let stmt = Stmt::if_is(
        Expr::Literal(1),
        Expr::Literal(2),
        vec![Stmt::declare("r", Expr::Literal(1)), Stmt::debug("r")],
    );
    assert_eq!(interp.eval_stmt(&stmt), Ok(Outcome::Skipped));
    assert_eq!(print.output(), "");
    assert!(!interp.environment().contains("r"));
}

#[test]
fn test_if_taken_writes_shared_scope() {
    let (mut interp, _) = interpreter();
    let stmt = Stmt::if_is(
        Expr::Literal(2),
        Expr::Literal(2),
        vec![Stmt::declare("r", Expr::Literal(5))],
    );
    assert_eq!(
        interp.eval_stmt(&stmt),
        Ok(Outcome::Branch(vec![Outcome::Value(Value::Int(5))]))
    );
    assert_eq!(interp.into_environment().lookup("r"), Some(Value::Int(5)));
}

#[test]
fn test_integer_condition_truthiness() {
    let (mut interp, _) = interpreter();
    let zero = Stmt::If {
        condition: Expr::Literal(0),
        consequent: vec![],
    };
    let seven = Stmt::If {
        condition: Expr::Literal(7),
        consequent: vec![],
    };
    assert_eq!(interp.eval_stmt(&zero), Ok(Outcome::Skipped));
    assert_eq!(interp.eval_stmt(&seven), Ok(Outcome::Branch(vec![])));
}

#[test]
fn test_bool_binding_from_hand_built_tree() {
    let (mut interp, print) = interpreter();
    let program = Program::new(vec![
        Stmt::declare(
            "flag",
            Expr::binary(BinaryOp::Is, Expr::Literal(3), Expr::Literal(3)),
        ),
        Stmt::debug("flag"),
    ]);
    assert!(interp.eval_program(&program).is_ok());
    assert_eq!(print.output(), "flag = true\n");

    let err = interp
        .eval_expr(&Expr::binary(BinaryOp::Add, Expr::ident("flag"), Expr::Literal(1)))
        .map_err(|e| e.kind);
    assert_eq!(err, Err(EvalErrorKind::UnknownOperator("+".to_string())));
}

#[test]
fn test_error_keeps_earlier_bindings() {
    let (mut interp, print) = interpreter();
    let program = Program::new(vec![
        Stmt::declare("a", Expr::Literal(1)),
        Stmt::declare(
            "b",
            Expr::binary(BinaryOp::Div, Expr::ident("a"), Expr::Literal(0)),
        ),
        Stmt::debug("a"),
    ]);
    let err = interp.eval_program(&program).map_err(|e| e.kind);
    assert_eq!(err, Err(EvalErrorKind::DivisionByZero));
    assert_eq!(print.output(), "");
    assert_eq!(interp.environment().bindings(), vec![("a", Value::Int(1))]);
}

#[test]
fn test_deeply_nested_if() {
    let (mut interp, print) = interpreter();
    let mut stmt = Stmt::debug("x");
    for _ in 0..100_000 {
        stmt = Stmt::if_is(Expr::Literal(1), Expr::Literal(1), vec![stmt]);
    }
    assert!(interp.eval_stmt(&stmt).is_ok());
    assert_eq!(print.output(), "x = Undefined\n");
}
