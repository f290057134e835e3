//! End-to-end evaluator tests over lexed and parsed source.

use pretty_assertions::assert_eq;

use crate::{buffer_handler, EvalError, EvalErrorKind, Interpreter, Outcome, Value};

/// Run `source`, returning captured debug lines alongside the result.
fn run(source: &str) -> (Result<Vec<Outcome>, EvalError>, Vec<String>, Interpreter) {
    let tokens = match ye_lexer::lex(source) {
        Ok(tokens) => tokens,
        Err(error) => panic!("lex failed for {source:?}: {error}"),
    };
    let program = match ye_parse::parse(&tokens) {
        Ok(program) => program,
        Err(error) => panic!("parse failed for {source:?}: {error}"),
    };
    let print = buffer_handler();
    let mut interp = Interpreter::new(print.clone());
    let result = interp.eval_program(&program);
    (result, print.lines(), interp)
}

#[test]
fn test_sum_and_debug() {
    let (result, lines, _) = run("ye x = 10; ye y = 20; ye z = x + y; de z;");
    assert_eq!(
        result,
        Ok(vec![
            Outcome::Value(Value::Int(10)),
            Outcome::Value(Value::Int(20)),
            Outcome::Value(Value::Int(30)),
            Outcome::Value(Value::Int(30)),
        ])
    );
    assert_eq!(lines, vec!["z = 30"]);
}

#[test]
fn test_if_taken() {
    let (result, lines, interp) = run("ye x = 10; if x is 10 { ye r = x + 1; de r; }");
    assert_eq!(
        result.map(|outcomes| outcomes[1].clone()),
        Ok(Outcome::Branch(vec![
            Outcome::Value(Value::Int(11)),
            Outcome::Value(Value::Int(11)),
        ]))
    );
    assert_eq!(lines, vec!["r = 11"]);
    assert_eq!(interp.environment().lookup("r"), Some(Value::Int(11)));
}

#[test]
fn test_if_not_taken_leaves_name_unbound() {
    let (result, lines, interp) = run("ye x = 9; if x is 10 { ye r = x + 1; de r; } de r;");
    assert_eq!(
        result,
        Ok(vec![
            Outcome::Value(Value::Int(9)),
            Outcome::Skipped,
            Outcome::Value(Value::Absent),
        ])
    );
    assert_eq!(lines, vec!["r = Undefined"]);
    assert!(!interp.environment().contains("r"));
}

#[test]
fn test_unbound_in_expression_vs_debug() {
    let (result, lines, _) = run("ye a = b + 1;");
    assert_eq!(
        result.map_err(|e| e.kind),
        Err(EvalErrorKind::UnboundIdentifier("b".to_string()))
    );
    assert!(lines.is_empty());

    let (result, lines, _) = run("de b;");
    assert_eq!(result, Ok(vec![Outcome::Value(Value::Absent)]));
    assert_eq!(lines, vec!["b = Undefined"]);
}

#[test]
fn test_redeclaration_overwrites() {
    let (_, lines, interp) = run("ye x = 1; ye x = x * 5; de x;");
    assert_eq!(lines, vec!["x = 5"]);
    assert_eq!(interp.environment().len(), 1);
}

#[test]
fn test_truncating_division() {
    let (_, lines, _) = run("ye a = 0 - 7; ye q = a / 2; de q;");
    assert_eq!(lines, vec!["q = -3"]);
}

#[test]
fn test_runtime_division_by_zero() {
    let (result, _, _) = run("ye z = 0; ye q = 1 / z;");
    assert_eq!(result.map_err(|e| e.kind), Err(EvalErrorKind::DivisionByZero));
}

#[test]
fn test_runtime_overflow() {
    let (result, _, _) = run("ye big = 9223372036854775807; ye boom = big + 1;");
    assert_eq!(
        result.map_err(|e| e.to_string()),
        Err("integer overflow in `+`".to_string())
    );
}

#[test]
fn test_nested_if_sees_outer_bindings() {
    let (_, lines, _) = run("ye a = 1; if a is 1 { ye b = a + 1; if b is 2 { de b; } } de b;");
    assert_eq!(lines, vec!["b = 2", "b = 2"]);
}

#[test]
fn test_runs_are_independent() {
    let (_, _, first) = run("ye x = 1;");
    let (_, lines, second) = run("de x;");
    assert_eq!(first.environment().lookup("x"), Some(Value::Int(1)));
    assert_eq!(lines, vec!["x = Undefined"]);
    assert!(second.environment().is_empty());
}

#[test]
fn test_evaluate_uses_fresh_environment() {
    let tokens = ye_lexer::lex("ye x = 2; de x;").unwrap_or_default();
    let Ok(program) = ye_parse::parse(&tokens) else {
        panic!("fixture should parse");
    };
    let print = buffer_handler();
    let first = crate::evaluate(&program, print.clone());
    let second = crate::evaluate(&program, print.clone());
    assert_eq!(first, second);
    assert_eq!(print.lines(), vec!["x = 2", "x = 2"]);
}
