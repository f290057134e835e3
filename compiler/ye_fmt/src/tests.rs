use pretty_assertions::assert_eq;
use ye_ir::BinaryOp;

use super::*;

#[test]
fn test_empty_program() {
    assert_eq!(format_program(&Program::default()), "");
}

#[test]
fn test_flat_statements() {
    let program = Program::new(vec![
        Stmt::declare("x", Expr::Literal(10)),
        Stmt::declare(
            "z",
            Expr::binary(BinaryOp::Add, Expr::ident("x"), Expr::ident("y")),
        ),
        Stmt::debug("z"),
    ]);
    assert_eq!(
        format_program(&program),
        "ye x = 10;\nye z = x + y;\nde z;\n"
    );
}

#[test]
fn test_nested_if_indents() {
    let program = Program::new(vec![Stmt::if_is(
        Expr::ident("x"),
        Expr::Literal(10),
        vec![
            Stmt::declare(
                "r",
                Expr::binary(BinaryOp::Add, Expr::ident("x"), Expr::Literal(1)),
            ),
            Stmt::if_is(Expr::ident("r"), Expr::Literal(11), vec![Stmt::debug("r")]),
        ],
    )]);
    assert_eq!(
        format_program(&program),
        "if x is 10 {\n    ye r = x + 1;\n    if r is 11 {\n        de r;\n    }\n}\n"
    );
}

#[test]
fn test_empty_if_body() {
    let program = Program::new(vec![Stmt::if_is(Expr::ident("a"), Expr::ident("b"), vec![])]);
    assert_eq!(format_program(&program), "if a is b {}\n");
}

#[test]
fn test_format_expr() {
    assert_eq!(format_expr(&Expr::Literal(7)), "7");
    assert_eq!(
        format_expr(&Expr::binary(BinaryOp::Div, Expr::ident("a"), Expr::Literal(2))),
        "a / 2"
    );
}
