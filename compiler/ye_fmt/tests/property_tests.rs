//! Property-based tests for the formatter.
//!
//! Generated trees stay within what the parser can produce, and the tests
//! check that:
//! 1. Round trip: parse(format(tree)) == tree
//! 2. Idempotence: format(parse(format(tree))) == format(tree)

use proptest::prelude::*;
use ye_fmt::format_program;
use ye_ir::{BinaryOp, Expr, Program, Stmt};

fn identifier_strategy() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,7}".prop_filter("not reserved", |s| {
        !matches!(s.as_str(), "ye" | "de" | "if" | "is")
    })
}

fn operand_strategy() -> impl Strategy<Value = Expr> {
    prop_oneof![
        (0..=i64::MAX).prop_map(Expr::Literal),
        identifier_strategy().prop_map(Expr::Identifier),
    ]
}

fn expr_strategy() -> impl Strategy<Value = Expr> {
    prop_oneof![
        operand_strategy(),
        (
            prop::sample::select(BinaryOp::ARITHMETIC.to_vec()),
            operand_strategy(),
            operand_strategy()
        )
            .prop_map(|(op, left, right)| Expr::binary(op, left, right)),
    ]
}

fn stmt_strategy() -> impl Strategy<Value = Stmt> {
    let leaf = prop_oneof![
        (identifier_strategy(), expr_strategy()).prop_map(|(name, value)| Stmt::declare(name, value)),
        identifier_strategy().prop_map(Stmt::debug),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        (
            expr_strategy(),
            expr_strategy(),
            prop::collection::vec(inner, 0..4),
        )
            .prop_map(|(left, right, body)| Stmt::if_is(left, right, body))
    })
}

fn program_strategy() -> impl Strategy<Value = Program> {
    prop::collection::vec(stmt_strategy(), 0..8).prop_map(Program::new)
}

fn reparse(source: &str) -> Result<Program, String> {
    let tokens = ye_lexer::lex(source).map_err(|e| e.to_string())?;
    ye_parse::parse(&tokens).map_err(|e| e.to_string())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn formatted_program_parses_back(program in program_strategy()) {
        let source = format_program(&program);
        prop_assert_eq!(reparse(&source), Ok(program));
    }

    #[test]
    fn formatting_is_idempotent(program in program_strategy()) {
        let once = format_program(&program);
        let reparsed = reparse(&once);
        prop_assert!(reparsed.is_ok(), "did not parse: {}", once);
        if let Ok(reparsed) = reparsed {
            prop_assert_eq!(format_program(&reparsed), once);
        }
    }
}

#[test]
fn bare_semicolons_are_normalized_away() {
    let Ok(program) = reparse(";; ye x = 1;; if x is 1 { ; de x; }") else {
        panic!("fixture should parse");
    };
    assert_eq!(
        format_program(&program),
        "ye x = 1;\nif x is 1 {\n    de x;\n}\n"
    );
}
