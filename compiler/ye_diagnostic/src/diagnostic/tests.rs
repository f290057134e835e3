use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_builder_collects_parts() {
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("expected `;`, found end of input")
        .with_label(Span::new(9, 9), "expected `;` here")
        .with_note("every `ye` statement ends with `;`")
        .with_suggestion("add `;`");

    assert_eq!(diag.labels, vec![Label::new(Span::new(9, 9), "expected `;` here")]);
    assert_eq!(diag.notes, vec!["every `ye` statement ends with `;`".to_string()]);
    assert_eq!(diag.suggestions, vec!["add `;`".to_string()]);
    assert_eq!(
        diag.to_string(),
        "error[E1001]: expected `;`, found end of input"
    );
}

#[test]
fn test_bare_error_has_no_parts() {
    let diag = Diagnostic::error(ErrorCode::E6003);
    assert!(diag.labels.is_empty());
    assert!(diag.notes.is_empty());
    assert_eq!(diag.to_string(), "error[E6003]: ");
}
