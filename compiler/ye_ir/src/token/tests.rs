use super::*;

#[test]
fn test_token_display_matches_kind_and_text() {
    let token = Token::dummy(TokenKind::Keyword, "ye");
    assert_eq!(token.to_string(), "Keyword(ye)");
    assert_eq!(
        format!("{:?}", Token::new(TokenKind::Number, "10", Span::new(7, 9))),
        "Number(10) @ 7..9"
    );
}

#[test]
fn test_token_predicates() {
    let semi = Token::dummy(TokenKind::Punctuation, ";");
    assert!(semi.is_punct(';'));
    assert!(!semi.is_punct('}'));

    let de = Token::dummy(TokenKind::Keyword, "de");
    assert!(de.is_keyword(Keyword::De));
    assert!(!de.is_keyword(Keyword::Ye));

    // Same text, different class.
    let ident = Token::dummy(TokenKind::Identifier, "de");
    assert!(!ident.is_keyword(Keyword::De));
}

#[test]
fn test_token_list_shapes_ignore_spans() {
    let a: TokenList = [
        Token::new(TokenKind::Identifier, "x", Span::new(0, 1)),
        Token::new(TokenKind::Punctuation, ";", Span::new(1, 2)),
    ]
    .into_iter()
    .collect();
    let b: TokenList = [
        Token::new(TokenKind::Identifier, "x", Span::new(4, 5)),
        Token::new(TokenKind::Punctuation, ";", Span::new(9, 10)),
    ]
    .into_iter()
    .collect();

    assert_ne!(a, b);
    assert_eq!(a.shapes(), b.shapes());
    assert_eq!(a.len(), 2);
    assert_eq!(a[1].text, ";");
}

#[test]
fn test_keyword_strings() {
    let words: Vec<&str> = Keyword::ALL.iter().map(|k| k.as_str()).collect();
    assert_eq!(words, ["ye", "de", "if"]);
}
