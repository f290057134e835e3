use super::*;

#[test]
fn test_codes_round_trip_through_strings() {
    for code in ErrorCode::ALL {
        assert_eq!(ErrorCode::from_str_code(code.as_str()), Some(code));
        assert_eq!(code.to_string(), code.as_str());
    }
    assert_eq!(ErrorCode::from_str_code("E9999"), None);
}

#[test]
fn test_stage_follows_leading_digit() {
    for code in ErrorCode::ALL {
        let expected = match &code.as_str()[1..2] {
            "0" => "lex",
            "1" => "parse",
            "6" => "eval",
            other => panic!("unexpected stage digit {other}"),
        };
        assert_eq!(code.stage(), expected, "{code}");
    }
}

#[test]
fn test_every_code_is_explained() {
    for code in ErrorCode::ALL {
        assert!(!code.explanation().is_empty(), "{code}");
    }
    assert!(ErrorCode::E1001.explanation().contains("`a + b + c`"));
}
