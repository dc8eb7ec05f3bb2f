use super::*;

#[test]
fn all_codes_round_trip_through_from_str() {
    for code in ErrorCode::ALL {
        assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(*code));
    }
}

#[test]
fn from_str_is_case_insensitive() {
    assert_eq!("e2002".parse::<ErrorCode>(), Ok(ErrorCode::E2002));
    assert_eq!("E9999".parse::<ErrorCode>(), Err(()));
}

#[test]
fn phases_by_prefix() {
    assert!(ErrorCode::E0003.is_lexer_error());
    assert!(ErrorCode::E1002.is_parser_error());
    assert!(ErrorCode::E2005.is_type_error());
    assert!(!ErrorCode::E2005.is_lexer_error());
}

#[test]
fn every_code_has_an_explanation() {
    for code in ErrorCode::ALL {
        assert!(!code.explanation().is_empty(), "{code} has no explanation");
    }
}
