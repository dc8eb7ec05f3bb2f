#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;

fn number(text: &str) -> LiteralToken {
    LiteralToken::new(LiteralTokenKind::Number, text.to_string(), Span::new(0, 1))
}

fn hex(text: &str) -> LiteralToken {
    LiteralToken::new(LiteralTokenKind::HexNumber, text.to_string(), Span::new(0, 1))
}

fn ratio(numer: i64, denom: i64) -> BigRational {
    BigRational::new(BigInt::from(numer), BigInt::from(denom))
}

fn classify_ok(token: &LiteralToken) -> Literal {
    match classify(token) {
        Ok(literal) => literal,
        Err(err) => panic!("`{}` failed to classify: {}", token.text, err.message()),
    }
}

#[test]
fn whole_decimals_are_integers() {
    for text in ["5", "1.0", "2e3", "2.5e1", "12300e-2", "1_000"] {
        let lit = classify_ok(&number(text));
        assert_eq!(lit.kind(), LiteralKind::RationalInteger, "{text}");
    }
    assert_eq!(classify_ok(&number("12300e-2")).integer_value(), Some(BigInt::from(123)));
    assert_eq!(classify_ok(&number("1_000")).integer_value(), Some(BigInt::from(1000)));
}

#[test]
fn non_whole_decimals_are_fractional() {
    let lit = classify_ok(&number("1.5"));
    assert_eq!(lit.kind(), LiteralKind::RationalFractional);
    assert_eq!(lit.numeric_value(), Some(ratio(3, 2)));

    let lit = classify_ok(&number("3e-2"));
    assert_eq!(lit.kind(), LiteralKind::RationalFractional);
    assert_eq!(lit.numeric_value(), Some(ratio(3, 100)));

    let lit = classify_ok(&number(".5"));
    assert_eq!(lit.numeric_value(), Some(ratio(1, 2)));
}

#[test]
fn decimal_values_are_exact() {
    // 0.1 has no finite binary representation.
    let lit = classify_ok(&number("0.1"));
    assert_eq!(lit.numeric_value(), Some(ratio(1, 10)));

    let lit = classify_ok(&number("1e30"));
    let expected = "1000000000000000000000000000000".parse::<BigInt>().unwrap();
    assert_eq!(lit.integer_value(), Some(expected));
}

#[test]
fn forty_hex_digits_is_always_an_address() {
    let text = format!("0x{}", "ab".repeat(20));
    let lit = classify_ok(&hex(&text));
    assert_eq!(lit.kind(), LiteralKind::Address);
    assert_eq!(lit.value(), &LiteralValue::Address([0xab; 20]));
    assert_eq!(lit.numeric_value(), None);
}

#[test]
fn other_hex_lengths_are_hex_numbers() {
    for (text, digits) in [("0x1", 1), ("0xff", 2), ("0x00ff", 4), ("0xdead_beef", 8)] {
        let lit = classify_ok(&hex(text));
        assert_eq!(lit.kind(), LiteralKind::HexNumber, "{text}");
        assert_eq!(lit.hex_digits(), Some(digits), "{text}");
    }
    let text = format!("0x{}", "1".repeat(41));
    assert_eq!(classify_ok(&hex(&text)).kind(), LiteralKind::HexNumber);
    assert_eq!(classify_ok(&hex("0x00ff")).integer_value(), Some(BigInt::from(255)));
}

#[test]
fn bools_and_strings() {
    let t = LiteralToken::new(LiteralTokenKind::Bool, "true".to_string(), Span::DUMMY);
    assert_eq!(classify_ok(&t).value(), &LiteralValue::Bool(true));

    let s = LiteralToken::with_bytes(
        LiteralTokenKind::String,
        "\"ab\"".to_string(),
        b"ab".to_vec(),
        Span::DUMMY,
    );
    let lit = classify_ok(&s);
    assert_eq!(lit.kind(), LiteralKind::String);
    assert_eq!(lit.bytes(), Some(&b"ab"[..]));

    let h = LiteralToken::with_bytes(
        LiteralTokenKind::HexString,
        "hex\"00ff\"".to_string(),
        vec![0x00, 0xff],
        Span::DUMMY,
    );
    assert_eq!(classify_ok(&h).kind(), LiteralKind::HexString);

    let u = LiteralToken::with_bytes(
        LiteralTokenKind::UnicodeString,
        "unicode\"é\"".to_string(),
        "é".as_bytes().to_vec(),
        Span::DUMMY,
    );
    assert_eq!(classify_ok(&u).kind(), LiteralKind::UnicodeString);
}

#[test]
fn zero_in_any_spelling() {
    for token in [number("0"), number("0.0"), number("0e5"), hex("0x0")] {
        assert!(classify_ok(&token).is_zero(), "{}", token.text);
    }
    assert!(!classify_ok(&number("0.1")).is_zero());
}

#[test]
fn malformed_numbers_are_errors() {
    for text in ["5.", "1__0", "_1", "1_", "1e", "1e-", "1ex", "", "-1", "1.2.3"] {
        let err = classify(&number(text)).unwrap_err();
        assert!(
            matches!(err.kind, LiteralErrorKind::MalformedNumber { .. }),
            "`{text}` gave {err:?}"
        );
    }
}

#[test]
fn huge_exponents_are_rejected() {
    let err = classify(&number("1e99999")).unwrap_err();
    assert_eq!(
        err.kind,
        LiteralErrorKind::ExponentTooLarge {
            exponent: "99999".to_string()
        }
    );
    let err = classify(&number("1e-4097")).unwrap_err();
    assert!(matches!(err.kind, LiteralErrorKind::ExponentTooLarge { .. }));

    assert!(classify(&number("1e4096")).is_ok());
}

#[test]
fn bad_hex_and_bool_tokens() {
    let err = classify(&hex("0xfg")).unwrap_err();
    assert_eq!(err.kind, LiteralErrorKind::InvalidHexDigit { digit: 'g' });
    assert!(classify(&hex("0x")).is_err());
    assert!(classify(&hex("ff")).is_err());

    let t = LiteralToken::new(LiteralTokenKind::Bool, "yes".to_string(), Span::DUMMY);
    assert_eq!(classify(&t).unwrap_err().kind, LiteralErrorKind::InvalidBool);
}

#[test]
fn errors_lower_to_e0003() {
    let err = classify(&number("1e99999")).unwrap_err();
    let diag = err.into_diagnostic();
    assert_eq!(diag.code, quill_diagnostic::ErrorCode::E0003);
    assert_eq!(diag.notes().count(), 1);
}

mod proptest_classify {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn classify_never_panics(text in "[0-9._eE+-]{0,12}") {
            let _ = classify(&number(&text));
        }

        #[test]
        fn integers_keep_their_value(n in 0u64..u64::MAX) {
            let lit = classify_ok(&number(&n.to_string()));
            prop_assert_eq!(lit.kind(), LiteralKind::RationalInteger);
            prop_assert_eq!(lit.integer_value(), Some(BigInt::from(n)));
        }

        #[test]
        fn hex_numbers_keep_their_value(n in 0u64..u64::MAX) {
            let lit = classify_ok(&hex(&format!("0x{n:x}")));
            prop_assert_eq!(lit.integer_value(), Some(BigInt::from(n)));
        }
    }
}
