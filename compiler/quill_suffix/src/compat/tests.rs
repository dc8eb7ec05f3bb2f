use super::*;
use crate::test_helpers::{literal, Fixture};
use quill_ir::DataLocation;

const MEMORY: DataLocation = DataLocation::Memory;

#[test]
fn bool_accepts_only_bool() {
    let lit = literal("true");
    assert!(accepts_literal(&lit, Type::Bool));
    assert!(!accepts_literal(&lit, Type::Uint(8)));
}

#[test]
fn rationals_accept_every_integer_regardless_of_value() {
    for text in ["1", "300", "1.5", "1e80"] {
        let lit = literal(text);
        assert!(accepts_literal(&lit, Type::Uint(8)), "{text}");
        assert!(accepts_literal(&lit, Type::Int(256)), "{text}");
        assert!(!accepts_literal(&lit, Type::Bool), "{text}");
        assert!(!accepts_literal(&lit, Type::FixedBytes(1)), "{text}");
    }
}

#[test]
fn address_rejects_payable_address() {
    let lit = literal("0x1111111111111111111111111111111111111111");
    assert!(accepts_literal(&lit, Type::Address { payable: false }));
    assert!(!accepts_literal(&lit, Type::Address { payable: true }));
    assert!(!accepts_literal(&lit, Type::UINT256));
    assert!(!accepts_literal(&lit, Type::FixedBytes(20)));
}

#[test]
fn hex_number_bytes_width_follows_digit_count() {
    let lit = literal("0x1234");
    assert!(accepts_literal(&lit, Type::FixedBytes(2)));
    assert!(!accepts_literal(&lit, Type::FixedBytes(3)));
    assert!(!accepts_literal(&lit, Type::Bytes(MEMORY)));
}

#[test]
fn hex_number_never_takes_integer_parameters() {
    for text in ["0xff", "0x1234", "0x0001"] {
        let lit = literal(text);
        assert!(!accepts_literal(&lit, Type::Uint(8)), "{text}");
        assert!(!accepts_literal(&lit, Type::UINT256), "{text}");
        assert!(!accepts_literal(&lit, Type::Int(16)), "{text}");
    }
}

#[test]
fn zero_adds_every_fixed_bytes() {
    for text in ["0", "0.0", "0x0", "0x00"] {
        let lit = literal(text);
        assert!(accepts_literal(&lit, Type::FixedBytes(1)), "{text}");
        assert!(accepts_literal(&lit, Type::FixedBytes(32)), "{text}");
    }
}

#[test]
fn string_families() {
    let plain = literal("\"abc\"");
    let hex = literal("hex\"abcd\"");
    let unicode = literal("unicode\"abc\"");
    let string = Type::String(MEMORY);
    let bytes = Type::Bytes(MEMORY);

    assert!(accepts_literal(&plain, Type::FixedBytes(1)));
    assert!(accepts_literal(&plain, bytes));
    assert!(accepts_literal(&plain, string));

    assert!(accepts_literal(&hex, Type::FixedBytes(2)));
    assert!(accepts_literal(&hex, bytes));
    assert!(!accepts_literal(&hex, string));

    assert!(!accepts_literal(&unicode, Type::FixedBytes(3)));
    assert!(accepts_literal(&unicode, bytes));
    assert!(accepts_literal(&unicode, string));
}

#[test]
fn two_parameter_suffixes_take_rational_kinds() {
    let fixture = Fixture::new("function f(uint m, uint8 e) pure suffix returns (uint);");
    let sig = &fixture.table.suffix_candidates(fixture.name("f"))[0];
    assert!(is_compatible(sig, &literal("1.5")));
    assert!(is_compatible(sig, &literal("15")));
    assert!(!is_compatible(sig, &literal("0xff")));
    assert!(!is_compatible(sig, &literal("0x10")));
    assert!(!is_compatible(sig, &literal("true")));
    assert!(!is_compatible(sig, &literal("\"1.5\"")));
    assert!(!is_compatible(
        sig,
        &literal("0x1111111111111111111111111111111111111111")
    ));
}
