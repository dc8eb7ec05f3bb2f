use super::*;
use crate::test_helpers::literal;
use pretty_assertions::assert_eq;
use quill_ir::DataLocation;

fn int(v: i64) -> ArgValue {
    ArgValue::Integer(BigInt::from(v))
}

#[test]
fn literal_flags() {
    let value = ValueType::literal(literal("5"));
    assert!(value.is_literal());
    assert!(value.is_constant());

    let folded = ValueType::constant(BigRational::from_integer(BigInt::from(5)));
    assert!(!folded.is_literal());
    assert!(folded.is_constant());

    let typed = ValueType::typed(Type::UINT256);
    assert_eq!(typed.flags, ValueFlags::empty());
    assert_eq!(typed.concrete_type(), Some(Type::UINT256));
}

#[test]
fn integers_convert_when_they_fit() {
    let lit = literal("255");
    assert_eq!(literal_to_arg(&lit, Type::Uint(8)), Ok(int(255)));
    assert_eq!(
        literal_to_arg(&literal("256"), Type::Uint(8)),
        Err(ConvertError::OutOfRange)
    );
    assert_eq!(literal_to_arg(&literal("2.0"), Type::Int(8)), Ok(int(2)));
    assert_eq!(
        literal_to_arg(&literal("2.5"), Type::Int(8)),
        Err(ConvertError::Fractional)
    );
}

#[test]
fn negative_constants_fit_signed_types_only() {
    let minus_five = ValueType::constant(BigRational::from_integer(BigInt::from(-5)));
    assert_eq!(minus_five.convert_to(Type::Int(8)), Ok(int(-5)));
    assert_eq!(
        minus_five.convert_to(Type::Uint(8)),
        Err(ConvertError::OutOfRange)
    );
}

#[test]
fn hex_numbers_to_fixed_bytes_by_digit_count() {
    let lit = literal("0x00ff");
    assert_eq!(
        literal_to_arg(&lit, Type::FixedBytes(2)),
        Ok(ArgValue::Bytes(vec![0x00, 0xff]))
    );
    assert_eq!(
        literal_to_arg(&lit, Type::FixedBytes(4)),
        Err(ConvertError::Incompatible)
    );
    assert_eq!(literal_to_arg(&lit, Type::Uint(16)), Ok(int(255)));
}

#[test]
fn zero_converts_to_every_fixed_bytes() {
    for zero in ["0", "0.0", "0x0"] {
        assert_eq!(
            literal_to_arg(&literal(zero), Type::FixedBytes(3)),
            Ok(ArgValue::Bytes(vec![0, 0, 0])),
            "{zero}"
        );
    }
    assert_eq!(
        literal_to_arg(&literal("1"), Type::FixedBytes(3)),
        Err(ConvertError::Incompatible)
    );
}

#[test]
fn strings_pad_to_fixed_bytes() {
    let lit = literal("\"ab\"");
    assert_eq!(
        literal_to_arg(&lit, Type::FixedBytes(4)),
        Ok(ArgValue::Bytes(b"ab\0\0".to_vec()))
    );
    assert_eq!(
        literal_to_arg(&lit, Type::FixedBytes(1)),
        Err(ConvertError::OutOfRange)
    );
    assert_eq!(
        literal_to_arg(&lit, Type::String(DataLocation::Memory)),
        Ok(ArgValue::Bytes(b"ab".to_vec()))
    );
}

#[test]
fn string_families_differ() {
    let hex = literal("hex\"beef\"");
    assert_eq!(
        literal_to_arg(&hex, Type::Bytes(DataLocation::Memory)),
        Ok(ArgValue::Bytes(vec![0xbe, 0xef]))
    );
    assert_eq!(
        literal_to_arg(&hex, Type::String(DataLocation::Memory)),
        Err(ConvertError::Incompatible)
    );

    let unicode = literal("unicode\"h\u{e9}\"");
    assert_eq!(
        literal_to_arg(&unicode, Type::FixedBytes(8)),
        Err(ConvertError::Incompatible)
    );
    assert!(literal_to_arg(&unicode, Type::String(DataLocation::Memory)).is_ok());
}

#[test]
fn addresses_only_convert_to_plain_address() {
    let lit = literal("0x00000000000000000000000000000000000000aa");
    assert!(matches!(
        literal_to_arg(&lit, Type::Address { payable: false }),
        Ok(ArgValue::Address(bytes)) if bytes[19] == 0xaa
    ));
    assert_eq!(
        literal_to_arg(&lit, Type::Address { payable: true }),
        Err(ConvertError::Incompatible)
    );
    assert_eq!(
        literal_to_arg(&lit, Type::UINT256),
        Err(ConvertError::Incompatible)
    );
}

#[test]
fn typed_values_need_the_identical_type() {
    let value = ValueType::typed(Type::Uint(8));
    assert_eq!(value.convert_to(Type::Uint(8)), Ok(ArgValue::Runtime));
    assert_eq!(
        value.convert_to(Type::Uint(16)),
        Err(ConvertError::Incompatible)
    );
    assert_eq!(
        ValueType::void().convert_to(Type::Uint(8)),
        Err(ConvertError::Incompatible)
    );
}
