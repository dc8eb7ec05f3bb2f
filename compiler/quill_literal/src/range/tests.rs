use super::*;
use pretty_assertions::assert_eq;

#[test]
fn unsigned_bounds() {
    assert_eq!(
        integer_bounds(Type::Uint(8)),
        Some((BigInt::from(0), BigInt::from(255)))
    );
    assert!(fits_integer(&BigInt::from(255), Type::Uint(8)));
    assert!(!fits_integer(&BigInt::from(256), Type::Uint(8)));
    assert!(!fits_integer(&BigInt::from(-1), Type::Uint(256)));
}

#[test]
fn signed_bounds() {
    assert_eq!(
        integer_bounds(Type::Int(8)),
        Some((BigInt::from(-128), BigInt::from(127)))
    );
    assert!(fits_integer(&BigInt::from(-128), Type::Int(8)));
    assert!(!fits_integer(&BigInt::from(128), Type::Int(8)));
}

#[test]
fn uint256_max() {
    let max = (BigInt::from(1) << 256usize) - 1;
    assert!(fits_integer(&max, Type::UINT256));
    assert!(!fits_integer(&(max + 1), Type::UINT256));
}

#[test]
fn non_integers_never_fit() {
    assert_eq!(integer_bounds(Type::Bool), None);
    assert!(!fits_integer(&BigInt::from(0), Type::FixedBytes(1)));
}
