#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;

fn ratio(numer: i64, denom: i64) -> BigRational {
    BigRational::new(BigInt::from(numer), BigInt::from(denom))
}

fn pair(numer: i64, denom: i64) -> (BigInt, u32) {
    let d = decompose(&ratio(numer, denom)).unwrap();
    (d.mantissa, d.exponent)
}

#[test]
fn fractions_use_the_shortest_decimal() {
    assert_eq!(pair(3, 2), (BigInt::from(15), 1)); // 1.5
    assert_eq!(pair(1, 100), (BigInt::from(1), 2)); // 0.01
    assert_eq!(pair(1, 8), (BigInt::from(125), 3)); // 0.125
    assert_eq!(pair(1, 5), (BigInt::from(2), 1)); // 0.2
    assert_eq!(pair(3, 100), (BigInt::from(3), 2)); // 3e-2
}

#[test]
fn integers_have_zero_exponent() {
    assert_eq!(pair(5, 1), (BigInt::from(5), 0));
    assert_eq!(pair(0, 1), (BigInt::from(0), 0));
    // 12300e-2 is exactly 123.
    assert_eq!(pair(12300, 100), (BigInt::from(123), 0));
}

#[test]
fn trailing_zeros_do_not_matter() {
    // 1.50 and 1.5 are the same rational.
    assert_eq!(pair(150, 100), pair(15, 10));
}

#[test]
fn non_decimal_denominators_fail() {
    assert_eq!(decompose(&ratio(1, 3)), Err(DecomposeError::NotDecimal));
    assert_eq!(decompose(&ratio(7, 30)), Err(DecomposeError::NotDecimal));
}

#[test]
fn value_rebuilds_the_rational() {
    let r = ratio(1234567, 1000);
    assert_eq!(decompose(&r).unwrap().value(), r);
}

mod proptest_decompose {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn round_trips_and_is_minimal(mantissa in -1_000_000i64..1_000_000, exp in 0u32..30) {
            let scale = num_traits::pow(BigInt::from(10u8), exp as usize);
            let value = BigRational::new(BigInt::from(mantissa), scale);
            let d = decompose(&value).unwrap();
            prop_assert_eq!(d.value(), value.clone());
            prop_assert!(d.exponent <= exp);
            if d.exponent > 0 {
                // One fewer digit would not be an integer.
                let smaller = Decomposition {
                    mantissa: d.mantissa.clone(),
                    exponent: d.exponent - 1,
                };
                let shifted = value * BigRational::from_integer(
                    num_traits::pow(BigInt::from(10u8), (d.exponent - 1) as usize),
                );
                prop_assert!(!shifted.is_integer());
                prop_assert_ne!(smaller.value(), d.value());
            }
        }
    }
}
