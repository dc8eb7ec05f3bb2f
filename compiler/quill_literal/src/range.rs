//! Integer range checks.
//!
//! Used to decide whether a literal value (or a decomposed mantissa or
//! exponent) fits the declared width of a parameter.

use num_bigint::BigInt;
use num_traits::One;
use quill_ir::Type;

/// Inclusive `(min, max)` bounds of an integer type, `None` for non-integers.
pub fn integer_bounds(ty: Type) -> Option<(BigInt, BigInt)> {
    match ty {
        Type::Uint(bits) => {
            let max = (BigInt::one() << usize::from(bits)) - 1;
            Some((BigInt::from(0u8), max))
        }
        Type::Int(bits) => {
            let half = BigInt::one() << usize::from(bits - 1);
            Some((-half.clone(), half - 1))
        }
        _ => None,
    }
}

/// Check if `value` is representable in the integer type `ty`.
///
/// Always false for non-integer types.
pub fn fits_integer(value: &BigInt, ty: Type) -> bool {
    integer_bounds(ty).is_some_and(|(min, max)| *value >= min && *value <= max)
}

#[cfg(test)]
mod tests;
