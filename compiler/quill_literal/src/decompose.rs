//! Decimal decomposition of rational literal values.
//!
//! A value `v` decomposes into `(mantissa, exponent)` with
//! `v == mantissa * 10^-exponent` and the smallest non-negative exponent for
//! which `mantissa` is an integer. `1.5 -> (15, 1)`, `1.50 -> (15, 1)`,
//! `5 -> (5, 0)`, `12300e-2 -> (123, 0)`.

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

/// A value written as `mantissa * 10^-exponent`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Decomposition {
    pub mantissa: BigInt,
    pub exponent: u32,
}

impl Decomposition {
    /// Rebuild the exact value.
    pub fn value(&self) -> BigRational {
        let scale = num_traits::pow(BigInt::from(10u8), self.exponent as usize);
        BigRational::new(self.mantissa.clone(), scale)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DecomposeError {
    /// The reduced denominator has a prime factor other than 2 or 5, so no
    /// finite decimal represents the value.
    NotDecimal,
    /// The exponent does not fit in `u32`.
    ExponentOverflow,
}

impl fmt::Display for DecomposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecomposeError::NotDecimal => f.write_str("value has no finite decimal representation"),
            DecomposeError::ExponentOverflow => f.write_str("decimal exponent overflows"),
        }
    }
}

/// Decompose `value` into its minimal `(mantissa, exponent)` pair.
///
/// With the reduced denominator written `2^a * 5^b`, the minimal exponent is
/// `max(a, b)`.
pub fn decompose(value: &BigRational) -> Result<Decomposition, DecomposeError> {
    if value.is_integer() {
        return Ok(Decomposition {
            mantissa: value.to_integer(),
            exponent: 0,
        });
    }

    // `BigRational` is kept reduced, so the denominator is already coprime
    // with the numerator.
    let mut rest = value.denom().clone();
    let twos = strip_factor(&mut rest, 2);
    let fives = strip_factor(&mut rest, 5);
    if !rest.is_one() {
        return Err(DecomposeError::NotDecimal);
    }

    let exponent = twos.max(fives);
    let exponent = u32::try_from(exponent).map_err(|_| DecomposeError::ExponentOverflow)?;

    let scale = num_traits::pow(BigInt::from(10u8), exponent as usize);
    let scaled = value.numer() * scale;
    debug_assert!((&scaled % value.denom()).is_zero());
    let mantissa = scaled / value.denom();

    tracing::trace!(%mantissa, exponent, "decomposed rational literal");
    Ok(Decomposition { mantissa, exponent })
}

/// Divide out every factor of `prime` and return how many there were.
fn strip_factor(n: &mut BigInt, prime: u8) -> u64 {
    let prime = BigInt::from(prime);
    let mut count = 0;
    loop {
        if !(&*n % &prime).is_zero() {
            return count;
        }
        *n = &*n / &prime;
        count += 1;
    }
}

#[cfg(test)]
mod tests;
