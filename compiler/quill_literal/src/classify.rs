//! Literal classifier.
//!
//! Turns a lexed [`LiteralToken`] into a [`Literal`] with a semantic kind and
//! an exact value. Decimal literals become `BigRational`s built from their
//! digits and exponent, never via `f64`.

use num_bigint::BigInt;
use num_rational::BigRational;
use quill_ir::{LiteralToken, LiteralTokenKind, Span};

use crate::literal::ADDRESS_HEX_DIGITS;
use crate::{Literal, LiteralError, LiteralErrorKind, LiteralKind, LiteralValue};

/// Largest decimal exponent (in absolute value) accepted in `1e<exp>`.
pub const MAX_DECIMAL_EXPONENT: u32 = 4096;

/// Classify a literal token.
///
/// Kinds are decided in a fixed order:
/// - `0x` + exactly 40 hex digits is `Address`, any other `0x` literal is
///   `HexNumber`
/// - a decimal literal is `RationalInteger` when its exact value is whole
///   (`1.0` and `2.5e1` are, `25e-2` is not), otherwise `RationalFractional`
/// - string-like tokens keep their lexer family
pub fn classify(token: &LiteralToken) -> Result<Literal, LiteralError> {
    let span = token.span;
    let (kind, value) = match token.kind {
        LiteralTokenKind::Bool => match token.text.as_str() {
            "true" => (LiteralKind::Bool, LiteralValue::Bool(true)),
            "false" => (LiteralKind::Bool, LiteralValue::Bool(false)),
            _ => {
                return Err(LiteralError {
                    span,
                    kind: LiteralErrorKind::InvalidBool,
                })
            }
        },
        LiteralTokenKind::Number => {
            let value = parse_decimal(&token.text, span)?;
            let kind = if value.is_integer() {
                LiteralKind::RationalInteger
            } else {
                LiteralKind::RationalFractional
            };
            (kind, LiteralValue::Rational(value))
        }
        LiteralTokenKind::HexNumber => classify_hex(&token.text, span)?,
        LiteralTokenKind::String => (LiteralKind::String, LiteralValue::Bytes(token.bytes.clone())),
        LiteralTokenKind::UnicodeString => (
            LiteralKind::UnicodeString,
            LiteralValue::Bytes(token.bytes.clone()),
        ),
        LiteralTokenKind::HexString => (
            LiteralKind::HexString,
            LiteralValue::Bytes(token.bytes.clone()),
        ),
    };

    tracing::trace!(text = %token.text, ?kind, "classified literal");
    Ok(Literal::new(kind, token.text.clone(), span, value))
}

/// Remove `_` separators, which may only appear between two digits.
fn strip_separators(digits: &str, span: Span) -> Result<String, LiteralError> {
    if digits.starts_with('_') || digits.ends_with('_') || digits.contains("__") {
        return Err(LiteralError::malformed(
            span,
            "`_` may only appear between two digits",
        ));
    }
    Ok(digits.replace('_', ""))
}

fn parse_decimal(text: &str, span: Span) -> Result<BigRational, LiteralError> {
    if text.starts_with(['-', '+']) {
        return Err(LiteralError::malformed(
            span,
            "literal tokens never carry a sign",
        ));
    }

    let (mantissa, exponent) = match text.find(['e', 'E']) {
        Some(pos) => (&text[..pos], Some(&text[pos + 1..])),
        None => (text, None),
    };

    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (mantissa, None),
    };

    let int_digits = strip_separators(int_part, span)?;
    let frac_digits = match frac_part {
        Some("") => {
            return Err(LiteralError::malformed(span, "missing digit after `.`"));
        }
        Some(frac) => strip_separators(frac, span)?,
        None => String::new(),
    };

    if int_digits.is_empty() && frac_digits.is_empty() {
        return Err(LiteralError::malformed(span, "missing digits"));
    }
    if !int_digits
        .bytes()
        .chain(frac_digits.bytes())
        .all(|b| b.is_ascii_digit())
    {
        return Err(LiteralError::malformed(span, "unexpected character"));
    }

    let exponent = match exponent {
        Some(exp) => parse_exponent(exp, span)?,
        None => 0,
    };

    let frac_len = i64::try_from(frac_digits.len())
        .map_err(|_| LiteralError::malformed(span, "fraction is too long"))?;
    let scale = exponent - frac_len;

    let mut all_digits = int_digits;
    all_digits.push_str(&frac_digits);
    let digits = BigInt::parse_bytes(all_digits.as_bytes(), 10)
        .ok_or_else(|| LiteralError::malformed(span, "unexpected character"))?;

    let power = pow10(scale.unsigned_abs(), span)?;
    Ok(if scale >= 0 {
        BigRational::from_integer(digits * power)
    } else {
        BigRational::new(digits, power)
    })
}

fn parse_exponent(exp: &str, span: Span) -> Result<i64, LiteralError> {
    let (negative, digits) = match exp.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, exp),
    };
    if digits.is_empty() {
        return Err(LiteralError::malformed(span, "empty exponent"));
    }
    let digits = strip_separators(digits, span)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LiteralError::malformed(span, "exponent must be decimal digits"));
    }

    let too_large = || LiteralError {
        span,
        kind: LiteralErrorKind::ExponentTooLarge {
            exponent: exp.to_string(),
        },
    };
    let magnitude = digits
        .parse::<u32>()
        .ok()
        .filter(|m| *m <= MAX_DECIMAL_EXPONENT)
        .ok_or_else(too_large)?;

    let magnitude = i64::from(magnitude);
    Ok(if negative { -magnitude } else { magnitude })
}

fn pow10(exp: u64, span: Span) -> Result<BigInt, LiteralError> {
    let exp = usize::try_from(exp).map_err(|_| LiteralError::malformed(span, "exponent overflow"))?;
    Ok(num_traits::pow(BigInt::from(10u8), exp))
}

fn classify_hex(text: &str, span: Span) -> Result<(LiteralKind, LiteralValue), LiteralError> {
    let Some(body) = text.strip_prefix("0x") else {
        return Err(LiteralError::malformed(span, "expected `0x` prefix"));
    };
    if body.is_empty() {
        return Err(LiteralError::malformed(span, "missing hexadecimal digits"));
    }
    let digits = strip_separators(body, span)?;
    if let Some(digit) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(LiteralError {
            span,
            kind: LiteralErrorKind::InvalidHexDigit { digit },
        });
    }

    // Fixed precedence: exactly 40 digits is always an address.
    if digits.len() == ADDRESS_HEX_DIGITS {
        let mut address = [0u8; 20];
        for (slot, pair) in address.iter_mut().zip(digits.as_bytes().chunks(2)) {
            let pair = std::str::from_utf8(pair)
                .map_err(|_| LiteralError::malformed(span, "invalid address"))?;
            *slot = u8::from_str_radix(pair, 16)
                .map_err(|_| LiteralError::malformed(span, "invalid address"))?;
        }
        return Ok((LiteralKind::Address, LiteralValue::Address(address)));
    }

    let value = BigInt::parse_bytes(digits.as_bytes(), 16)
        .ok_or_else(|| LiteralError::malformed(span, "missing hexadecimal digits"))?;
    Ok((
        LiteralKind::HexNumber,
        LiteralValue::HexNumber {
            value,
            digits: digits.len(),
        },
    ))
}

#[cfg(test)]
mod tests;
