//! Literal kind to parameter type compatibility.
//!
//! Filtering depends on the literal's kind (plus its hex digit count and
//! whether it is zero), never on its magnitude: `300 s` with overloads
//! `s(uint8)` and `s(uint16)` keeps both candidates and is ambiguous.
//! Range checks happen after a single candidate is selected.

use quill_ir::Type;
use quill_literal::{Literal, LiteralKind};

use crate::SuffixSignature;

/// Check if a one-parameter suffix declaring `param` accepts `literal`.
pub fn accepts_literal(literal: &Literal, param: Type) -> bool {
    if literal.is_zero() && matches!(param, Type::FixedBytes(_)) {
        return true;
    }
    match literal.kind() {
        LiteralKind::Bool => param == Type::Bool,
        LiteralKind::RationalInteger | LiteralKind::RationalFractional => param.is_integer(),
        LiteralKind::Address => param == Type::Address { payable: false },
        LiteralKind::HexNumber => match param {
            Type::FixedBytes(n) => literal.hex_digits() == Some(2 * usize::from(n)),
            _ => false,
        },
        LiteralKind::HexString => matches!(param, Type::FixedBytes(_) | Type::Bytes(_)),
        LiteralKind::String => {
            matches!(param, Type::FixedBytes(_) | Type::Bytes(_) | Type::String(_))
        }
        LiteralKind::UnicodeString => matches!(param, Type::Bytes(_) | Type::String(_)),
    }
}

/// Check if a suffix candidate accepts the literal's kind.
///
/// Two-parameter `(mantissa, exponent)` suffixes take decimal rationals only.
pub fn is_compatible(signature: &SuffixSignature, literal: &Literal) -> bool {
    match signature.params.as_slice() {
        [param] => accepts_literal(literal, param.ty),
        [_, _] => literal.kind().admits_decomposition(),
        _ => false,
    }
}

#[cfg(test)]
mod tests;
