//! Semantic literal kinds.

use std::fmt;

/// Classification of a literal token.
///
/// Kinds are mutually exclusive. The classifier decides them with one fixed
/// precedence rule: `0x` followed by exactly 40 hex digits is an `Address`,
/// never a `HexNumber`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LiteralKind {
    Bool,
    /// Decimal literal whose exact value is an integer (`5`, `1.0`, `2e3`).
    RationalInteger,
    /// Decimal literal whose exact value is not an integer (`1.5`, `3e-2`).
    RationalFractional,
    /// `0x` + exactly 40 hex digits.
    Address,
    /// Any other `0x` literal.
    HexNumber,
    /// `hex"..."`.
    HexString,
    /// `"..."`.
    String,
    /// `unicode"..."`.
    UnicodeString,
}

impl LiteralKind {
    /// Decimal rationals, the only kinds a two-parameter
    /// `(mantissa, exponent)` suffix can take. Hex numbers are excluded even
    /// though they have an integer value.
    #[inline]
    pub const fn admits_decomposition(self) -> bool {
        self.is_rational()
    }

    #[inline]
    pub const fn is_rational(self) -> bool {
        matches!(
            self,
            LiteralKind::RationalInteger | LiteralKind::RationalFractional
        )
    }

    #[inline]
    pub const fn is_string_like(self) -> bool {
        matches!(
            self,
            LiteralKind::HexString | LiteralKind::String | LiteralKind::UnicodeString
        )
    }

    /// Human-readable name used in diagnostics.
    pub const fn describe(self) -> &'static str {
        match self {
            LiteralKind::Bool => "boolean literal",
            LiteralKind::RationalInteger => "integer literal",
            LiteralKind::RationalFractional => "fractional literal",
            LiteralKind::Address => "address literal",
            LiteralKind::HexNumber => "hexadecimal number literal",
            LiteralKind::HexString => "hexadecimal string literal",
            LiteralKind::String => "string literal",
            LiteralKind::UnicodeString => "unicode string literal",
        }
    }
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}
