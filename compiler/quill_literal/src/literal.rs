//! Classified literals.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;
use quill_ir::Span;

use crate::LiteralKind;

/// Number of hex digits in an address literal.
pub const ADDRESS_HEX_DIGITS: usize = 40;

/// Kind-specific payload of a literal.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum LiteralValue {
    Bool(bool),
    /// Exact value of a decimal literal.
    Rational(BigRational),
    /// Value and digit count (underscores excluded) of a hex number.
    HexNumber { value: BigInt, digits: usize },
    Address([u8; 20]),
    /// Decoded contents of a string-like literal.
    Bytes(Vec<u8>),
}

/// A classified literal. Immutable once created.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Literal {
    kind: LiteralKind,
    text: String,
    span: Span,
    value: LiteralValue,
}

impl Literal {
    pub(crate) fn new(kind: LiteralKind, text: String, span: Span, value: LiteralValue) -> Self {
        Literal {
            kind,
            text,
            span,
            value,
        }
    }

    #[inline]
    pub fn kind(&self) -> LiteralKind {
        self.kind
    }

    /// Source spelling of the literal.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    #[inline]
    pub fn value(&self) -> &LiteralValue {
        &self.value
    }

    /// Exact numeric value for decimal and hex-number literals.
    pub fn numeric_value(&self) -> Option<BigRational> {
        match &self.value {
            LiteralValue::Rational(r) => Some(r.clone()),
            LiteralValue::HexNumber { value, .. } => {
                Some(BigRational::from_integer(value.clone()))
            }
            _ => None,
        }
    }

    /// Exact integer value, if the literal is numeric and integral.
    pub fn integer_value(&self) -> Option<BigInt> {
        match &self.value {
            LiteralValue::Rational(r) if r.is_integer() => Some(r.to_integer()),
            LiteralValue::HexNumber { value, .. } => Some(value.clone()),
            _ => None,
        }
    }

    /// Check if this is a numeric literal equal to zero.
    ///
    /// Zero converts to every `bytesN` whether written `0`, `0.0`, or `0x0`.
    pub fn is_zero(&self) -> bool {
        match &self.value {
            LiteralValue::Rational(r) => r.is_zero(),
            LiteralValue::HexNumber { value, .. } => value.is_zero(),
            _ => false,
        }
    }

    /// Digit count of a hex-number literal.
    pub fn hex_digits(&self) -> Option<usize> {
        match &self.value {
            LiteralValue::HexNumber { digits, .. } => Some(*digits),
            _ => None,
        }
    }

    /// Decoded byte contents of a string-like literal.
    pub fn bytes(&self) -> Option<&[u8]> {
        match &self.value {
            LiteralValue::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }
}
