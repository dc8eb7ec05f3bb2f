//! Values flowing through expression checking.
//!
//! A checked expression is either a literal (exact value, no type yet), a
//! constant folded from literals, or a value of a concrete declared type.
//! Suffix and explicit calls always produce concrete values.

use bitflags::bitflags;
use num_traits::Zero;
use quill_ir::{StringInterner, Type};
use quill_literal::range::fits_integer;
use quill_literal::{BigInt, BigRational, Literal, LiteralValue};

bitflags! {
    /// Properties of a checked value.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct ValueFlags: u8 {
        /// A bare literal token. Only these may take a compact suffix.
        const IS_LITERAL = 1 << 0;
        /// Known exactly at compile time; converts implicitly when it fits.
        const IS_CONSTANT = 1 << 1;
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ValueKind {
    /// A literal not yet committed to a type.
    Literal(Literal),
    /// Exact result of arithmetic on numeric literals.
    Constant(BigRational),
    /// A value of a declared type.
    Typed(Type),
    /// Result of a call that does not return exactly one value.
    Void,
}

/// Type and flags of a checked expression.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ValueType {
    pub kind: ValueKind,
    pub flags: ValueFlags,
}

impl ValueType {
    pub fn literal(literal: Literal) -> Self {
        ValueType {
            kind: ValueKind::Literal(literal),
            flags: ValueFlags::IS_LITERAL | ValueFlags::IS_CONSTANT,
        }
    }

    pub fn constant(value: BigRational) -> Self {
        ValueType {
            kind: ValueKind::Constant(value),
            flags: ValueFlags::IS_CONSTANT,
        }
    }

    /// A runtime value of type `ty`. Never a literal.
    pub fn typed(ty: Type) -> Self {
        ValueType {
            kind: ValueKind::Typed(ty),
            flags: ValueFlags::empty(),
        }
    }

    pub fn void() -> Self {
        ValueType {
            kind: ValueKind::Void,
            flags: ValueFlags::empty(),
        }
    }

    #[inline]
    pub fn is_literal(&self) -> bool {
        self.flags.contains(ValueFlags::IS_LITERAL)
    }

    #[inline]
    pub fn is_constant(&self) -> bool {
        self.flags.contains(ValueFlags::IS_CONSTANT)
    }

    /// The declared type, for concrete values.
    pub fn concrete_type(&self) -> Option<Type> {
        match self.kind {
            ValueKind::Typed(ty) => Some(ty),
            _ => None,
        }
    }

    /// Exact numeric value of a numeric literal or folded constant.
    pub fn numeric_value(&self) -> Option<BigRational> {
        match &self.kind {
            ValueKind::Literal(literal) => literal.numeric_value(),
            ValueKind::Constant(value) => Some(value.clone()),
            _ => None,
        }
    }

    /// Convert to a concrete argument of type `ty`.
    ///
    /// Literals and constants convert by value. Concrete values only pass to
    /// a parameter of the identical type and carry no compile-time payload.
    pub fn convert_to(&self, ty: Type) -> Result<ArgValue, ConvertError> {
        match &self.kind {
            ValueKind::Literal(literal) => literal_to_arg(literal, ty),
            ValueKind::Constant(value) => rational_to_arg(value, ty),
            ValueKind::Typed(actual) if *actual == ty => Ok(ArgValue::Runtime),
            ValueKind::Typed(_) | ValueKind::Void => Err(ConvertError::Incompatible),
        }
    }

    /// Render for diagnostics.
    pub fn describe(&self, interner: &StringInterner) -> String {
        match &self.kind {
            ValueKind::Literal(literal) => {
                format!("{} `{}`", literal.kind(), literal.text())
            }
            ValueKind::Constant(value) => format!("constant `{value}`"),
            ValueKind::Typed(ty) => format!("`{}`", ty.display(interner)),
            ValueKind::Void => "a call without a single return value".to_string(),
        }
    }
}

/// Compile-time payload of an argument.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ArgValue {
    Bool(bool),
    Integer(BigInt),
    Address([u8; 20]),
    /// Contents of a `bytesN`, `bytes`, or `string` argument.
    Bytes(Vec<u8>),
    /// Known only at run time.
    Runtime,
}

/// An argument converted to its parameter type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ConcreteArg {
    pub ty: Type,
    pub value: ArgValue,
}

/// Why a value does not convert to a type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ConvertError {
    /// Fractional value for an integer type.
    Fractional,
    /// Integer outside the type's range, or a string longer than `bytesN`.
    OutOfRange,
    /// No conversion exists between the kinds.
    Incompatible,
}

/// Convert a literal to a value of `ty`.
pub fn literal_to_arg(literal: &Literal, ty: Type) -> Result<ArgValue, ConvertError> {
    match (literal.value(), ty) {
        (LiteralValue::Bool(b), Type::Bool) => Ok(ArgValue::Bool(*b)),
        (LiteralValue::Rational(value), _) => rational_to_arg(value, ty),
        (LiteralValue::HexNumber { value, digits }, _) => match ty {
            Type::Uint(_) | Type::Int(_) => integer_to_arg(value, ty),
            Type::FixedBytes(n) if value.is_zero() || *digits == 2 * usize::from(n) => {
                Ok(ArgValue::Bytes(left_padded(value, n)))
            }
            _ => Err(ConvertError::Incompatible),
        },
        (LiteralValue::Address(bytes), Type::Address { payable: false }) => {
            Ok(ArgValue::Address(*bytes))
        }
        (LiteralValue::Bytes(bytes), _) => string_to_arg(literal, bytes, ty),
        _ => Err(ConvertError::Incompatible),
    }
}

fn rational_to_arg(value: &BigRational, ty: Type) -> Result<ArgValue, ConvertError> {
    match ty {
        Type::Uint(_) | Type::Int(_) => {
            if !value.is_integer() {
                return Err(ConvertError::Fractional);
            }
            integer_to_arg(&value.to_integer(), ty)
        }
        Type::FixedBytes(n) if value.is_zero() => Ok(ArgValue::Bytes(vec![0; usize::from(n)])),
        _ => Err(ConvertError::Incompatible),
    }
}

fn integer_to_arg(value: &BigInt, ty: Type) -> Result<ArgValue, ConvertError> {
    if fits_integer(value, ty) {
        Ok(ArgValue::Integer(value.clone()))
    } else {
        Err(ConvertError::OutOfRange)
    }
}

fn string_to_arg(literal: &Literal, bytes: &[u8], ty: Type) -> Result<ArgValue, ConvertError> {
    use quill_literal::LiteralKind;

    let kind = literal.kind();
    match ty {
        Type::FixedBytes(n) if kind != LiteralKind::UnicodeString => {
            let n = usize::from(n);
            if bytes.len() > n {
                return Err(ConvertError::OutOfRange);
            }
            let mut padded = bytes.to_vec();
            padded.resize(n, 0);
            Ok(ArgValue::Bytes(padded))
        }
        Type::Bytes(_) => Ok(ArgValue::Bytes(bytes.to_vec())),
        Type::String(_) if kind != LiteralKind::HexString => Ok(ArgValue::Bytes(bytes.to_vec())),
        _ => Err(ConvertError::Incompatible),
    }
}

/// Big-endian bytes of a non-negative value, left padded to `n` bytes.
fn left_padded(value: &BigInt, n: u8) -> Vec<u8> {
    let n = usize::from(n);
    let digits = if value.is_zero() {
        Vec::new()
    } else {
        value.magnitude().to_bytes_be()
    };
    let mut out = vec![0; n.saturating_sub(digits.len())];
    out.extend_from_slice(&digits);
    out
}

#[cfg(test)]
mod tests;
