//! Declared types of function parameters and return values.
//!
//! Only the elementary value types a literal can convert to are modelled in
//! detail. Everything else a declaration may mention (structs, user-defined
//! value types) is a `Named` type the suffix machinery treats opaquely.

use std::fmt;

use crate::{Name, StringInterner};

/// Data location of a reference type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DataLocation {
    /// Temporary, lives for the duration of the call.
    Memory,
    /// Persistent contract storage.
    Storage,
    /// Read-only call-boundary argument area.
    Calldata,
}

impl DataLocation {
    pub fn keyword(self) -> &'static str {
        match self {
            DataLocation::Memory => "memory",
            DataLocation::Storage => "storage",
            DataLocation::Calldata => "calldata",
        }
    }

    /// Whether values in this location outlive a single pure call.
    ///
    /// `storage` is persistent and `calldata` is tied to the external call
    /// boundary. Neither can hold a value synthesized from a literal.
    pub fn is_persistent_or_boundary(self) -> bool {
        matches!(self, DataLocation::Storage | DataLocation::Calldata)
    }
}

/// A declared type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Type {
    Bool,
    /// `uintN`, N in 8..=256 step 8.
    Uint(u16),
    /// `intN`, N in 8..=256 step 8.
    Int(u16),
    Address {
        payable: bool,
    },
    /// `bytesN`, N in 1..=32.
    FixedBytes(u8),
    /// Dynamic `bytes`.
    Bytes(DataLocation),
    /// Dynamic `string`.
    String(DataLocation),
    /// A user type (struct or value type); `location` is set for structs.
    Named {
        name: Name,
        location: Option<DataLocation>,
    },
}

impl Type {
    /// `uint256`.
    pub const UINT256: Type = Type::Uint(256);

    /// Check if this is a signed or unsigned integer type.
    #[inline]
    pub const fn is_integer(self) -> bool {
        matches!(self, Type::Uint(_) | Type::Int(_))
    }

    #[inline]
    pub const fn is_unsigned(self) -> bool {
        matches!(self, Type::Uint(_))
    }

    /// Data location for reference types.
    pub const fn location(self) -> Option<DataLocation> {
        match self {
            Type::Bytes(loc) | Type::String(loc) => Some(loc),
            Type::Named { location, .. } => location,
            _ => None,
        }
    }

    /// Check if this is `address payable`.
    #[inline]
    pub const fn is_payable_address(self) -> bool {
        matches!(self, Type::Address { payable: true })
    }

    /// Parse an elementary type keyword (`uint8`, `bytes32`, `bool`, ...).
    ///
    /// `bytes` and `string` are returned with `memory` location; the caller
    /// replaces it when an explicit location follows. `address payable` is
    /// two tokens and is assembled by the parser.
    pub fn from_keyword(word: &str) -> Option<Type> {
        match word {
            "bool" => return Some(Type::Bool),
            "address" => return Some(Type::Address { payable: false }),
            "bytes" => return Some(Type::Bytes(DataLocation::Memory)),
            "string" => return Some(Type::String(DataLocation::Memory)),
            "uint" => return Some(Type::Uint(256)),
            "int" => return Some(Type::Int(256)),
            _ => {}
        }

        if let Some(bits) = word.strip_prefix("uint") {
            return parse_int_bits(bits).map(Type::Uint);
        }
        if let Some(bits) = word.strip_prefix("int") {
            return parse_int_bits(bits).map(Type::Int);
        }
        if let Some(len) = word.strip_prefix("bytes") {
            if len.starts_with('0') {
                return None;
            }
            return len
                .parse::<u8>()
                .ok()
                .filter(|n| (1..=32).contains(n))
                .map(Type::FixedBytes);
        }
        None
    }

    /// Render the type, resolving user type names through the interner.
    pub fn display(self, interner: &StringInterner) -> TypeDisplay<'_> {
        TypeDisplay { ty: self, interner }
    }
}

fn parse_int_bits(bits: &str) -> Option<u16> {
    if bits.starts_with('0') {
        return None;
    }
    bits.parse::<u16>()
        .ok()
        .filter(|b| *b % 8 == 0 && (8..=256).contains(b))
}

/// Display adapter for [`Type`].
pub struct TypeDisplay<'a> {
    ty: Type,
    interner: &'a StringInterner,
}

impl fmt::Display for TypeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ty {
            Type::Bool => f.write_str("bool"),
            Type::Uint(bits) => write!(f, "uint{bits}"),
            Type::Int(bits) => write!(f, "int{bits}"),
            Type::Address { payable: false } => f.write_str("address"),
            Type::Address { payable: true } => f.write_str("address payable"),
            Type::FixedBytes(n) => write!(f, "bytes{n}"),
            Type::Bytes(loc) => write!(f, "bytes {}", loc.keyword()),
            Type::String(loc) => write!(f, "string {}", loc.keyword()),
            Type::Named {
                name,
                location: None,
            } => f.write_str(self.interner.lookup(name)),
            Type::Named {
                name,
                location: Some(loc),
            } => write!(f, "{} {}", self.interner.lookup(name), loc.keyword()),
        }
    }
}
