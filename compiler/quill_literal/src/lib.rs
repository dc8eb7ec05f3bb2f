//! Literal classification and decomposition.
//!
//! Two stages sit between the lexer and suffix resolution:
//!
//! ```text
//! LiteralToken ──classify()──► Literal { kind, value }
//!                                   │
//!                                   ▼ (two-parameter suffixes only)
//!                        decompose() ──► (mantissa, exponent)
//! ```
//!
//! All numeric values are exact (`BigRational` / `BigInt`). Floating point is
//! never involved: `decompose` relies on the value being the exact decimal
//! that was written.

mod classify;
mod decompose;
mod error;
mod kind;
mod literal;
pub mod range;

pub use classify::{classify, MAX_DECIMAL_EXPONENT};
pub use decompose::{decompose, DecomposeError, Decomposition};
pub use error::{LiteralError, LiteralErrorKind};
pub use kind::LiteralKind;
pub use literal::{Literal, LiteralValue, ADDRESS_HEX_DIGITS};

// Re-exported so downstream crates name the same numeric types.
pub use num_bigint::BigInt;
pub use num_rational::BigRational;
