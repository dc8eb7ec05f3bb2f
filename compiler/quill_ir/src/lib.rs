//! Quill IR - Intermediate Representation Types
//!
//! This crate contains the core data structures shared by every phase of the
//! Quill front end:
//! - Spans for source locations
//! - Names for interned identifiers
//! - Elementary types (`uintN`, `bytesN`, `address`, ...)
//! - Literal tokens produced by the lexer
//! - A flat expression arena and function declarations
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers become `Name(u32)`
//! - **Flatten Everything**: no `Box<Expr>`, expressions are `ExprId(u32)` indices
//! - **Immutable after construction**: the parser builds, later phases only read

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod interner;
mod name;
mod span;
mod token;
mod ty;

pub use ast::{
    BinaryOp, Expr, ExprArena, ExprId, ExprKind, FunctionDecl, LetItem, Module, Param,
    StateMutability, UnaryOp, Visibility,
};
pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use span::{Span, SpanError};
pub use token::{LiteralToken, LiteralTokenKind};
pub use ty::{DataLocation, Type, TypeDisplay};

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{ExprId, Name, Span};
    crate::static_assert_size!(Span, 8);
    crate::static_assert_size!(Name, 4);
    crate::static_assert_size!(ExprId, 4);
}
