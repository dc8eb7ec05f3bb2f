//! Literal suffixes for the Quill compiler.
//!
//! A literal directly followed by an identifier, `1.5 ether`, calls the
//! `pure suffix` function of that name with the literal as its argument:
//!
//! ```text
//! FunctionDecl[] ──SuffixTable::build──► SuffixTable (immutable, shared)
//!
//! literal suffix ──classify──► Literal
//!                ──SuffixResolver::resolve──► SelectedCall
//!                ──rewrite──► RewrittenCall { callee, args, result }
//! ```
//!
//! A one-parameter suffix receives the literal converted to its parameter
//! type. A two-parameter suffix receives the literal decomposed into
//! `(mantissa, exponent)` with `value == mantissa * 10^-exponent`.
//!
//! The result of a suffix call is an ordinary typed value, never a literal:
//! it cannot take a second suffix, and arithmetic on it is checked against
//! its declared type. Explicit calls `ether(15, 1)` bypass suffix resolution
//! and go through ordinary overload resolution ([`CallResolver`]).

mod call;
mod check;
mod compat;
mod decl;
mod module;
mod resolve;
mod rewrite;
mod value;

pub use call::{CallError, CallErrorKind, CallResolver, CallSite, OverloadResolver, ResolvedCall};
pub use check::{ExprChecker, SuffixRewrite};
pub use compat::{accepts_literal, is_compatible};
pub use decl::{
    check_restrictions, validate, FunctionSignature, Restriction, SignatureDisplay, SuffixParam,
    SuffixSignature, SuffixTable,
};
pub use module::{check_module, check_module_parallel, CheckOptions, CheckedItem, CheckedModule};
pub use resolve::{CallSyntax, RangePart, SelectedCall, SuffixError, SuffixErrorKind, SuffixResolver};
pub use rewrite::{rewrite, RewrittenCall};
pub use value::{literal_to_arg, ArgValue, ConcreteArg, ConvertError, ValueFlags, ValueKind, ValueType};

#[cfg(test)]
mod test_helpers;
