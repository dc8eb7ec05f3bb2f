//! Diagnostic system for rich error reporting.
//!
//! Every diagnostic carries:
//! - an error code for searchability (`quillc explain E2002`)
//! - a clear message (what went wrong)
//! - a primary span (where it went wrong)
//! - context labels and notes (why it's wrong)
//! - suggestions (how to fix)
//!
//! # Error Guarantees
//!
//! `ErrorGuaranteed` is type-level proof that at least one error was emitted.
//! Phases that fail return it instead of `()` so a failure can never be
//! reported without a diagnostic behind it.
//!
//! ```text
//! let guarantee = queue.emit_error(diagnostic);
//! fn check_module(..) -> Result<CheckedModule, ErrorGuaranteed> { ... }
//! ```

mod diagnostic;
pub mod emitter;
mod error_code;
mod guarantee;
pub mod queue;

pub use diagnostic::{Child, ChildKind, Diagnostic, Label, LabelStyle, Severity};
pub use error_code::ErrorCode;
pub use guarantee::ErrorGuaranteed;
