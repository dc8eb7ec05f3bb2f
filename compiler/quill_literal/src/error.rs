//! Literal classification errors.

use quill_diagnostic::{Diagnostic, ErrorCode};
use quill_ir::Span;

/// A literal the classifier could not evaluate.
///
/// The lexer already rejects most malformed numbers. These errors cover the
/// rest (and tokens built by hand rather than lexed), so classification never
/// panics on odd input.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LiteralError {
    pub span: Span,
    pub kind: LiteralErrorKind,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LiteralErrorKind {
    /// Digits, separators, or exponent are malformed.
    MalformedNumber { reason: &'static str },
    /// Decimal exponent beyond [`crate::MAX_DECIMAL_EXPONENT`].
    ExponentTooLarge { exponent: String },
    /// A hex digit outside `[0-9a-fA-F]`.
    InvalidHexDigit { digit: char },
    /// A bool token that is neither `true` nor `false`.
    InvalidBool,
}

impl LiteralError {
    pub(crate) fn malformed(span: Span, reason: &'static str) -> Self {
        LiteralError {
            span,
            kind: LiteralErrorKind::MalformedNumber { reason },
        }
    }

    pub fn message(&self) -> String {
        match &self.kind {
            LiteralErrorKind::MalformedNumber { reason } => {
                format!("invalid number literal: {reason}")
            }
            LiteralErrorKind::ExponentTooLarge { exponent } => {
                format!("exponent `{exponent}` is too large to evaluate exactly")
            }
            LiteralErrorKind::InvalidHexDigit { digit } => {
                format!("invalid hexadecimal digit `{digit}`")
            }
            LiteralErrorKind::InvalidBool => "invalid boolean literal".to_string(),
        }
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        let diag = Diagnostic::error(ErrorCode::E0003)
            .with_message(self.message())
            .with_label(self.span, "in this literal");
        match self.kind {
            LiteralErrorKind::ExponentTooLarge { .. } => diag.with_note(format!(
                "decimal exponents are limited to +/-{}",
                crate::MAX_DECIMAL_EXPONENT
            )),
            _ => diag,
        }
    }
}
