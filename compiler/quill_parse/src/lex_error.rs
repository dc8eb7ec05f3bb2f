//! Lexer error types.
//!
//! Errors follow the WHERE+WHAT+HOW shape:
//! - WHERE: `span` locating the error in source
//! - WHAT: `kind` describing what went wrong
//! - HOW: `suggestions` providing actionable fixes

use quill_diagnostic::{Diagnostic, ErrorCode};
use quill_ir::Span;

/// A lexer error with context for diagnostic rendering.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    /// WHERE the error occurred.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// HOW to fix.
    pub suggestions: Vec<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    // === String Errors ===
    /// Missing closing quote.
    UnterminatedString,
    /// `/*` without `*/`.
    UnterminatedComment,
    /// Unknown escape such as `\q`.
    InvalidEscape { escape_char: char },
    /// `\x` or `\u` without enough hex digits.
    MalformedEscape,
    /// Non-ASCII character in a plain string literal.
    NonAsciiInString { found: char },
    /// `hex"..."` with an odd digit count, a stray separator, or a non-hex
    /// character.
    InvalidHexString { reason: &'static str },

    // === Numeric Errors ===
    /// `5ether`: an identifier glued to a number.
    IdentifierAfterNumber,

    // === Character Errors ===
    /// Character that starts no token.
    InvalidCharacter { found: char },
}

impl LexError {
    #[cold]
    pub fn new(span: Span, kind: LexErrorKind) -> Self {
        LexError {
            span,
            kind,
            suggestions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    #[cold]
    pub fn unterminated_string(span: Span) -> Self {
        Self::new(span, LexErrorKind::UnterminatedString)
            .with_suggestion("add a closing quote on the same line")
    }

    #[cold]
    pub fn identifier_after_number(span: Span) -> Self {
        Self::new(span, LexErrorKind::IdentifierAfterNumber)
            .with_suggestion("separate the number and the suffix with a space")
    }

    #[cold]
    pub fn non_ascii_in_string(span: Span, found: char) -> Self {
        Self::new(span, LexErrorKind::NonAsciiInString { found })
            .with_suggestion("use a `unicode\"...\"` literal for non-ASCII text")
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnterminatedString | LexErrorKind::UnterminatedComment => {
                ErrorCode::E0001
            }
            LexErrorKind::InvalidCharacter { .. } | LexErrorKind::NonAsciiInString { .. } => {
                ErrorCode::E0002
            }
            LexErrorKind::IdentifierAfterNumber => ErrorCode::E0004,
            LexErrorKind::InvalidEscape { .. }
            | LexErrorKind::MalformedEscape
            | LexErrorKind::InvalidHexString { .. } => ErrorCode::E0005,
        }
    }

    pub fn message(&self) -> String {
        match &self.kind {
            LexErrorKind::UnterminatedString => "unterminated string literal".to_string(),
            LexErrorKind::UnterminatedComment => "unterminated block comment".to_string(),
            LexErrorKind::InvalidEscape { escape_char } => {
                format!("unknown escape sequence `\\{escape_char}`")
            }
            LexErrorKind::MalformedEscape => "malformed escape sequence".to_string(),
            LexErrorKind::NonAsciiInString { found } => {
                format!("non-ASCII character `{found}` in string literal")
            }
            LexErrorKind::InvalidHexString { reason } => {
                format!("invalid hex string: {reason}")
            }
            LexErrorKind::IdentifierAfterNumber => {
                "identifier directly follows a number literal".to_string()
            }
            LexErrorKind::InvalidCharacter { found } => {
                format!("invalid character `{}`", found.escape_default())
            }
        }
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code())
            .with_message(self.message())
            .with_label(self.span, "here");
        for suggestion in self.suggestions {
            diag = diag.with_suggestion(suggestion);
        }
        diag
    }
}
