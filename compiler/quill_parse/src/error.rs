//! Parse error types.

use quill_diagnostic::{Diagnostic, ErrorCode};
use quill_ir::Span;

use crate::TokenKind;

/// What was being parsed when an error occurred.
///
/// Rendered as "while parsing {description}" notes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    FunctionDef,
    FunctionParams,
    TypeAnnotation,
    LetItem,
    Expression,
    FunctionCall,
}

impl ErrorContext {
    /// Returns a phrase suitable for "while parsing {description}".
    pub fn description(self) -> &'static str {
        match self {
            Self::FunctionDef => "a function declaration",
            Self::FunctionParams => "function parameters",
            Self::TypeAnnotation => "a type",
            Self::LetItem => "a `let` item",
            Self::Expression => "an expression",
            Self::FunctionCall => "a function call",
        }
    }
}

/// Parse error with error code for rich diagnostics.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseError {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
    /// Location of the error.
    pub span: Span,
    /// Label text at the error location.
    pub context: Option<String>,
    /// Help messages.
    pub help: Vec<String>,
}

impl ParseError {
    /// Create a new parse error.
    #[cold]
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
            context: None,
            help: Vec::new(),
        }
    }

    /// `expected X, found Y`.
    #[cold]
    pub fn unexpected(expected: &str, found: &TokenKind, span: Span) -> Self {
        ParseError::new(
            ErrorCode::E1001,
            format!("expected {expected}, found {}", found.display_name()),
            span,
        )
    }

    #[cold]
    pub fn expected_expression(found: &TokenKind, span: Span) -> Self {
        ParseError::new(
            ErrorCode::E1002,
            format!("expected expression, found {}", found.display_name()),
            span,
        )
    }

    /// Add label text for the error location.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help.push(help.into());
        self
    }

    /// Record what was being parsed, unless an inner rule already did.
    #[must_use]
    pub fn in_context(self, context: ErrorContext) -> Self {
        if self.context.is_some() {
            return self;
        }
        self.with_context(format!("while parsing {}", context.description()))
    }

    /// Convert to a full Diagnostic for rich error reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code)
            .with_message(&self.message)
            .with_label(self.span, self.context.as_deref().unwrap_or("here"));

        for help in &self.help {
            diag = diag.with_suggestion(help);
        }

        diag
    }
}
