//! The [`Diagnostic`] type and its parts.
//!
//! A diagnostic is one error or warning: a code, a headline, any number of
//! labeled spans, and trailing `note:` / `help:` lines.

use quill_ir::Span;
use std::fmt;

use crate::ErrorCode;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a label marks the offending code or only related context.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LabelStyle {
    Primary,
    Secondary,
}

/// A span with a short message attached.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
    pub style: LabelStyle,
}

impl Label {
    #[inline]
    pub fn is_primary(&self) -> bool {
        self.style == LabelStyle::Primary
    }
}

/// Kind of a trailing line.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ChildKind {
    /// Extra context: `= note: ...`.
    Note,
    /// How to fix it: `= help: ...`.
    Help,
}

impl ChildKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            ChildKind::Note => "note",
            ChildKind::Help => "help",
        }
    }
}

/// A `note:` or `help:` line below the labels.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Child {
    pub kind: ChildKind,
    pub message: String,
}

/// One reported problem.
///
/// Built with the `with_*` methods; children render in the order added.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "a diagnostic does nothing until it is added to a queue"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    pub labels: Vec<Label>,
    pub children: Vec<Child>,
}

impl Diagnostic {
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Self::new(code, Severity::Error)
    }

    #[cold]
    pub fn warning(code: ErrorCode) -> Self {
        Self::new(code, Severity::Warning)
    }

    const fn new(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            labels: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Label the offending code. The first primary label decides where the
    /// diagnostic sorts.
    pub fn with_label(self, span: Span, message: impl Into<String>) -> Self {
        self.label(span, message.into(), LabelStyle::Primary)
    }

    /// Point at related code, such as a candidate declaration.
    pub fn with_secondary_label(self, span: Span, message: impl Into<String>) -> Self {
        self.label(span, message.into(), LabelStyle::Secondary)
    }

    pub fn with_note(self, note: impl Into<String>) -> Self {
        self.child(ChildKind::Note, note.into())
    }

    pub fn with_suggestion(self, suggestion: impl Into<String>) -> Self {
        self.child(ChildKind::Help, suggestion.into())
    }

    fn label(mut self, span: Span, message: String, style: LabelStyle) -> Self {
        self.labels.push(Label {
            span,
            message,
            style,
        });
        self
    }

    fn child(mut self, kind: ChildKind, message: String) -> Self {
        self.children.push(Child { kind, message });
        self
    }

    pub fn primary_span(&self) -> Option<Span> {
        self.labels
            .iter()
            .find(|label| label.is_primary())
            .map(|label| label.span)
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// `note:` lines, in order.
    pub fn notes(&self) -> impl Iterator<Item = &str> {
        self.children_of(ChildKind::Note)
    }

    /// `help:` lines, in order.
    pub fn suggestions(&self) -> impl Iterator<Item = &str> {
        self.children_of(ChildKind::Help)
    }

    fn children_of(&self, kind: ChildKind) -> impl Iterator<Item = &str> {
        self.children
            .iter()
            .filter(move |child| child.kind == kind)
            .map(|child| child.message.as_str())
    }
}

/// Plain one-block rendering, without source context. The terminal emitter
/// is the richer form.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)?;
        for label in &self.labels {
            let marker = match label.style {
                LabelStyle::Primary => "-->",
                LabelStyle::Secondary => "...",
            };
            write!(f, "\n  {marker} {:?}: {}", label.span, label.message)?;
        }
        for child in &self.children {
            write!(f, "\n  = {}: {}", child.kind.as_str(), child.message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
