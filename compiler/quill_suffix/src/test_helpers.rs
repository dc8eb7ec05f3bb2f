//! Shared fixtures for unit tests.

use quill_diagnostic::queue::{DiagnosticConfig, DiagnosticQueue};
use quill_diagnostic::{Diagnostic, ErrorCode};
use quill_ir::{ExprKind, StringInterner};
use quill_literal::{classify, Literal};
use quill_parse::{parse_source, ParseOutput};

use crate::SuffixTable;

/// A parsed source with its suffix table.
pub struct Fixture {
    pub interner: StringInterner,
    pub parsed: ParseOutput,
    pub table: SuffixTable,
    pub table_diagnostics: Vec<Diagnostic>,
}

impl Fixture {
    pub fn new(source: &str) -> Self {
        let interner = StringInterner::new();
        let parsed = parse_source(source, &interner);
        assert!(
            parsed.diagnostics.is_empty(),
            "fixture does not parse: {:#?}",
            parsed.diagnostics
        );
        let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
        let table = SuffixTable::build(&parsed.module.functions, &interner, &mut queue);
        Fixture {
            interner,
            parsed,
            table,
            table_diagnostics: queue.flush(),
        }
    }

    pub fn table_codes(&self) -> Vec<ErrorCode> {
        self.table_diagnostics.iter().map(|d| d.code).collect()
    }

    pub fn name(&self, text: &str) -> quill_ir::Name {
        self.interner.intern(text)
    }
}

/// Lex and classify a single literal.
pub fn literal(source: &str) -> Literal {
    let interner = StringInterner::new();
    let parsed = parse_source(&format!("let x = {source};"), &interner);
    assert!(parsed.diagnostics.is_empty(), "{:#?}", parsed.diagnostics);
    let expr = parsed.module.lets[0].expr;
    match parsed.arena.kind(expr) {
        ExprKind::Literal(token) => classify(token).unwrap_or_else(|e| panic!("{e:?}")),
        other => panic!("`{source}` is not a literal: {other:?}"),
    }
}
