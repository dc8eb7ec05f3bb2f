//! Collecting diagnostics before they are printed.
//!
//! A queue applies the error limit and drops exact repeats as diagnostics
//! arrive, then hands them back ordered by source position. Worker threads
//! each fill their own queue; the driver merges them with
//! [`DiagnosticQueue::extend`] in a fixed order.

use quill_ir::Span;
use rustc_hash::FxHashSet;

use crate::{Diagnostic, ErrorCode, ErrorGuaranteed};

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Errors kept before the rest are only counted. `0` means no limit.
    pub error_limit: usize,
    /// Drop a diagnostic with the same code, primary span, and message as
    /// one already queued.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 20,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    /// Keep everything. Used for per-item queues that are merged later, and
    /// in tests.
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }
}

type SeenKey = (ErrorCode, Option<Span>, String);

#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    config: DiagnosticConfig,
    diagnostics: Vec<Diagnostic>,
    seen: FxHashSet<SeenKey>,
    errors: usize,
    /// Errors dropped by the limit.
    suppressed: usize,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            config,
            ..Self::default()
        }
    }

    /// Queue a diagnostic. Returns `false` if the limit or deduplication
    /// dropped it.
    pub fn add(&mut self, diag: Diagnostic) -> bool {
        let is_error = diag.is_error();
        if is_error && self.limit_reached() {
            self.suppressed += 1;
            return false;
        }
        if self.config.deduplicate {
            let key = (diag.code, diag.primary_span(), diag.message.clone());
            if !self.seen.insert(key) {
                return false;
            }
        }
        if is_error {
            self.errors += 1;
        }
        self.diagnostics.push(diag);
        true
    }

    /// Queue an error and return proof of it.
    ///
    /// The proof holds even if the error is dropped: a dropped error was
    /// either counted as suppressed or repeats one already queued.
    pub fn emit_error(&mut self, diag: Diagnostic) -> ErrorGuaranteed {
        debug_assert!(diag.is_error(), "emit_error called with a non-error");
        self.add(diag);
        ErrorGuaranteed::new_unchecked()
    }

    /// Move `other`'s diagnostics into this queue, keeping their order and
    /// applying this queue's limit and deduplication.
    pub fn extend(&mut self, other: DiagnosticQueue) {
        self.suppressed += other.suppressed;
        for diag in other.diagnostics {
            self.add(diag);
        }
    }

    pub fn limit_reached(&self) -> bool {
        self.config.error_limit != 0 && self.errors >= self.config.error_limit
    }

    /// Errors kept, not counting suppressed ones.
    pub fn error_count(&self) -> usize {
        self.errors
    }

    pub fn suppressed_count(&self) -> usize {
        self.suppressed
    }

    pub fn has_errors(&self) -> Option<ErrorGuaranteed> {
        ErrorGuaranteed::from_error_count(self.errors)
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Take every diagnostic, ordered by primary span start, and reset.
    ///
    /// The sort is stable: diagnostics at the same position stay in the
    /// order they were added. Diagnostics without a primary span go last.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let mut out = std::mem::take(&mut self.diagnostics);
        out.sort_by_key(|diag| diag.primary_span().map_or(u32::MAX, |span| span.start));
        self.seen.clear();
        self.errors = 0;
        self.suppressed = 0;
        out
    }
}

#[cfg(test)]
mod tests;
