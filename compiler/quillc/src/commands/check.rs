//! The `check` command: validate suffix declarations and check every `let`
//! item of a Quill source file.

use std::io::Write;

use quill_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use quill_diagnostic::queue::DiagnosticQueue;
use quill_ir::StringInterner;
use quill_parse::parse_source;
use quill_suffix::check_module;

use super::read_file;
use super::CheckCommandOptions;

/// Check a file, printing diagnostics to stderr. Returns `true` on success.
pub fn check_file(path: &str, options: &CheckCommandOptions) -> bool {
    let source = read_file(path);
    let is_tty = std::io::IsTerminal::is_terminal(&std::io::stderr());
    let ok = check_source(&source, path, options, std::io::stderr(), is_tty);
    if ok {
        println!("OK: {path}");
    }
    ok
}

/// Run the whole pipeline over `source`, writing diagnostics to `out`.
///
/// Parse errors do not stop checking: items that parsed are still checked,
/// so the user sees every independent problem in one run.
pub fn check_source<W: Write>(
    source: &str,
    path: &str,
    options: &CheckCommandOptions,
    out: W,
    is_tty: bool,
) -> bool {
    let interner = StringInterner::new();
    let parsed = parse_source(source, &interner);

    let mut queue = DiagnosticQueue::with_config(options.diagnostics.clone());
    for diag in parsed.diagnostics {
        queue.add(diag);
    }

    let checked = check_module(
        &parsed.module,
        &parsed.arena,
        &interner,
        options.check,
        &mut queue,
    );
    if let Ok(module) = &checked {
        tracing::debug!(
            items = module.items.len(),
            rewrites = module.rewrites().count(),
            "module checked"
        );
    }

    let has_errors = queue.has_errors().is_some();
    let error_count = queue.error_count() + queue.suppressed_count();
    let mut emitter = TerminalEmitter::with_color_mode(out, options.color, is_tty)
        .with_source(source)
        .with_file_path(path);
    emitter.emit_all(&queue.flush());
    emitter.emit_summary(error_count);
    emitter.flush();

    !has_errors && checked.is_ok()
}

#[cfg(test)]
mod tests;
