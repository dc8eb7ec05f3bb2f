use super::*;
use crate::ErrorCode;
use pretty_assertions::assert_eq;
use quill_ir::Span;

fn err(code: ErrorCode, start: u32, msg: &str) -> Diagnostic {
    Diagnostic::error(code)
        .with_message(msg)
        .with_label(Span::new(start, start + 1), "here")
}

#[test]
fn flush_sorts_by_position() {
    let mut queue = DiagnosticQueue::new();
    queue.add(err(ErrorCode::E2001, 30, "late"));
    queue.add(err(ErrorCode::E2002, 5, "early"));
    queue.add(Diagnostic::error(ErrorCode::E2003).with_message("no span"));

    let messages: Vec<String> = queue.flush().into_iter().map(|d| d.message).collect();
    assert_eq!(messages, vec!["early", "late", "no span"]);
    assert_eq!(queue.error_count(), 0);
}

#[test]
fn duplicates_are_dropped() {
    let mut queue = DiagnosticQueue::new();
    assert!(queue.add(err(ErrorCode::E2002, 3, "ambiguous")));
    assert!(!queue.add(err(ErrorCode::E2002, 3, "ambiguous")));
    assert!(queue.add(err(ErrorCode::E2002, 9, "ambiguous")));
    assert_eq!(queue.error_count(), 2);
}

#[test]
fn unlimited_config_keeps_duplicates() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    queue.add(err(ErrorCode::E2002, 3, "ambiguous"));
    queue.add(err(ErrorCode::E2002, 3, "ambiguous"));
    assert_eq!(queue.error_count(), 2);
}

#[test]
fn error_limit_suppresses_extra_errors() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig {
        error_limit: 2,
        deduplicate: true,
    });
    for i in 0..5 {
        queue.add(err(ErrorCode::E2004, i * 10, "out of range"));
    }
    assert!(queue.limit_reached());
    assert_eq!(queue.error_count(), 2);
    assert_eq!(queue.suppressed_count(), 3);
}

#[test]
fn emit_error_gives_guarantee() {
    let mut queue = DiagnosticQueue::new();
    assert!(queue.has_errors().is_none());
    let _guarantee = queue.emit_error(err(ErrorCode::E2006, 0, "not a literal"));
    assert!(queue.has_errors().is_some());
}

#[test]
fn extend_merges_worker_queues() {
    let mut main = DiagnosticQueue::new();
    let mut worker = DiagnosticQueue::new();
    worker.add(err(ErrorCode::E2001, 4, "a"));
    worker.add(err(ErrorCode::E2001, 8, "b"));
    main.add(err(ErrorCode::E2001, 4, "a"));
    main.extend(worker);
    assert_eq!(main.error_count(), 2);
}
