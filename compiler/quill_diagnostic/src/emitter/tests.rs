#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::ErrorCode;
use quill_ir::Span;

fn sample_diagnostic() -> Diagnostic {
    Diagnostic::error(ErrorCode::E2002)
        .with_message("ambiguous suffix call `5 gwei`")
        .with_label(Span::new(8, 14), "matches 2 suffix functions")
        .with_secondary_label(Span::new(0, 3), "candidate declared here")
        .with_note("compact suffix calls never choose between overloads")
        .with_suggestion("call it explicitly: `gwei(5)`")
}

fn render(diag: &Diagnostic, colors: ColorMode, source: Option<&str>) -> String {
    let mut output = Vec::new();
    {
        let mut emitter = TerminalEmitter::with_color_mode(&mut output, colors, false);
        if let Some(source) = source {
            emitter = emitter.with_source(source).with_file_path("main.ql");
        }
        emitter.emit(diag);
        emitter.flush();
    }
    String::from_utf8(output).unwrap()
}

#[test]
fn plain_output_has_all_parts() {
    let text = render(&sample_diagnostic(), ColorMode::Never, None);
    assert!(text.starts_with("error[E2002]: ambiguous suffix call"));
    assert!(text.contains("--> 8..14: matches 2 suffix functions"));
    assert!(text.contains("note: compact suffix calls"));
    assert!(text.contains("help: call it explicitly"));
    assert!(!text.contains("\x1b["));
}

#[test]
fn colored_output_has_escape_codes() {
    let text = render(&sample_diagnostic(), ColorMode::Always, None);
    assert!(text.contains("\x1b["));
    assert!(text.contains("E2002"));
}

#[test]
fn source_rendering_shows_line_and_carets() {
    let source = "fn x\nlet a = 5 gwei;\n";
    let diag = Diagnostic::error(ErrorCode::E2002)
        .with_message("ambiguous")
        .with_label(Span::new(13, 19), "here");
    let text = render(&diag, ColorMode::Never, Some(source));
    assert!(text.contains("main.ql:2:9: here"));
    assert!(text.contains("     | let a = 5 gwei;"));
    assert!(text.contains(&format!("     | {}^^^^^^", " ".repeat(8))));
}

#[test]
fn line_index_counts_from_one() {
    let lines = LineIndex::new("ab\ncd\n");
    assert_eq!(lines.line_col(0), (1, 1));
    assert_eq!(lines.line_col(1), (1, 2));
    assert_eq!(lines.line_col(3), (2, 1));
    assert_eq!(lines.line_col(100), (3, 1));
}

#[test]
fn line_index_counts_chars_not_bytes() {
    let lines = LineIndex::new("let s = \"\u{e9}\u{e9}\" x;");
    // `x` is at byte 15 but char column 14.
    assert_eq!(lines.line_col(15), (1, 14));
}

#[test]
fn file_path_needs_source() {
    let diag = Diagnostic::error(ErrorCode::E2001).with_label(Span::new(0, 1), "here");
    let mut output = Vec::new();
    {
        let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false)
            .with_file_path("ignored.ql")
            .with_source("x");
        emitter.emit(&diag);
    }
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("<input>:1:1: here"));
}

#[test]
fn summary_pluralizes() {
    let mut output = Vec::new();
    {
        let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);
        emitter.emit_summary(1);
        emitter.emit_summary(3);
        emitter.emit_summary(0);
    }
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("aborting due to previous error\n"));
    assert!(text.contains("aborting due to 3 previous errors"));
}

#[test]
fn color_mode_flags() {
    assert_eq!(ColorMode::from_flag("always"), Some(ColorMode::Always));
    assert_eq!(ColorMode::from_flag("sometimes"), None);
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
    assert_eq!(ColorMode::default(), ColorMode::Auto);
}
