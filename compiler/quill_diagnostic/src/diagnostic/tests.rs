use super::*;

#[test]
fn builder_keeps_label_and_child_order() {
    let diag = Diagnostic::error(ErrorCode::E2002)
        .with_message("ambiguous suffix call")
        .with_label(Span::new(0, 5), "here")
        .with_secondary_label(Span::new(20, 30), "candidate")
        .with_suggestion("call it explicitly")
        .with_note("some context");

    assert_eq!(diag.code, ErrorCode::E2002);
    assert!(diag.is_error());
    assert_eq!(
        diag.labels.iter().map(|l| l.style).collect::<Vec<_>>(),
        vec![LabelStyle::Primary, LabelStyle::Secondary]
    );
    assert_eq!(
        diag.children.iter().map(|c| c.kind).collect::<Vec<_>>(),
        vec![ChildKind::Help, ChildKind::Note]
    );
    assert_eq!(diag.notes().collect::<Vec<_>>(), vec!["some context"]);
    assert_eq!(diag.suggestions().collect::<Vec<_>>(), vec!["call it explicitly"]);
    assert_eq!(diag.primary_span(), Some(Span::new(0, 5)));
}

#[test]
fn primary_span_skips_secondary_labels() {
    let diag = Diagnostic::error(ErrorCode::E2001)
        .with_secondary_label(Span::new(1, 2), "context")
        .with_label(Span::new(7, 9), "here");
    assert_eq!(diag.primary_span(), Some(Span::new(7, 9)));
}

#[test]
fn warning_is_not_error() {
    let diag = Diagnostic::warning(ErrorCode::E2011).with_message("w");
    assert!(!diag.is_error());
    assert_eq!(diag.primary_span(), None);
}

#[test]
fn display_renders_one_block() {
    let diag = Diagnostic::error(ErrorCode::E2001)
        .with_message("no suffix `km` accepts a bool literal")
        .with_label(Span::new(0, 7), "here")
        .with_secondary_label(Span::new(9, 11), "declared here")
        .with_note("a note")
        .with_suggestion("a fix");

    let output = diag.to_string();
    assert!(output.starts_with("error[E2001]: no suffix `km`"));
    assert!(output.contains("--> 0..7: here"));
    assert!(output.contains("... 9..11: declared here"));
    assert!(output.contains("= note: a note"));
    assert!(output.contains("= help: a fix"));
}
