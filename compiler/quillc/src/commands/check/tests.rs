use super::*;
use pretty_assertions::assert_eq;
use quill_diagnostic::emitter::ColorMode;

fn run(source: &str, options: &CheckCommandOptions) -> (bool, String) {
    let mut out = Vec::new();
    let ok = check_source(source, "test.ql", options, &mut out, false);
    (ok, String::from_utf8(out).unwrap_or_default())
}

fn plain() -> CheckCommandOptions {
    CheckCommandOptions {
        color: ColorMode::Never,
        ..CheckCommandOptions::default()
    }
}

#[test]
fn clean_source_prints_nothing() {
    let (ok, output) = run(
        "function gwei(uint m, uint8 e) pure suffix returns (uint);
         let price = 1.5 gwei;",
        &plain(),
    );
    assert!(ok);
    assert_eq!(output, "");
}

#[test]
fn errors_are_rendered_with_codes_and_summary() {
    let (ok, output) = run(
        "function small(uint8 x) pure suffix returns (uint8);
         let a = 256 small;",
        &plain(),
    );
    assert!(!ok);
    assert!(output.contains("[E2004]"), "{output}");
    assert!(output.contains("test.ql:2:"), "{output}");
    assert!(output.contains("aborting due to previous error"), "{output}");
    assert!(!output.contains('\x1b'));
}

#[test]
fn parse_errors_do_not_hide_check_errors() {
    let (ok, output) = run(
        "function w(uint x) pure suffix returns (uint);
         let a = ;
         let b = 1.5 w;",
        &plain(),
    );
    assert!(!ok);
    assert!(output.contains("[E1002]"), "{output}");
    assert!(output.contains("[E2003]"), "{output}");
    assert!(output.contains("aborting due to 2 previous errors"), "{output}");
}

#[test]
fn error_limit_counts_suppressed_errors() {
    let mut options = plain();
    options.diagnostics.error_limit = 1;
    let (ok, output) = run(
        "function w(uint x) pure suffix returns (uint);
         let a = 1.5 w;
         let b = 2.5 w;
         let c = 3.5 w;",
        &options,
    );
    assert!(!ok);
    assert_eq!(output.matches("[E2003]").count(), 1);
    assert!(output.contains("aborting due to 3 previous errors"), "{output}");
}

#[test]
fn sequential_and_parallel_output_match() {
    let source = "function w(uint x) pure suffix returns (uint);
         function w(uint8 x) pure suffix returns (uint8);
         let a = 1 w;
         let b = w(1) w;
         let c = -1 w;";
    let mut sequential = plain();
    sequential.check.parallel = false;
    assert_eq!(run(source, &sequential), run(source, &plain()));
}
