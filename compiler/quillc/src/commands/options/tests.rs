use super::*;
use pretty_assertions::assert_eq;

fn parse(args: &[&str]) -> CheckCommandOptions {
    let args: Vec<String> = args.iter().map(ToString::to_string).collect();
    parse_check_options(&args)
}

#[test]
fn defaults() {
    let options = parse(&["tokens.ql"]);
    assert_eq!(options.path.as_deref(), Some("tokens.ql"));
    assert!(options.check.parallel);
    assert_eq!(options.color, ColorMode::Auto);
    assert_eq!(options.diagnostics, DiagnosticConfig::default());
}

#[test]
fn flags_in_any_position() {
    let options = parse(&["--no-parallel", "tokens.ql", "--color=never", "--error-limit=0"]);
    assert_eq!(options.path.as_deref(), Some("tokens.ql"));
    assert!(!options.check.parallel);
    assert_eq!(options.color, ColorMode::Never);
    assert_eq!(options.diagnostics.error_limit, 0);
}

#[test]
fn invalid_values_keep_defaults() {
    let options = parse(&["--color=sometimes", "--error-limit=lots", "a.ql", "b.ql"]);
    assert_eq!(options.color, ColorMode::Auto);
    assert_eq!(
        options.diagnostics.error_limit,
        DiagnosticConfig::default().error_limit
    );
    assert_eq!(options.path.as_deref(), Some("a.ql"));
}

#[test]
fn missing_path() {
    assert_eq!(parse(&["--no-parallel"]).path, None);
}
