//! Option parsing for `quillc check`.

use quill_diagnostic::emitter::ColorMode;
use quill_diagnostic::queue::DiagnosticConfig;
use quill_suffix::CheckOptions;

/// Parsed arguments of `quillc check`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckCommandOptions {
    pub path: Option<String>,
    pub check: CheckOptions,
    pub color: ColorMode,
    pub diagnostics: DiagnosticConfig,
}

/// Parse the arguments following `check`.
///
/// Unknown or malformed flags produce a warning and keep the default.
pub fn parse_check_options(args: &[String]) -> CheckCommandOptions {
    let mut options = CheckCommandOptions::default();

    for arg in args {
        if arg == "--no-parallel" {
            options.check.parallel = false;
        } else if let Some(mode) = arg.strip_prefix("--color=") {
            if let Some(color) = ColorMode::from_flag(mode) {
                options.color = color;
            } else {
                eprintln!("warning: unknown color mode '{mode}', options: auto, always, never");
            }
        } else if let Some(limit) = arg.strip_prefix("--error-limit=") {
            match limit.parse::<usize>() {
                Ok(limit) => options.diagnostics.error_limit = limit,
                Err(_) => eprintln!("warning: invalid error limit '{limit}', using default"),
            }
        } else if arg.starts_with('-') {
            eprintln!("warning: unknown option '{arg}'");
        } else if options.path.is_none() {
            options.path = Some(arg.clone());
        } else {
            eprintln!("warning: ignoring extra argument '{arg}'");
        }
    }

    options
}

#[cfg(test)]
mod tests;
