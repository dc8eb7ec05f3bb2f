//! The `explain` command: display documentation for compiler error codes.

use quill_diagnostic::ErrorCode;

/// Render the explanation of a code, or `None` for an unknown code.
pub fn explanation(code_str: &str) -> Option<String> {
    let code = code_str.trim().parse::<ErrorCode>().ok()?;
    Some(format!("{code}: {}", code.explanation()))
}

/// Display detailed documentation for a given error code string.
pub fn explain_error(code_str: &str) {
    let Some(text) = explanation(code_str) else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX where X is a digit.");
        eprintln!("Examples: E0003, E1001, E2002");
        std::process::exit(1);
    };
    println!("{text}");
}

#[cfg(test)]
mod tests;
