//! Command handlers for the Quill compiler CLI.
//!
//! Shared utilities like `read_file` live here in the module root.

mod check;
mod explain;
mod options;

pub use check::{check_file, check_source};
pub use explain::{explain_error, explanation};
pub use options::{parse_check_options, CheckCommandOptions};

/// Largest source file accepted. Spans are `u32` byte offsets.
const MAX_SOURCE_LEN: usize = u32::MAX as usize;

/// Read a source file, exiting with a message on failure.
pub(crate) fn read_file(path: &str) -> String {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    };
    if content.len() > MAX_SOURCE_LEN {
        eprintln!("'{path}' is too large: source files are limited to 4 GiB");
        std::process::exit(1);
    }
    content
}
