//! Quill Compiler CLI

use quillc::commands::{check_file, explain_error, parse_check_options};
use quillc::tracing_setup::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "check" => {
            let options = parse_check_options(&args[2..]);
            let Some(path) = options.path.as_deref() else {
                eprintln!("error: missing file path");
                eprintln!("Usage: quillc check <file.ql> [options]");
                std::process::exit(1);
            };
            if !check_file(path, &options) {
                std::process::exit(1);
            }
        }
        "explain" | "--explain" => {
            if args.len() < 3 {
                eprintln!("Usage: quillc explain <ERROR_CODE>");
                eprintln!("Example: quillc explain E2002");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("Quill Compiler {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Quill Compiler");
    println!();
    println!("Usage: quillc <command> [options]");
    println!();
    println!("Commands:");
    println!("  check <file.ql>      Check declarations and literal suffix calls");
    println!("  explain <code>       Explain an error code (e.g., E2002)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Check options:");
    println!("  --no-parallel        Check items on the current thread only");
    println!("  --color=<mode>       Colored output: auto, always, never");
    println!("  --error-limit=<n>    Stop reporting after n errors (0 = no limit)");
    println!();
    println!("Environment:");
    println!("  QUILL_LOG            Tracing filter, e.g. quill_suffix=trace (falls back to RUST_LOG)");
}
