//! Tracing subscriber setup for the CLI.
//!
//! Nothing is installed unless `QUILL_LOG` (or, failing that, `RUST_LOG`)
//! is set, so normal runs pay nothing for the instrumentation in the
//! library crates.
//!
//! ```text
//! QUILL_LOG=quill_suffix=trace quillc check tokens.ql
//! ```

use std::sync::Once;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: Once = Once::new();

/// Environment variables consulted for the filter, in order.
const FILTER_VARS: [&str; 2] = ["QUILL_LOG", "RUST_LOG"];

/// Install the hierarchical tracing subscriber. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let Some(filter) = env_filter() else {
            return;
        };
        let tree = tracing_tree::HierarchicalLayer::new(2)
            .with_writer(std::io::stderr)
            .with_targets(true)
            .with_bracketed_fields(true);
        // A subscriber installed by an embedding process wins.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(tree)
            .try_init();
    });
}

fn env_filter() -> Option<EnvFilter> {
    let directives = FILTER_VARS
        .iter()
        .find_map(|var| std::env::var(var).ok())?;
    match EnvFilter::try_new(&directives) {
        Ok(filter) => Some(filter),
        Err(e) => {
            eprintln!("warning: ignoring invalid log filter '{directives}': {e}");
            None
        }
    }
}
