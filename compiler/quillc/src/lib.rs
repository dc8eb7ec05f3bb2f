//! Quill compiler driver.
//!
//! The binary in `main.rs` dispatches to the command handlers here; they are
//! kept in a library so option parsing and the check pipeline can be tested
//! without spawning a process.

pub mod commands;
pub mod tracing_setup;
