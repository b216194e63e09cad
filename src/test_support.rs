//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::io::Cursor;

use crate::core::state::App;
use crate::repl::run_session;

/// Creates a test App with a short prompt.
pub fn test_app() -> App {
    App::new("> ".to_string())
}

/// Runs a whole session over `input` and returns everything written.
pub fn transcript(app: &mut App, input: &str) -> String {
    let mut output = Vec::new();
    run_session(app, Cursor::new(input.as_bytes()), &mut output).expect("in-memory session");
    String::from_utf8(output).expect("session output is UTF-8")
}
