//! # Actions
//!
//! Every line the user types becomes an `Action`.
//! `"0"`? That's `Action::Exit`. `"... --- ..."`? That's `Action::Decode`.
//!
//! The `update()` function takes the current state and an action, records
//! the outcome on the state, and returns the `Effect` the adapter should
//! carry out. No I/O happens here.
//!
//! ```text
//! line ──classify()──▶ Action ──update(&mut App)──▶ Effect
//! ```
//!
//! Classification order matters: exit, help, English, Morse, invalid.
//! A line that could pass more than one check takes the first match.

use log::{debug, error, info};

use crate::core::code_table::format_help_text;
use crate::core::state::App;
use crate::core::transcode::{decode_sentence, encode_sentence};
use crate::core::validate::{is_help_command, is_valid_english_sentence, is_valid_morse_sequence};

/// Exact input that ends the session. Not trimmed, not case-folded.
pub const EXIT_SENTINEL: &str = "0";

pub const BANNER: &str = "Morse Code Program!!";
pub const WRONG_INPUT: &str = "Wrong Input";
pub const FAREWELL: [&str; 2] = ["Good Bye", "Morse Code Program Finished!!"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The exit sentinel was entered.
    Exit,
    /// The input stream closed before the exit sentinel.
    EndOfInput,
    Help,
    Encode(String),
    Decode(String),
    Invalid(String),
}

impl Action {
    /// Classifies one input line, without its line terminator.
    pub fn classify(line: &str) -> Action {
        if line == EXIT_SENTINEL {
            Action::Exit
        } else if is_help_command(line) {
            Action::Help
        } else if is_valid_english_sentence(line) {
            Action::Encode(line.to_string())
        } else if is_valid_morse_sequence(line) {
            Action::Decode(line.to_string())
        } else {
            Action::Invalid(line.to_string())
        }
    }
}

/// What the adapter should do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Print this text followed by a newline, then prompt again.
    Reply(String),
    /// Stop reading and say goodbye.
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("Action: {:?}", action);
    match action {
        Action::Exit | Action::EndOfInput => {
            app.running = false;
            Effect::Quit
        }
        Action::Help => {
            app.stats.help += 1;
            Effect::Reply(format_help_text())
        }
        Action::Encode(text) => {
            app.stats.encoded += 1;
            Effect::Reply(encode_sentence(&text))
        }
        Action::Decode(morse) => match decode_sentence(&morse) {
            Ok(text) => {
                app.stats.decoded += 1;
                Effect::Reply(text)
            }
            Err(e) => {
                // Unreachable after is_valid_morse_sequence; report it like any bad line.
                error!("Validated Morse failed to decode: {}", e);
                app.stats.invalid += 1;
                Effect::Reply(WRONG_INPUT.to_string())
            }
        },
        Action::Invalid(line) => {
            info!("Rejected input: {:?}", line);
            app.stats.invalid += 1;
            Effect::Reply(WRONG_INPUT.to_string())
        }
    }
}
