//! # Core Application Logic
//!
//! This module contains the translator's business logic.
//! It knows nothing about terminals or where lines come from.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Code table           │
//!                    │  • Validators           │
//!                    │  • Transcoders          │
//!                    │  • Action + update()    │
//!                    │                         │
//!                    │  No stdin. No stdout.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    REPL    │
//!                         │  Adapter   │
//!                         │ (stdin/out)│
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`code_table`]: the letter ↔ code alphabet and the help listing
//! - [`validate`]: predicates that classify a raw line
//! - [`transcode`]: English ↔ Morse conversion
//! - [`state`]: The `App` struct: session state in one place
//! - [`action`]: The `Action` enum: everything a line can ask for
//! - [`config`]: layered settings (file, env, CLI)

pub mod action;
pub mod code_table;
pub mod config;
pub mod state;
pub mod transcode;
pub mod validate;

// Re-export commonly used types for convenience
pub use code_table::{code_table, format_help_text};
pub use transcode::{
    TranscodeError, clean_english_sentence, decode_character, decode_sentence, encode_character,
    encode_sentence,
};
pub use validate::{is_help_command, is_valid_english_sentence, is_valid_morse_sequence};
