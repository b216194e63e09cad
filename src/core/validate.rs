//! # Validators
//!
//! Pure predicates that classify a raw input line. None of them trim the
//! input first: `"Help "` is not a help command.

use unicode_general_category::{GeneralCategory, get_general_category};

use crate::core::code_table::inverse_table;
use crate::core::transcode::{PUNCTUATION_MARKS, is_blank};

/// Symbols that disqualify a line from being an English sentence.
pub const FORBIDDEN_SYMBOLS: &str = "_@#$%^&*()-+=[]{}\"';:\\|`~";

/// True iff the input, uppercased, is exactly `H` or `HELP`.
pub fn is_help_command(input: &str) -> bool {
    let upper = input.to_uppercase();
    upper == "H" || upper == "HELP"
}

/// True iff the input can be encoded as Morse.
///
/// Rejects decimal digits (Unicode category Nd) and [`FORBIDDEN_SYMBOLS`],
/// then requires something other than whitespace to remain once `.,!?`
/// are removed. Other numerals such as `²`, `½` or `Ⅻ` are allowed.
pub fn is_valid_english_sentence(input: &str) -> bool {
    if input.chars().any(is_decimal_digit) {
        return false;
    }
    if input.chars().any(|c| FORBIDDEN_SYMBOLS.contains(c)) {
        return false;
    }
    input
        .chars()
        .any(|c| !PUNCTUATION_MARKS.contains(&c) && !is_blank(c))
}

fn is_decimal_digit(c: char) -> bool {
    get_general_category(c) == GeneralCategory::DecimalNumber
}

/// True iff the input is a non-empty sequence of known Morse codes.
///
/// Only `.`, `-` and space may appear, and every whitespace-separated
/// token must match a table entry exactly. A blank line is not a Morse
/// sequence.
pub fn is_valid_morse_sequence(input: &str) -> bool {
    if input.chars().any(|c| !matches!(c, '.' | '-' | ' ')) {
        return false;
    }
    let mut tokens = input.split_whitespace().peekable();
    if tokens.peek().is_none() {
        return false;
    }
    tokens.all(|token| inverse_table().contains_key(token))
}
