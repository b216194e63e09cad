//! # Code Table
//!
//! The International Morse Code alphabet for the 26 unaccented uppercase
//! Latin letters, plus the help listing rendered from it.
//!
//! ```text
//! CODE_TABLE (const, A..=Z order)
//!   ├── code_table()      Letter → Code   (BTreeMap, alphabetical)
//!   └── inverse_table()   Code   → Letter (HashMap, precomputed)
//! ```
//!
//! Both maps are built once on first use and never mutated afterwards.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

/// Number of help entries printed on each line.
pub const HELP_ENTRIES_PER_LINE: usize = 5;

/// First line of the help listing.
pub const HELP_HEADER: &str = "HELP - International Morse Code List";

/// Letter → code pairs, in alphabetical order.
pub const CODE_TABLE: [(char, &str); 26] = [
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
];

static FORWARD: LazyLock<BTreeMap<char, &'static str>> =
    LazyLock::new(|| CODE_TABLE.iter().copied().collect());

static INVERSE: LazyLock<HashMap<&'static str, char>> = LazyLock::new(|| {
    CODE_TABLE
        .iter()
        .map(|&(letter, code)| (code, letter))
        .collect()
});

/// Returns the letter → code mapping.
pub fn code_table() -> &'static BTreeMap<char, &'static str> {
    LazyLock::force(&FORWARD)
}

/// Returns the code → letter mapping, the inverse of [`code_table`].
pub fn inverse_table() -> &'static HashMap<&'static str, char> {
    LazyLock::force(&INVERSE)
}

/// Renders the help listing: a header line, then every `L: code` pair
/// followed by a tab, with a line break after each fifth pair.
pub fn format_help_text() -> String {
    let mut message = format!("{HELP_HEADER}\n");
    for (count, (letter, code)) in code_table().iter().enumerate() {
        message.push_str(&format!("{letter}: {code}\t"));
        if (count + 1) % HELP_ENTRIES_PER_LINE == 0 {
            message.push('\n');
        }
    }
    message
}
