//! # Transcoders
//!
//! Conversions between English and Morse at character and sentence level.
//!
//! ```text
//! "HI! Fine"  ──clean──▶ "HI Fine" ──upper──▶ ["HI", "FINE"]
//!             ──encode──▶ ".... ..  ..-. .. -. ."
//!                          └ letters: one space, words: two spaces
//! ```
//!
//! `decode_sentence` is the inverse up to case and punctuation: it splits on
//! single spaces, so each empty token between two spaces becomes a space.

use std::fmt;

use crate::core::code_table::{code_table, inverse_table};

/// Punctuation removed from English input before encoding.
pub const PUNCTUATION_MARKS: [char; 4] = ['.', ',', '!', '?'];

/// Whitespace for trimming and word splitting: Unicode `White_Space` plus
/// the ASCII information separators U+001C..=U+001F.
pub fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Lookup failures for input that bypassed the validators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscodeError {
    /// The character has no Morse code (not an uppercase A–Z letter).
    UnknownLetter(char),
    /// The token matches no Morse code in the table.
    UnknownCode(String),
}

impl fmt::Display for TranscodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscodeError::UnknownLetter(c) => write!(f, "no Morse code for {c:?}"),
            TranscodeError::UnknownCode(code) => write!(f, "unknown Morse code {code:?}"),
        }
    }
}

impl std::error::Error for TranscodeError {}

/// Trims the sentence, then drops every `.`, `,`, `!` and `?` in it.
///
/// Trimming happens first, so whitespace uncovered by removing outer
/// punctuation stays: `" x ,"` cleans to `"x "`, and only a second pass
/// gives `"x"`.
pub fn clean_english_sentence(raw: &str) -> String {
    raw.trim_matches(is_blank)
        .chars()
        .filter(|c| !PUNCTUATION_MARKS.contains(c))
        .collect()
}

/// Looks up the code for an uppercase letter.
pub fn encode_character(letter: char) -> Result<&'static str, TranscodeError> {
    code_table()
        .get(&letter)
        .copied()
        .ok_or(TranscodeError::UnknownLetter(letter))
}

/// Looks up the letter for a code. `None` when the code is not in the table.
pub fn decode_character(code: &str) -> Option<char> {
    inverse_table().get(code).copied()
}

/// Encodes an English sentence.
///
/// Characters without a code (anything left over after cleaning and
/// uppercasing that is not A–Z) are skipped rather than reported; callers
/// are expected to have run `is_valid_english_sentence` first.
pub fn encode_sentence(raw: &str) -> String {
    let cleaned = clean_english_sentence(raw).to_uppercase();
    let mut result = String::new();
    for word in cleaned.split(is_blank).filter(|w| !w.is_empty()) {
        for code in word.chars().filter_map(|c| encode_character(c).ok()) {
            result.push(' ');
            result.push_str(code);
        }
        result.push(' ');
    }
    result.trim().to_string()
}

/// Decodes a Morse sentence.
///
/// Tokens are separated by single spaces. An empty token (from two
/// adjacent spaces) decodes to a space, so `"..  .."` becomes `"I I"`.
pub fn decode_sentence(morse: &str) -> Result<String, TranscodeError> {
    morse
        .split(' ')
        .map(|token| {
            if token.is_empty() {
                Ok(' ')
            } else {
                decode_character(token).ok_or_else(|| TranscodeError::UnknownCode(token.to_string()))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::code_table::CODE_TABLE;

    #[test]
    fn test_clean_strips_outer_whitespace_and_punctuation() {
        assert_eq!(clean_english_sentence("This is Gachon!!"), "This is Gachon");
        assert_eq!(clean_english_sentence("Is this Gachon?"), "Is this Gachon");
        assert_eq!(
            clean_english_sentence("Fine, Thank you. and you?"),
            "Fine Thank you and you"
        );
        assert_eq!(clean_english_sentence("  spaced out  "), "spaced out");
    }

    #[test]
    fn test_clean_joins_around_interior_punctuation() {
        assert_eq!(clean_english_sentence("e.g.,this"), "egthis");
    }

    #[test]
    fn test_clean_is_idempotent_without_punctuation_beside_outer_blanks() {
        for s in ["", " . ", "Hi! Hi!", "a . b", "What??", "\t.tab.\t", "  x  "] {
            let once = clean_english_sentence(s);
            assert_eq!(clean_english_sentence(&once), once, "input {s:?}");
        }
    }

    #[test]
    fn test_clean_keeps_blanks_uncovered_by_punctuation() {
        assert_eq!(clean_english_sentence(" x ,"), "x ");
        assert_eq!(clean_english_sentence("x ,"), "x ");
        assert_eq!(clean_english_sentence("? x"), " x");
        assert_eq!(clean_english_sentence(&clean_english_sentence(" x ,")), "x");
    }

    #[test]
    fn test_information_separators_are_blank() {
        assert!(is_blank('\u{1c}'));
        assert!(is_blank('\u{1f}'));
        assert!(is_blank(' '));
        assert!(!is_blank('\u{1b}'));
        assert_eq!(clean_english_sentence("\u{1f}sos\u{1e}"), "sos");
        assert_eq!(encode_sentence("e\u{1d}e"), ".  .");
    }

    #[test]
    fn test_encode_character() {
        assert_eq!(encode_character('G'), Ok("--."));
        assert_eq!(encode_character('A'), Ok(".-"));
        assert_eq!(encode_character('C'), Ok("-.-."));
        assert_eq!(encode_character('N'), Ok("-."));
    }

    #[test]
    fn test_encode_character_rejects_non_letters() {
        assert_eq!(encode_character('a'), Err(TranscodeError::UnknownLetter('a')));
        assert_eq!(encode_character('1'), Err(TranscodeError::UnknownLetter('1')));
    }

    #[test]
    fn test_decode_character() {
        assert_eq!(decode_character("-"), Some('T'));
        assert_eq!(decode_character("."), Some('E'));
        assert_eq!(decode_character("..."), Some('S'));
        assert_eq!(decode_character("-.-"), Some('K'));
        assert_eq!(decode_character("......"), None);
        assert_eq!(decode_character(""), None);
    }

    #[test]
    fn test_character_transcoding_is_bijective() {
        for (letter, code) in CODE_TABLE {
            assert_eq!(decode_character(encode_character(letter).unwrap()), Some(letter));
            assert_eq!(encode_character(decode_character(code).unwrap()), Ok(code));
        }
    }

    #[test]
    fn test_encode_sentence() {
        assert_eq!(
            encode_sentence("HI! Fine, Thank you."),
            ".... ..  ..-. .. -. .  - .... .- -. -.-  -.-- --- ..-"
        );
        assert_eq!(
            encode_sentence("We Are Gachon"),
            ".-- .  .- .-. .  --. .- -.-. .... --- -."
        );
        assert_eq!(encode_sentence("Hi! Hi!"), ".... ..  .... ..");
    }

    #[test]
    fn test_encode_sentence_collapses_whitespace_runs() {
        assert_eq!(encode_sentence("  sos \t sos "), "... --- ...  ... --- ...");
    }

    #[test]
    fn test_encode_sentence_skips_unencodable_characters() {
        assert_eq!(encode_sentence("café"), "-.-. .- ..-.");
        assert_eq!(encode_sentence("ü"), "");
    }

    #[test]
    fn test_decode_sentence() {
        assert_eq!(decode_sentence("... --- ..."), Ok("SOS".to_string()));
        assert_eq!(
            decode_sentence("--. .- -.-. .... --- -."),
            Ok("GACHON".to_string())
        );
        assert_eq!(
            decode_sentence("..  .-.. --- ...- .  -.-- --- ..-"),
            Ok("I LOVE YOU".to_string())
        );
    }

    #[test]
    fn test_decode_sentence_keeps_every_empty_token() {
        assert_eq!(decode_sentence(" .- "), Ok(" A ".to_string()));
        assert_eq!(decode_sentence(".-   -..."), Ok("A  B".to_string()));
    }

    #[test]
    fn test_decode_sentence_reports_unknown_token() {
        assert_eq!(
            decode_sentence("... ...... ..."),
            Err(TranscodeError::UnknownCode("......".to_string()))
        );
    }

    #[test]
    fn test_sentence_round_trip() {
        assert_eq!(decode_sentence(&encode_sentence("SOS")), Ok("SOS".to_string()));
        assert_eq!(
            decode_sentence(&encode_sentence("I love you!")),
            Ok("I LOVE YOU".to_string())
        );
    }

    #[test]
    fn test_transcode_error_display() {
        assert_eq!(
            TranscodeError::UnknownLetter('7').to_string(),
            "no Morse code for '7'"
        );
        assert_eq!(
            TranscodeError::UnknownCode("......".into()).to_string(),
            "unknown Morse code \"......\""
        );
    }
}
