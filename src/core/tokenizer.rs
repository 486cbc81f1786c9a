//! # Tokenizer
//!
//! Splits chat message bodies into lowercase word tokens. A token is a
//! maximal run of word characters (letters, digits, underscore), so
//! `"Big, blue cat!"` becomes `["big", "blue", "cat"]`.
//!
//! Pure string-in, tokens-out. No filtering happens here — blacklists and
//! part-of-speech checks live upstream in the index and classifier.

use regex::Regex;

/// Matches a maximal run of word characters. Unicode-aware, so accented
/// letters count as word characters too.
const WORD_PATTERN: &str = r"\w+";

pub struct Tokenizer {
    word: Regex,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            // The pattern is a compile-time constant, so this cannot fail.
            word: Regex::new(WORD_PATTERN).expect("word pattern is valid"),
        }
    }

    /// Extracts lowercase tokens in message order, duplicates included.
    pub fn tokenize(&self, message: &str) -> Vec<String> {
        let lowered = message.to_lowercase();
        self.word
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
