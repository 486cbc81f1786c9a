//! # Part-of-Speech Classifier
//!
//! Answers "is this word a noun / an adjective?" from vocabulary sets loaded
//! at startup. Used as a filter predicate over the word index.
//!
//! When both classes are requested the filter widens (logical OR): a word in
//! either vocabulary passes. An empty request means "no filter" and accepts
//! every word.

use std::collections::HashSet;

/// Word classes the lexicon can answer membership for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordClass {
    Noun,
    Adjective,
}

pub struct PosLexicon {
    nouns: HashSet<String>,
    adjectives: HashSet<String>,
}

impl PosLexicon {
    /// Entries are normalized to lowercase on the way in.
    pub fn new(nouns: HashSet<String>, adjectives: HashSet<String>) -> Self {
        Self {
            nouns: nouns.into_iter().map(|w| w.to_lowercase()).collect(),
            adjectives: adjectives.into_iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    pub fn empty() -> Self {
        Self::new(HashSet::new(), HashSet::new())
    }

    pub fn is_noun(&self, word: &str) -> bool {
        self.nouns.contains(&word.to_lowercase())
    }

    pub fn is_adjective(&self, word: &str) -> bool {
        self.adjectives.contains(&word.to_lowercase())
    }

    /// Builds a predicate over the active word classes.
    ///
    /// No active classes → everything passes. Otherwise a word passes if it
    /// belongs to any requested class.
    pub fn combined_filter<'a>(&'a self, active: &[WordClass]) -> impl Fn(&str) -> bool + 'a {
        let active = active.to_vec();
        move |word| {
            active.is_empty()
                || active.iter().any(|class| match class {
                    WordClass::Noun => self.is_noun(word),
                    WordClass::Adjective => self.is_adjective(word),
                })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> PosLexicon {
        let nouns = ["cat", "dog"].iter().map(|s| s.to_string()).collect();
        let adjectives = ["fast", "blue"].iter().map(|s| s.to_string()).collect();
        PosLexicon::new(nouns, adjectives)
    }

    #[test]
    fn test_membership_is_case_insensitive() {
        let lex = lexicon();
        assert!(lex.is_noun("cat"));
        assert!(lex.is_noun("CAT"));
        assert!(!lex.is_noun("fast"));
        assert!(lex.is_adjective("Blue"));
    }

    #[test]
    fn test_entries_normalized_on_construction() {
        let nouns = ["Tower"].iter().map(|s| s.to_string()).collect();
        let lex = PosLexicon::new(nouns, HashSet::new());
        assert!(lex.is_noun("tower"));
    }

    #[test]
    fn test_empty_filter_accepts_everything() {
        let lex = lexicon();
        let accept = lex.combined_filter(&[]);
        assert!(accept("cat"));
        assert!(accept("not_in_any_list"));
    }

    #[test]
    fn test_single_class_filter() {
        let lex = lexicon();
        let nouns_only = lex.combined_filter(&[WordClass::Noun]);
        assert!(nouns_only("cat"));
        assert!(!nouns_only("fast"));
        assert!(!nouns_only("unknown"));
    }

    #[test]
    fn test_both_classes_widen_not_narrow() {
        let lex = lexicon();
        let both = lex.combined_filter(&[WordClass::Noun, WordClass::Adjective]);
        // "fast" is an adjective only; it still passes with both active.
        assert!(both("fast"));
        assert!(both("cat"));
        assert!(!both("unknown"));
    }
}
