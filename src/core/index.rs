//! # Word Index
//!
//! The word-indexing engine: maps every token extracted from a set of chat
//! comments to the comments it occurred in.
//!
//! ```text
//! Vec<Comment>  →  build()  →  word → [comment id, ...]
//!                               │
//!                               └── filtered_sorted(predicate, search, sort)
//! ```
//!
//! Occurrences are stored as indices into the comment list rather than as
//! cloned `(author, message)` pairs, so a word appearing in thousands of
//! messages costs one `u32` per occurrence. The `count == occurrences.len()`
//! invariant holds by construction — counts are derived, never tracked in a
//! second map.
//!
//! `build()` assembles the new index off to the side and swaps it in at the
//! end, so a caller never observes a half-built index.

use std::collections::{HashMap, HashSet};

use clap::ValueEnum;
use log::info;
use serde::{Deserialize, Serialize};

use crate::core::tokenizer::Tokenizer;

/// One chat comment. Produced by the ingest layer; immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub author: String,
    pub message: String,
}

/// Word list ordering for [`WordIndex::filtered_sorted`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Ascending lexicographic order.
    #[default]
    Alphabetical,
    /// Occurrence count descending; equal counts fall back to alphabetical.
    ByCount,
}

#[derive(Default)]
pub struct WordIndex {
    tokenizer: Tokenizer,
    comments: Vec<Comment>,
    /// word → ids of the comments it occurred in, one entry per token
    /// occurrence, in input order.
    entries: HashMap<String, Vec<u32>>,
}

impl WordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the index from scratch.
    ///
    /// Comments whose author (lower-cased) appears in `blacklisted_authors`
    /// are skipped entirely; everything else is tokenized and recorded. The
    /// stored occurrence keeps the original-case author string.
    pub fn build(&mut self, comments: Vec<Comment>, blacklisted_authors: &HashSet<String>) {
        let mut entries: HashMap<String, Vec<u32>> = HashMap::new();
        let mut kept: Vec<Comment> = Vec::with_capacity(comments.len());

        for comment in comments {
            if blacklisted_authors.contains(&comment.author.to_lowercase()) {
                continue;
            }
            let id = kept.len() as u32;
            for token in self.tokenizer.tokenize(&comment.message) {
                entries.entry(token).or_default().push(id);
            }
            kept.push(comment);
        }

        info!(
            "indexed {} distinct words across {} comments",
            entries.len(),
            kept.len()
        );

        // Swap in the finished state last; readers never see partial results.
        self.comments = kept;
        self.entries = entries;
    }

    /// All indexed words, in no particular order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Occurrences of `word` in input order. Empty for unknown words.
    pub fn occurrences(&self, word: &str) -> impl Iterator<Item = &Comment> {
        self.entries
            .get(word)
            .into_iter()
            .flatten()
            .filter_map(|&id| self.comments.get(id as usize))
    }

    /// Number of occurrences of `word`; 0 for unknown words.
    pub fn count(&self, word: &str) -> usize {
        self.entries.get(word).map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Words passing `predicate` and containing `search` (case-insensitive;
    /// an empty search matches everything), in the requested order.
    ///
    /// `ByCount` uses a stable sort with alphabetical tie-break, so the
    /// result is deterministic across rebuilds with identical input.
    pub fn filtered_sorted<F>(&self, predicate: F, search: &str, sort: SortMode) -> Vec<&str>
    where
        F: Fn(&str) -> bool,
    {
        let needle = search.to_lowercase();
        let mut words: Vec<&str> = self
            .words()
            .filter(|w| predicate(w) && (needle.is_empty() || w.contains(&needle)))
            .collect();

        match sort {
            SortMode::Alphabetical => words.sort_unstable(),
            SortMode::ByCount => {
                words.sort_by(|a, b| self.count(b).cmp(&self.count(a)).then_with(|| a.cmp(b)));
            }
        }
        words
    }
}
