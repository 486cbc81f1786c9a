//! End-to-end flow: chat JSON on disk → ingest → word index → filtered
//! views → saved-word persistence.

use std::collections::{BTreeSet, HashSet};
use std::fs;

use tempfile::TempDir;

use chatlex::core::index::{SortMode, WordIndex};
use chatlex::core::pos::{PosLexicon, WordClass};
use chatlex::core::saved::SavedWords;
use chatlex::core::tokenizer::Tokenizer;
use chatlex::{ingest, store};

const CHAT_JSON: &str = r#"{
  "comments": [
    { "commenter": { "display_name": "Alice" },
      "message":   { "body": "Big blue cat" } },
    { "commenter": { "display_name": "Bob" },
      "message":   { "body": "big BIG dog" } }
  ]
}"#;

fn build_index(dir: &TempDir, blacklist: &[&str]) -> WordIndex {
    let chat_path = dir.path().join("chat.json");
    fs::write(&chat_path, CHAT_JSON).unwrap();

    let comments = ingest::load_path(&chat_path).unwrap();
    let blacklist: HashSet<String> = blacklist.iter().map(|s| s.to_string()).collect();
    let mut index = WordIndex::new();
    index.build(comments, &blacklist);
    index
}

#[test]
fn indexes_chat_file_end_to_end() {
    let dir = TempDir::new().unwrap();
    let index = build_index(&dir, &[]);

    assert_eq!(index.count("big"), 3);
    let occ: Vec<(String, String)> = index
        .occurrences("big")
        .map(|c| (c.author.clone(), c.message.clone()))
        .collect();
    assert_eq!(occ[0], ("Alice".to_string(), "Big blue cat".to_string()));
    assert_eq!(occ[1], ("Bob".to_string(), "big BIG dog".to_string()));

    // Token conservation: summed counts equal tokens extracted from the
    // non-blacklisted messages.
    let tokenizer = Tokenizer::new();
    let expected: usize = ["Big blue cat", "big BIG dog"]
        .iter()
        .map(|m| tokenizer.tokenize(m).len())
        .sum();
    let total: usize = index.words().map(|w| index.count(w)).sum();
    assert_eq!(total, expected);
}

#[test]
fn blacklisted_author_is_skipped_entirely() {
    let dir = TempDir::new().unwrap();
    let index = build_index(&dir, &["bob"]);
    assert_eq!(index.count("dog"), 0);
    assert_eq!(index.count("big"), 2);
}

#[test]
fn vocabulary_files_drive_the_pos_filter() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("nouns.txt"), "cat\ndog\n").unwrap();
    fs::write(dir.path().join("adjectives.txt"), "Blue\nfast\n").unwrap();

    let lexicon = PosLexicon::new(
        store::load_words(&dir.path().join("nouns.txt")),
        store::load_words(&dir.path().join("adjectives.txt")),
    );
    let index = build_index(&dir, &[]);

    // Both classes active: OR semantics, the set widens.
    let both = lexicon.combined_filter(&[WordClass::Noun, WordClass::Adjective]);
    let listed = index.filtered_sorted(both, "", SortMode::Alphabetical);
    assert_eq!(listed, vec!["blue", "cat", "dog"]);

    // No classes active: no filter, everything in sorted order.
    let none = lexicon.combined_filter(&[]);
    let listed = index.filtered_sorted(none, "", SortMode::Alphabetical);
    assert_eq!(listed, vec!["big", "blue", "cat", "dog"]);
}

#[test]
fn by_count_listing_is_deterministic_across_rebuilds() {
    let dir = TempDir::new().unwrap();
    let a = build_index(&dir, &[]);
    let b = build_index(&dir, &[]);
    let listed_a = a.filtered_sorted(|_| true, "", SortMode::ByCount);
    let listed_b = b.filtered_sorted(|_| true, "", SortMode::ByCount);
    assert_eq!(listed_a, listed_b);
    assert_eq!(listed_a[0], "big"); // 3 occurrences beat the 1-count ties
}

#[test]
fn saved_words_persist_to_sorted_deduplicated_file() {
    let dir = TempDir::new().unwrap();
    let saved_path = dir.path().join("saved_words.txt");
    fs::write(&saved_path, "dog\n").unwrap();

    let mut saved = SavedWords::new(
        store::load_words_sorted(&saved_path),
        store::file_persister(saved_path.clone()),
    );

    assert!(saved.contains("dog"));
    assert!(saved.toggle("Cat "));
    saved.add("cat"); // duplicate converges, no second line
    saved.add("zebra");

    assert_eq!(fs::read_to_string(&saved_path).unwrap(), "cat\ndog\nzebra\n");

    // A fresh load sees exactly what was persisted.
    let reloaded: BTreeSet<String> = store::load_words_sorted(&saved_path);
    assert_eq!(reloaded, saved.words().clone());

    saved.remove("dog");
    assert_eq!(fs::read_to_string(&saved_path).unwrap(), "cat\nzebra\n");
}
