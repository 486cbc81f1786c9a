//! # Word File Store
//!
//! Line-delimited word files: the noun/adjective vocabularies, the username
//! blacklist, and the saved-words store. One lowercase word per line.
//!
//! Reads are forgiving — a missing or unreadable file logs a warning and
//! yields the empty set, so a fresh install works without any data files.
//! Writes are atomic (write `.tmp`, then `rename()`) and always emit sorted,
//! deduplicated content.

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::core::saved::PersistFn;

fn read_lines(path: &Path) -> Option<Vec<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Some(
            contents
                .lines()
                .map(|line| line.trim().to_lowercase())
                .filter(|line| !line.is_empty())
                .collect(),
        ),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("word file {} not found, using empty set", path.display());
            None
        }
        Err(e) => {
            warn!("failed to read {}: {}, using empty set", path.display(), e);
            None
        }
    }
}

/// Loads a word file into an unordered set. Missing file → empty set.
pub fn load_words(path: &Path) -> HashSet<String> {
    read_lines(path).unwrap_or_default().into_iter().collect()
}

/// Loads a word file into a sorted set (for the saved-words store).
pub fn load_words_sorted(path: &Path) -> BTreeSet<String> {
    read_lines(path).unwrap_or_default().into_iter().collect()
}

/// Rewrites `path` with one word per line, sorted and deduplicated.
pub fn write_words(path: &Path, words: &BTreeSet<String>) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let mut contents = words.iter().cloned().collect::<Vec<_>>().join("\n");
    contents.push('\n');

    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, contents)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// A persistence callback for [`crate::core::saved::SavedWords`] that
/// rewrites `path` after every mutation. Write failures are logged, not
/// propagated — the in-memory set stays authoritative for the session.
pub fn file_persister(path: PathBuf) -> PersistFn {
    Box::new(move |words| {
        if let Err(e) = write_words(&path, words) {
            warn!("failed to persist saved words to {}: {}", path.display(), e);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_words_trims_and_lowercases() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nouns.txt");
        fs::write(&path, "Cat\n  DOG \n\n  \ntree\n").unwrap();

        let words = load_words(&path);
        assert_eq!(words.len(), 3);
        assert!(words.contains("cat"));
        assert!(words.contains("dog"));
        assert!(words.contains("tree"));
    }

    #[test]
    fn test_missing_file_yields_empty_set() {
        let dir = TempDir::new().unwrap();
        assert!(load_words(&dir.path().join("absent.txt")).is_empty());
        assert!(load_words_sorted(&dir.path().join("absent.txt")).is_empty());
    }

    #[test]
    fn test_write_words_is_sorted_and_newline_terminated() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("saved_words.txt");
        let words: BTreeSet<String> =
            ["zebra", "ant", "cat"].iter().map(|s| s.to_string()).collect();

        write_words(&path, &words).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "ant\ncat\nzebra\n");
        // No stray temp file left behind.
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_write_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("saved_words.txt");
        let words: BTreeSet<String> = ["one", "two"].iter().map(|s| s.to_string()).collect();

        write_words(&path, &words).unwrap();
        assert_eq!(load_words_sorted(&path), words);
    }

    #[test]
    fn test_file_persister_writes_on_call() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("saved_words.txt");
        let mut persist = file_persister(path.clone());

        let words: BTreeSet<String> = ["kept"].iter().map(|s| s.to_string()).collect();
        persist(&words);
        assert_eq!(fs::read_to_string(&path).unwrap(), "kept\n");
    }
}
