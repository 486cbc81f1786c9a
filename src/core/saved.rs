//! # Saved Words
//!
//! The set of words the user has marked. Every accepted mutation invokes a
//! persistence callback synchronously before returning, so the in-memory set
//! and the durable store never diverge within a call. This is the single
//! mutation entry point for saved words — nothing else writes the store.
//!
//! Words are trimmed and lower-cased before storage or lookup; input that is
//! empty after trimming is silently rejected.

use std::collections::BTreeSet;

/// Receives the full set after each mutation. I/O failures are the
/// callback's concern (log and continue); they are not surfaced here.
pub type PersistFn = Box<dyn FnMut(&BTreeSet<String>)>;

pub struct SavedWords {
    // BTreeSet keeps iteration sorted and deduplicated, which is exactly the
    // persistence contract for the on-disk file.
    words: BTreeSet<String>,
    persist: PersistFn,
}

impl SavedWords {
    pub fn new(initial: BTreeSet<String>, persist: PersistFn) -> Self {
        Self {
            words: initial,
            persist,
        }
    }

    fn normalize(word: &str) -> Option<String> {
        let trimmed = word.trim().to_lowercase();
        if trimmed.is_empty() { None } else { Some(trimmed) }
    }

    pub fn contains(&self, word: &str) -> bool {
        Self::normalize(word).is_some_and(|w| self.words.contains(&w))
    }

    /// Flips membership and returns the new state. Blank input is a no-op
    /// and reports non-membership.
    pub fn toggle(&mut self, word: &str) -> bool {
        let Some(word) = Self::normalize(word) else {
            return false;
        };
        let now_member = if self.words.remove(&word) {
            false
        } else {
            self.words.insert(word);
            true
        };
        (self.persist)(&self.words);
        now_member
    }

    pub fn add(&mut self, word: &str) {
        let Some(word) = Self::normalize(word) else {
            return;
        };
        self.words.insert(word);
        (self.persist)(&self.words);
    }

    pub fn remove(&mut self, word: &str) {
        let Some(word) = Self::normalize(word) else {
            return;
        };
        self.words.remove(&word);
        (self.persist)(&self.words);
    }

    /// Current contents, sorted.
    pub fn words(&self) -> &BTreeSet<String> {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// A SavedWords that records every snapshot handed to the persist
    /// callback.
    fn recording_store(initial: &[&str]) -> (SavedWords, Rc<RefCell<Vec<Vec<String>>>>) {
        let snapshots: Rc<RefCell<Vec<Vec<String>>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&snapshots);
        let persist: PersistFn = Box::new(move |words| {
            sink.borrow_mut()
                .push(words.iter().cloned().collect::<Vec<_>>());
        });
        let initial = initial.iter().map(|s| s.to_string()).collect();
        (SavedWords::new(initial, persist), snapshots)
    }

    #[test]
    fn test_toggle_normalizes_and_round_trips() {
        let (mut store, _) = recording_store(&[]);
        assert!(store.toggle("Cat "));
        assert!(store.contains("cat"));
        assert!(store.contains("  CAT"));

        assert!(!store.toggle("cat"));
        assert!(!store.contains("cat"));
    }

    #[test]
    fn test_blank_input_is_silent_noop() {
        let (mut store, snapshots) = recording_store(&["dog"]);
        assert!(!store.toggle("   "));
        store.add("");
        store.remove(" \t ");
        assert!(store.contains("dog"));
        assert!(snapshots.borrow().is_empty(), "no persist call for blanks");
    }

    #[test]
    fn test_every_accepted_mutation_persists() {
        let (mut store, snapshots) = recording_store(&[]);
        store.add("zebra");
        store.add("ant");
        store.remove("zebra");
        let snaps = snapshots.borrow();
        assert_eq!(snaps.len(), 3);
        assert_eq!(snaps[1], vec!["ant", "zebra"]); // sorted on the way out
        assert_eq!(snaps[2], vec!["ant"]);
    }

    #[test]
    fn test_persist_sees_state_after_mutation() {
        let (mut store, snapshots) = recording_store(&[]);
        store.toggle("word");
        assert_eq!(snapshots.borrow().last().unwrap(), &vec!["word".to_string()]);
    }
}
