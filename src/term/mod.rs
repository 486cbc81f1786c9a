//! # Terminal Adapter
//!
//! The interactive, keyboard-only front end. Deliberately line-oriented —
//! no TUI framework, no layout, just printed lines — because the core is
//! the word engine and the quick-select machine, and this layer only has to
//! realize their outputs.
//!
//! One tokio mpsc channel carries everything the loop reacts to: key events
//! from a blocking reader thread and double-tap timer fires from
//! [`timer::TokioTapTimer`]. This is the single logical thread the core
//! assumes; `WordIndex` and `SavedWords` are only ever touched here.
//!
//! Keys route in two steps: quick-select keys (trigger, Esc, and — while
//! armed — digits) go to the `NavigationController`; everything else edits
//! whichever pane currently has focus.

pub mod event;
pub mod timer;

use std::fmt;
use std::io;
use std::sync::Arc;

use crossterm::event::{Event, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use log::{debug, info, warn};
use tokio::sync::mpsc::{self, UnboundedSender};

use crate::core::config::ResolvedConfig;
use crate::core::index::{Comment, SortMode, WordIndex};
use crate::core::nav::{NavAction, NavKey, NavState, NavigationController};
use crate::core::pos::{PosLexicon, WordClass};
use crate::core::saved::SavedWords;
use crate::store;
use event::TermKey;
use timer::TokioTapTimer;

/// How many words one page of the word list shows (digit-addressable later
/// pages are not worth the complexity for a line-oriented view).
const WORD_PAGE: usize = 15;

/// Everything the runtime loop can be woken by.
#[derive(Debug)]
pub enum RuntimeEvent {
    Key(TermKey),
    TapTimeout(u64),
}

/// The quick-select focus targets, in registry order. Fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Search,
    Words,
    Messages,
    Nouns,
    Adjectives,
    Sort,
    Saved,
}

const PANES: [Pane; 7] = [
    Pane::Search,
    Pane::Words,
    Pane::Messages,
    Pane::Nouns,
    Pane::Adjectives,
    Pane::Sort,
    Pane::Saved,
];

impl fmt::Display for Pane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Pane::Search => "search",
            Pane::Words => "words",
            Pane::Messages => "messages",
            Pane::Nouns => "nouns filter",
            Pane::Adjectives => "adjectives filter",
            Pane::Sort => "sort order",
            Pane::Saved => "saved words",
        };
        write!(f, "{name}")
    }
}

/// Raw mode must be restored even if the loop errors out.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!("failed to restore terminal mode: {}", e);
        }
    }
}

/// In raw mode a bare `\n` doesn't return the carriage.
macro_rules! echo {
    ($($arg:tt)*) => {
        print!("{}\r\n", format!($($arg)*))
    };
}

// ============================================================================
// View state
// ============================================================================

struct View {
    index: WordIndex,
    lexicon: PosLexicon,
    saved: SavedWords,
    search: String,
    sort: SortMode,
    nouns_active: bool,
    adjectives_active: bool,
    hide_authors: bool,
    focused: Pane,
    /// Position within the currently visible word list.
    selected: usize,
}

impl View {
    fn active_classes(&self) -> Vec<WordClass> {
        let mut classes = Vec::new();
        if self.nouns_active {
            classes.push(WordClass::Noun);
        }
        if self.adjectives_active {
            classes.push(WordClass::Adjective);
        }
        classes
    }

    fn visible_words(&self) -> Vec<String> {
        let predicate = self.lexicon.combined_filter(&self.active_classes());
        self.index
            .filtered_sorted(predicate, &self.search, self.sort)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    fn selected_word(&self) -> Option<String> {
        self.visible_words().get(self.selected).cloned()
    }

    fn print_words(&self) {
        let words = self.visible_words();
        echo!(
            "-- words ({} match{}, search {:?}, {:?} sort) --",
            words.len(),
            if words.len() == 1 { "" } else { "es" },
            self.search,
            self.sort
        );
        for (i, word) in words.iter().take(WORD_PAGE).enumerate() {
            let marker = if self.saved.contains(word) { "*" } else { " " };
            let cursor = if i == self.selected { ">" } else { " " };
            echo!("{cursor}{marker} {word} ({})", self.index.count(word));
        }
        if words.len() > WORD_PAGE {
            echo!("   ... {} more", words.len() - WORD_PAGE);
        }
    }

    fn print_messages(&self) {
        let Some(word) = self.selected_word() else {
            echo!("-- no word selected --");
            return;
        };
        echo!("-- messages containing {:?} --", word);
        for comment in self.index.occurrences(&word) {
            if self.hide_authors {
                echo!("  {}", comment.message);
            } else {
                echo!("  {}: {}", comment.author, comment.message);
            }
        }
    }

    fn print_saved(&self) {
        echo!("-- saved words ({}) --", self.saved.words().len());
        for word in self.saved.words() {
            echo!("  {word}");
        }
    }

    /// Realizes a focus change, mirroring what clicking the widget would do
    /// in the original: checkboxes toggle, the sort box cycles, list panes
    /// reprint their contents.
    fn focus(&mut self, pane: Pane) {
        self.focused = pane;
        debug!("focus -> {}", pane);
        match pane {
            Pane::Search => echo!("search: {:?} (type to edit, Enter to list)", self.search),
            Pane::Words => self.print_words(),
            Pane::Messages => self.print_messages(),
            Pane::Nouns => {
                self.nouns_active = !self.nouns_active;
                echo!("nouns filter: {}", on_off(self.nouns_active));
                self.clamp_selection();
                self.print_words();
            }
            Pane::Adjectives => {
                self.adjectives_active = !self.adjectives_active;
                echo!("adjectives filter: {}", on_off(self.adjectives_active));
                self.clamp_selection();
                self.print_words();
            }
            Pane::Sort => {
                self.sort = match self.sort {
                    SortMode::Alphabetical => SortMode::ByCount,
                    SortMode::ByCount => SortMode::Alphabetical,
                };
                echo!("sort: {:?}", self.sort);
                self.print_words();
            }
            Pane::Saved => self.print_saved(),
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_words().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    fn clear_selection(&mut self) {
        self.search.clear();
        self.selected = 0;
        self.focused = Pane::Words;
        echo!("-- selection cleared --");
    }

    fn apply(&mut self, actions: Vec<NavAction<Pane>>) {
        for action in actions {
            match action {
                NavAction::Arm(targets) => {
                    echo!("-- quick-select: press a digit --");
                    for (i, pane) in targets.iter().enumerate() {
                        echo!("  [{i}] {pane}");
                    }
                }
                NavAction::Disarm => echo!("-- quick-select off --"),
                NavAction::Focus(index) => {
                    if let Some(&pane) = PANES.get(index) {
                        self.focus(pane);
                    }
                }
                NavAction::ClearSelection => self.clear_selection(),
            }
        }
    }

    /// Pane-local editing for keys the quick-select machine didn't consume.
    fn edit(&mut self, key: TermKey) {
        match (self.focused, key) {
            (Pane::Search, TermKey::Char(c)) => {
                self.search.push(c);
                self.selected = 0;
                echo!("search: {:?}", self.search);
            }
            (Pane::Search, TermKey::Backspace) => {
                self.search.pop();
                self.selected = 0;
                echo!("search: {:?}", self.search);
            }
            (Pane::Search, TermKey::Enter) => self.focus(Pane::Words),
            (Pane::Words, TermKey::Char('n')) => {
                let len = self.visible_words().len();
                if len > 0 {
                    self.selected = (self.selected + 1).min(len - 1);
                }
                self.print_words();
            }
            (Pane::Words, TermKey::Char('p')) => {
                self.selected = self.selected.saturating_sub(1);
                self.print_words();
            }
            (Pane::Words, TermKey::Char('s')) => {
                if let Some(word) = self.selected_word() {
                    let now_saved = self.saved.toggle(&word);
                    echo!("{:?} {}", word, if now_saved { "saved" } else { "unsaved" });
                    self.print_words();
                }
            }
            (Pane::Words, TermKey::Enter) => self.focus(Pane::Messages),
            _ => {}
        }
    }
}

fn on_off(active: bool) -> &'static str {
    if active { "on" } else { "off" }
}

// ============================================================================
// Runtime
// ============================================================================

/// Reads crossterm events on a dedicated blocking thread and forwards mapped
/// keys into the runtime channel. Exits when the receiver goes away.
fn spawn_input_thread(tx: UnboundedSender<RuntimeEvent>, trigger: crossterm::event::KeyCode) {
    std::thread::spawn(move || {
        loop {
            match crossterm::event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if let Some(mapped) = event::map_key(key, trigger)
                        && tx.send(RuntimeEvent::Key(mapped)).is_err()
                    {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    warn!("input thread stopping: {}", e);
                    break;
                }
            }
        }
    });
}

/// Runs the interactive browser until Ctrl+C.
pub async fn run(
    config: &ResolvedConfig,
    comments: Vec<Comment>,
    hide_authors: bool,
) -> io::Result<()> {
    let lexicon = PosLexicon::new(
        store::load_words(&config.nouns_path),
        store::load_words(&config.adjectives_path),
    );
    let blacklist = store::load_words(&config.blacklist_path);
    let saved = SavedWords::new(
        store::load_words_sorted(&config.saved_words_path),
        store::file_persister(config.saved_words_path.clone()),
    );

    let mut index = WordIndex::new();
    index.build(comments, &blacklist);

    let mut view = View {
        index,
        lexicon,
        saved,
        search: String::new(),
        sort: config.sort,
        nouns_active: false,
        adjectives_active: false,
        hide_authors,
        focused: Pane::Words,
        selected: 0,
    };

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut nav: NavigationController<Pane, TokioTapTimer> =
        NavigationController::new(Arc::new(PANES.to_vec()), TokioTapTimer::new(tx.clone()))
            .with_window(config.double_tap_window);

    let trigger = event::parse_trigger(&config.trigger_key);
    info!(
        "interactive mode: trigger {:?}, window {:?}",
        trigger, config.double_tap_window
    );

    let _guard = RawModeGuard::enable()?;
    echo!("chatlex — double-tap {:?} for quick-select, Ctrl+C to quit", trigger);
    view.print_words();

    spawn_input_thread(tx, trigger);

    while let Some(runtime_event) = rx.recv().await {
        match runtime_event {
            RuntimeEvent::TapTimeout(generation) => {
                if generation == nav.timer().generation() {
                    nav.on_timer_elapsed();
                }
            }
            RuntimeEvent::Key(TermKey::Quit) => break,
            RuntimeEvent::Key(TermKey::Nav(key)) => {
                let actions = nav.handle_key(key);
                view.apply(actions);
            }
            RuntimeEvent::Key(key) => {
                // While quick-select is armed every key belongs to it:
                // digits pick a target, anything else implicitly cancels.
                if nav.state() == NavState::AwaitingDigit {
                    let nav_key = match key {
                        TermKey::Char(c) => c
                            .to_digit(10)
                            .map(|d| NavKey::Digit(d as u8))
                            .unwrap_or(NavKey::Other),
                        _ => NavKey::Other,
                    };
                    let actions = nav.handle_key(nav_key);
                    view.apply(actions);
                } else {
                    view.edit(key);
                }
            }
        }
    }

    info!("interactive mode finished");
    Ok(())
}
