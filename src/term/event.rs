//! Terminal key handling.
//!
//! Maps crossterm key events onto the small vocabulary the interactive loop
//! understands. Quick-select keys (trigger / cancel) are resolved here;
//! digits stay as plain characters because whether `'3'` means "focus target
//! 3" or "type a 3 into the search box" depends on the controller's state,
//! which only the event loop knows.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::warn;

use crate::core::nav::NavKey;

/// Input events the interactive loop consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermKey {
    Nav(NavKey),
    Char(char),
    Backspace,
    Enter,
    Quit,
}

/// Resolves the configured trigger key name. Unknown names fall back to Tab
/// with a warning rather than failing startup.
pub fn parse_trigger(name: &str) -> KeyCode {
    match name.to_lowercase().as_str() {
        "tab" => KeyCode::Tab,
        "capslock" | "caps" => KeyCode::CapsLock,
        single if single.chars().count() == 1 => {
            KeyCode::Char(single.chars().next().unwrap_or('\t'))
        }
        other => {
            warn!("unknown trigger key {:?}, falling back to tab", other);
            KeyCode::Tab
        }
    }
}

/// Translates one key event. Returns `None` for keys the loop ignores.
pub fn map_key(key: KeyEvent, trigger: KeyCode) -> Option<TermKey> {
    // Ctrl+C always quits, regardless of quick-select state.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(TermKey::Quit);
    }
    if key.code == trigger {
        return Some(TermKey::Nav(NavKey::Trigger));
    }
    match key.code {
        KeyCode::Esc => Some(TermKey::Nav(NavKey::Cancel)),
        KeyCode::Char(c) => Some(TermKey::Char(c)),
        KeyCode::Backspace => Some(TermKey::Backspace),
        KeyCode::Enter => Some(TermKey::Enter),
        _ => None,
    }
}
