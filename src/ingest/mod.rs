//! # Chat Log Ingest
//!
//! Loads Twitch-style chat JSON into [`Comment`]s. The wire format is
//!
//! ```json
//! { "comments": [
//!     { "commenter": { "display_name": "Alice" },
//!       "message":   { "body": "Big blue cat" } } ] }
//! ```
//!
//! Missing `display_name` defaults to `"Unknown"`, missing `body` to the
//! empty string — that is a design decision, not an error. When loading a
//! folder, unreadable or malformed files are logged and skipped; the index
//! is best-effort analytics, not a transactional system.

use std::fmt;
use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::Deserialize;

use crate::core::index::Comment;

const AUTHOR_FALLBACK: &str = "Unknown";

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Deserialize)]
struct RawChatLog {
    #[serde(default)]
    comments: Vec<RawComment>,
}

#[derive(Debug, Deserialize)]
struct RawComment {
    commenter: Option<RawCommenter>,
    message: Option<RawMessage>,
}

#[derive(Debug, Deserialize)]
struct RawCommenter {
    display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawMessage {
    body: Option<String>,
}

impl From<RawComment> for Comment {
    fn from(raw: RawComment) -> Self {
        Comment {
            author: raw
                .commenter
                .and_then(|c| c.display_name)
                .unwrap_or_else(|| AUTHOR_FALLBACK.to_string()),
            message: raw.message.and_then(|m| m.body).unwrap_or_default(),
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum IngestError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for IngestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngestError::Io(e) => write!(f, "chat log I/O error: {e}"),
            IngestError::Parse(e) => write!(f, "chat log parse error: {e}"),
        }
    }
}

impl std::error::Error for IngestError {}

// ============================================================================
// Loading
// ============================================================================

/// Loads comments from a single chat JSON file.
pub fn load_file(path: &Path) -> Result<Vec<Comment>, IngestError> {
    let contents = fs::read_to_string(path).map_err(IngestError::Io)?;
    let log: RawChatLog = serde_json::from_str(&contents).map_err(IngestError::Parse)?;
    Ok(log.comments.into_iter().map(Comment::from).collect())
}

/// Loads and merges every `*.json` file in a folder.
///
/// Files are visited in sorted path order so repeated loads of the same
/// folder produce the same comment order. Files that fail to load are
/// logged and skipped.
pub fn load_dir(path: &Path) -> Result<Vec<Comment>, IngestError> {
    let mut files: Vec<_> = fs::read_dir(path)
        .map_err(IngestError::Io)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();

    let mut comments = Vec::new();
    for file in files {
        match load_file(&file) {
            Ok(mut loaded) => comments.append(&mut loaded),
            Err(e) => warn!("skipping {}: {}", file.display(), e),
        }
    }
    Ok(comments)
}

/// Loads a chat file or a folder of chat files, whichever `path` is.
pub fn load_path(path: &Path) -> Result<Vec<Comment>, IngestError> {
    let comments = if path.is_dir() {
        load_dir(path)?
    } else {
        load_file(path)?
    };
    info!("loaded {} comments from {}", comments.len(), path.display());
    Ok(comments)
}
