//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.chatlex/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! Vocabulary and saved-word files default to the same directory.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::index::SortMode;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ChatlexConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub files: FilesConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub data_dir: Option<String>,
    pub double_tap_window_ms: Option<u64>,
    pub trigger_key: Option<String>,
    pub sort: Option<SortMode>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FilesConfig {
    pub nouns: Option<String>,
    pub adjectives: Option<String>,
    pub blacklist: Option<String>,
    pub saved_words: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_DOUBLE_TAP_WINDOW_MS: u64 = 350;
pub const DEFAULT_TRIGGER_KEY: &str = "tab";

const NOUNS_FILE: &str = "nouns.txt";
const ADJECTIVES_FILE: &str = "adjectives.txt";
const BLACKLIST_FILE: &str = "blacklist.txt";
const SAVED_WORDS_FILE: &str = "saved_words.txt";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub double_tap_window: Duration,
    pub trigger_key: String,
    pub sort: SortMode,
    pub nouns_path: PathBuf,
    pub adjectives_path: PathBuf,
    pub blacklist_path: PathBuf,
    pub saved_words_path: PathBuf,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.chatlex/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".chatlex").join("config.toml"))
}

/// Load config from `~/.chatlex/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ChatlexConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ChatlexConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ChatlexConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ChatlexConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: ChatlexConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Chatlex Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# data_dir = "~/.chatlex"            # Where word files live by default
# double_tap_window_ms = 350         # Quick-select double-tap window
# trigger_key = "tab"                # "tab", "capslock", or a single character
# sort = "alphabetical"              # "alphabetical" or "by-count"

# [files]
# nouns = "nouns.txt"                # Relative paths resolve against data_dir
# adjectives = "adjectives.txt"
# blacklist = "blacklist.txt"
# saved_words = "saved_words.txt"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars
/// → CLI flags.
///
/// `cli_sort` is from the CLI flag (None = not specified).
pub fn resolve(config: &ChatlexConfig, cli_sort: Option<SortMode>) -> ResolvedConfig {
    // Data dir: env → config → ~/.chatlex
    let data_dir = std::env::var("CHATLEX_DATA_DIR")
        .ok()
        .map(PathBuf::from)
        .or_else(|| config.general.data_dir.as_deref().map(expand_home))
        .or_else(|| dirs::home_dir().map(|h| h.join(".chatlex")))
        .unwrap_or_else(|| PathBuf::from("."));

    // Trigger key: env → config → default
    let trigger_key = std::env::var("CHATLEX_TRIGGER_KEY")
        .ok()
        .or_else(|| config.general.trigger_key.clone())
        .unwrap_or_else(|| DEFAULT_TRIGGER_KEY.to_string());

    // Sort: CLI → config → default
    let sort = cli_sort.or(config.general.sort).unwrap_or_default();

    let file_path = |configured: &Option<String>, default_name: &str| -> PathBuf {
        match configured {
            Some(p) => {
                let p = expand_home(p);
                if p.is_absolute() { p } else { data_dir.join(p) }
            }
            None => data_dir.join(default_name),
        }
    };

    ResolvedConfig {
        double_tap_window: Duration::from_millis(
            config
                .general
                .double_tap_window_ms
                .unwrap_or(DEFAULT_DOUBLE_TAP_WINDOW_MS),
        ),
        trigger_key,
        sort,
        nouns_path: file_path(&config.files.nouns, NOUNS_FILE),
        adjectives_path: file_path(&config.files.adjectives, ADJECTIVES_FILE),
        blacklist_path: file_path(&config.files.blacklist, BLACKLIST_FILE),
        saved_words_path: file_path(&config.files.saved_words, SAVED_WORDS_FILE),
    }
}

/// Expands a leading `~/` to the home directory.
fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
