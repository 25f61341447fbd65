//! Configuration for hangman.
//!
//! Settings load from `~/.hangman/config.toml`:
//!
//! ```toml
//! # Word list file, one word per line (optional)
//! words_file = "/usr/share/dict/words"
//!
//! # Directory for saved games (optional)
//! save_dir = "/home/me/hangman-saves"
//! ```
//!
//! Both keys are optional; a missing or malformed file falls back to the
//! built-in word list and `~/.hangman/saved_games`.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Word list file, one word per line
    pub words_file: Option<PathBuf>,
    /// Directory for saved games
    pub save_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from file
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                if let Ok(content) = fs::read_to_string(&path) {
                    if let Ok(config) = toml::from_str(&content) {
                        return config;
                    }
                }
            }
        }
        Self::default()
    }

    /// Get config file path
    fn config_path() -> Option<PathBuf> {
        data_dir().map(|dir| dir.join("config.toml"))
    }
}

/// Application data directory (`~/.hangman`), created on first use
pub fn data_dir() -> Option<PathBuf> {
    let dir = home_dir()?.join(".hangman");
    if !dir.exists() {
        let _ = fs::create_dir_all(&dir);
    }
    Some(dir)
}

/// Default directory for saved games when neither CLI nor config set one
pub fn default_save_dir() -> PathBuf {
    data_dir()
        .map(|dir| dir.join("saved_games"))
        .unwrap_or_else(|| PathBuf::from("saved_games"))
}

// Get home directory
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
