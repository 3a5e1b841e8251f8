//! Flat-file high score persistence
//!
//! Scores live in one JSON file. All I/O failures are absorbed at this
//! boundary: a missing or unreadable file loads as an empty table, and a
//! failed save is logged and dropped, never propagated into gameplay.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::highscores::HighScores;

/// JSON-backed score store at a fixed path
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the score table, or an empty one when the file is missing or
    /// malformed
    pub fn load(&self) -> HighScores {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("no score file at {}, starting fresh", self.path.display());
                return HighScores::default();
            }
            Err(e) => {
                warn!("failed to read {}: {e}", self.path.display());
                return HighScores::default();
            }
        };

        match serde_json::from_str(&text) {
            Ok(scores) => scores,
            Err(e) => {
                warn!("malformed score file {}: {e}", self.path.display());
                HighScores::default()
            }
        }
    }

    /// Persist the score table, creating parent directories as needed
    pub fn save(&self, scores: &HighScores) {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = fs::create_dir_all(parent) {
                    warn!("failed to create {}: {e}", parent.display());
                    return;
                }
            }
        }

        match serde_json::to_string_pretty(scores) {
            Ok(json) => {
                if let Err(e) = fs::write(&self.path, json) {
                    warn!("failed to write {}: {e}", self.path.display());
                }
            }
            Err(e) => warn!("failed to serialize scores: {e}"),
        }
    }
}
