//! Per-difficulty high score tables

use serde::{Deserialize, Serialize};

use crate::consts::MAX_NAME_LEN;
use crate::sim::Difficulty;

/// Entries kept per difficulty board
pub const MAX_HIGH_SCORES: usize = 10;

/// One leaderboard row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u64,
    pub level: u32,
    /// Human-readable date stamp, recorded at commit time
    pub date: String,
}

/// Top-10 boards, one per difficulty. Ordered best-first; ties keep
/// insertion order, so an equal new score lands below existing ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScores {
    #[serde(default)]
    pub easy: Vec<ScoreEntry>,
    #[serde(default)]
    pub medium: Vec<ScoreEntry>,
    #[serde(default)]
    pub hard: Vec<ScoreEntry>,
}

impl HighScores {
    pub fn entries(&self, difficulty: Difficulty) -> &[ScoreEntry] {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    fn entries_mut(&mut self, difficulty: Difficulty) -> &mut Vec<ScoreEntry> {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        }
    }

    /// Whether a score would make the board: any score qualifies while the
    /// board is short, otherwise it must beat the current last place
    pub fn qualifies(&self, difficulty: Difficulty, score: u64) -> bool {
        let entries = self.entries(difficulty);
        entries.len() < MAX_HIGH_SCORES || entries.last().is_some_and(|e| score > e.score)
    }

    /// Insert a finished run into its difficulty board, keeping the board
    /// sorted best-first and capped. Names are truncated, not rejected.
    ///
    /// In-memory only: the caller must persist the table (see
    /// `FileScoreStore::save`) for the entry to be durable.
    pub fn commit(&mut self, difficulty: Difficulty, name: &str, score: u64, level: u32, date: String) {
        let name: String = name.chars().take(MAX_NAME_LEN).collect();
        let entries = self.entries_mut(difficulty);
        entries.push(ScoreEntry {
            name,
            score,
            level,
            date,
        });
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(MAX_HIGH_SCORES);
    }

    pub fn top_score(&self, difficulty: Difficulty) -> Option<u64> {
        self.entries(difficulty).first().map(|e| e.score)
    }

    pub fn is_empty(&self) -> bool {
        self.easy.is_empty() && self.medium.is_empty() && self.hard.is_empty()
    }
}
