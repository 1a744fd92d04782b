//! Persisted knowledge: aggregate win/loss history and rolling performance
//! samples, behind a pluggable store.
//!
//! The durable record is a single JSON document. It is server-authoritative
//! and best-effort: an absent or corrupt file loads as a fresh zeroed base,
//! and a failed save leaves the in-memory state intact so the next terminated
//! game retries the write.

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use rampart_core::StoreError;
use serde::{Deserialize, Serialize};

/// Rolling samples keep at most this many recent games (FIFO eviction).
pub const MAX_SAMPLES: usize = 100;

/// Aggregate statistics accumulated across games.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeBase {
    pub total_games: u32,
    pub wins: u32,
    pub losses: u32,
    /// Average tower level reached, one sample per terminated game.
    #[serde(default)]
    pub levels_achieved: VecDeque<f64>,
    /// Turn of the first attack, one sample per terminated game.
    #[serde(default)]
    pub first_attack_turns: VecDeque<u32>,
}

impl KnowledgeBase {
    /// Fraction of games won; `0.0` before the first game terminates.
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.total_games)
        }
    }

    /// Fold one terminated game into the aggregate. Appends exactly one
    /// sample to each rolling list, evicting the oldest past [`MAX_SAMPLES`].
    pub fn record_game(&mut self, won: bool, avg_level: f64, first_attack_turn: u32) {
        self.total_games += 1;
        if won {
            self.wins += 1;
        } else {
            self.losses += 1;
        }

        self.levels_achieved.push_back(avg_level);
        if self.levels_achieved.len() > MAX_SAMPLES {
            let _ = self.levels_achieved.pop_front();
        }
        self.first_attack_turns.push_back(first_attack_turn);
        if self.first_attack_turns.len() > MAX_SAMPLES {
            let _ = self.first_attack_turns.pop_front();
        }
    }
}

/// Durable backend for the knowledge record.
///
/// Injectable so the engine stays testable without real storage; the server
/// wires in [`JsonFileStore`], tests use [`MemoryStore`].
pub trait KnowledgeStore: Send + Sync {
    /// Load the last durable record. `Ok(None)` when no record exists yet.
    fn load(&self) -> Result<Option<KnowledgeBase>, StoreError>;

    /// Persist the record, replacing any previous one.
    fn save(&self, knowledge: &KnowledgeBase) -> Result<(), StoreError>;
}

/// File-backed store: one pretty-printed JSON document.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KnowledgeStore for JsonFileStore {
    fn load(&self) -> Result<Option<KnowledgeBase>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&data)?))
    }

    fn save(&self, knowledge: &KnowledgeBase) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(knowledge)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral runs.
#[derive(Default)]
pub struct MemoryStore {
    record: Mutex<Option<KnowledgeBase>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last saved record, if any.
    pub fn saved(&self) -> Option<KnowledgeBase> {
        self.record.lock().clone()
    }
}

impl KnowledgeStore for MemoryStore {
    fn load(&self) -> Result<Option<KnowledgeBase>, StoreError> {
        Ok(self.record.lock().clone())
    }

    fn save(&self, knowledge: &KnowledgeBase) -> Result<(), StoreError> {
        *self.record.lock() = Some(knowledge.clone());
        Ok(())
    }
}
