use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::math::hex::Color;
use crate::math::wcag::contrast_ratio;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub foreground: Color,
    pub background: Color,
    pub ratio: f64,
    pub timestamp_ms: u64,
}

impl HistoryEntry {
    /// Entry for the pair, stamped with the current wall-clock time.
    pub fn now(foreground: Color, background: Color) -> Self {
        let timestamp_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        Self {
            foreground,
            background,
            ratio: contrast_ratio(foreground, background),
            timestamp_ms,
        }
    }
}

/// Recently checked pairs, oldest first. Holds at most `capacity` distinct
/// (foreground, background) pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "HistoryRepr")]
pub struct History {
    capacity: usize,
    entries: VecDeque<HistoryEntry>,
}

/// Wire form of [`History`]; replayed through `record` on load so a stored
/// history cannot bypass the capacity and dedup rules.
#[derive(Deserialize)]
struct HistoryRepr {
    capacity: usize,
    entries: Vec<HistoryEntry>,
}

impl From<HistoryRepr> for History {
    fn from(repr: HistoryRepr) -> Self {
        let mut history = History::with_capacity(repr.capacity);
        for entry in repr.entries {
            history.record(entry);
        }
        history
    }
}

impl Default for History {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl History {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::with_capacity(config.history_capacity)
    }

    /// Append `entry` unless the exact pair is already recorded.
    /// Returns false for duplicates. The oldest entry is evicted when full.
    pub fn record(&mut self, entry: HistoryEntry) -> bool {
        if self.contains(entry.foreground, entry.background) {
            return false;
        }
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
        true
    }

    pub fn contains(&self, foreground: Color, background: Color) -> bool {
        self.entries
            .iter()
            .any(|e| e.foreground == foreground && e.background == background)
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
