// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory history of executed lines.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A recorded line and its 1-based position in the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub number: usize,
    pub line: String,
}

/// Ordered log of the lines a session executed.
///
/// Bounded by `capacity` (0 = unbounded); the oldest entries are dropped
/// first. Entry numbers keep counting across drops.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
    recorded: usize,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
            recorded: 0,
        }
    }

    /// Append `line`. Blank lines are not recorded.
    pub fn record(&mut self, line: &str) {
        let line = line.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            return;
        }
        self.recorded += 1;
        self.entries.push_back(HistoryEntry {
            number: self.recorded,
            line: line.to_string(),
        });
        if self.capacity > 0 {
            while self.entries.len() > self.capacity {
                self.entries.pop_front();
            }
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
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

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
