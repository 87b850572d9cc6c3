//! Bounded record of past winners.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entries::EntryName;

/// Default number of results retained.
pub const HISTORY_CAPACITY: usize = 10;

/// One resolved spin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub winner: EntryName,
    pub timestamp: DateTime<Utc>,
}

/// Fixed-capacity, most-recent-first ledger of winners.
///
/// Appended only by spin resolution; cleared only on session reset.
/// Recording past capacity drops the oldest record.
#[derive(Debug, Clone)]
pub struct HistoryLedger {
    capacity: usize,
    records: VecDeque<HistoryRecord>,
}

impl Default for HistoryLedger {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            records: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Most-recent-first view of the ledger.
    pub fn records(&self) -> impl Iterator<Item = &HistoryRecord> {
        self.records.iter()
    }

    pub fn latest(&self) -> Option<&HistoryRecord> {
        self.records.front()
    }

    pub fn record(&mut self, winner: EntryName, timestamp: DateTime<Utc>) {
        self.records.push_front(HistoryRecord { winner, timestamp });
        self.records.truncate(self.capacity);
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
