//! Immutable session snapshots.
//!
//! The application layer publishes one of these after every mutation;
//! rendering and persistence collaborators only ever see snapshots,
//! never live state.

use serde::{Deserialize, Serialize};

use crate::entries::EntryName;
use crate::history::HistoryRecord;

/// Full observable state of a wheel session at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelSnapshot {
    /// Canonical (unfiltered) entry order; this is the selection set.
    pub entries: Vec<EntryName>,
    /// Accumulated rotation in degrees, monotonic across spins.
    pub rotation: f64,
    pub spinning: bool,
    pub current_winner: Option<EntryName>,
    /// Most-recent-first.
    pub history: Vec<HistoryRecord>,
    /// Active filter text (lowercased); display-only.
    pub filter: String,
}

impl Default for WheelSnapshot {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            rotation: 0.0,
            spinning: false,
            current_winner: None,
            history: Vec::new(),
            filter: String::new(),
        }
    }
}

/// The document handed to save/open/share collaborators. Rotation and
/// transient spin state deliberately do not persist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedWheel {
    pub entries: Vec<EntryName>,
    pub history: Vec<HistoryRecord>,
}

impl From<&WheelSnapshot> for PersistedWheel {
    fn from(snapshot: &WheelSnapshot) -> Self {
        Self {
            entries: snapshot.entries.clone(),
            history: snapshot.history.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn persisted_document_round_trips_as_json() {
        let snapshot = WheelSnapshot {
            entries: vec![EntryName::new("Ali").unwrap(), EntryName::new("Diya").unwrap()],
            rotation: 1805.0,
            spinning: false,
            current_winner: Some(EntryName::new("Diya").unwrap()),
            history: vec![HistoryRecord {
                winner: EntryName::new("Diya").unwrap(),
                timestamp: DateTime::from_timestamp_millis(1_700_000_000_000).unwrap(),
            }],
            filter: String::new(),
        };
        let persisted = PersistedWheel::from(&snapshot);
        let json = serde_json::to_string(&persisted).unwrap();
        let restored: PersistedWheel = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, persisted);
        // Transient state is not part of the document.
        assert!(!json.contains("rotation"));
    }
}
