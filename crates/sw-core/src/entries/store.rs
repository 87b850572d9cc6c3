use std::collections::HashSet;

use crate::entries::EntryName;
use crate::ports::RandomnessPort;

/// Seed wheel contents for a fresh session.
pub const DEFAULT_ENTRIES: [&str; 8] = [
    "Ali", "Beatriz", "Charles", "Diya", "Eric", "Fatima", "Gabriel", "Hanna",
];

/// Ordered collection of unique entry names.
///
/// Insertion order is canonical: it drives sector assignment and is
/// preserved by every operation except the explicit `shuffle` and `sort`.
/// Uniqueness is case-sensitive exact match on the trimmed label. A
/// presence index is kept alongside the vector so duplicate checks stay
/// cheap when the store grows into the thousands.
#[derive(Debug, Clone, Default)]
pub struct EntryStore {
    entries: Vec<EntryName>,
    present: HashSet<String>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with [`DEFAULT_ENTRIES`].
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for name in DEFAULT_ENTRIES {
            store.add(name);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.present.contains(name.trim())
    }

    pub fn get(&self, index: usize) -> Option<&EntryName> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[EntryName] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntryName> {
        self.entries.iter()
    }

    /// Append a new entry. Blank input and duplicates are ignored;
    /// returns whether the store changed.
    pub fn add(&mut self, raw: &str) -> bool {
        let Some(name) = EntryName::new(raw) else {
            return false;
        };
        if self.present.contains(name.as_str()) {
            return false;
        }
        self.present.insert(name.as_str().to_string());
        self.entries.push(name);
        true
    }

    /// Remove the entry with exactly this label; returns whether one
    /// was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let Some(position) = self.entries.iter().position(|e| e.as_str() == name) else {
            return false;
        };
        self.entries.remove(position);
        self.present.remove(name);
        true
    }

    /// Tokenize pasted text into the batch of names a bulk import would
    /// add: split on whitespace runs, drop tokens already present, drop
    /// repeats within the batch (first occurrence wins).
    pub fn tokenize_import(&self, raw: &str) -> Vec<EntryName> {
        let mut seen: HashSet<&str> = HashSet::new();
        raw.split_whitespace()
            .filter(|token| !self.present.contains(*token))
            .filter(|token| seen.insert(*token))
            .filter_map(EntryName::new)
            .collect()
    }

    /// Append a pre-tokenized batch, keeping batch order. Names that
    /// slipped into the store since tokenization are skipped so the
    /// uniqueness invariant holds.
    pub fn extend<I>(&mut self, batch: I) -> usize
    where
        I: IntoIterator<Item = EntryName>,
    {
        let mut added = 0;
        for name in batch {
            if self.present.contains(name.as_str()) {
                continue;
            }
            self.present.insert(name.as_str().to_string());
            self.entries.push(name);
            added += 1;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(added, total = self.entries.len(), "entries extended");
        added
    }

    /// Fisher-Yates shuffle driven by the randomness port.
    pub fn shuffle(&mut self, randomness: &dyn RandomnessPort) {
        for i in (1..self.entries.len()).rev() {
            let j = ((randomness.next_unit() * (i + 1) as f64) as usize).min(i);
            self.entries.swap(i, j);
        }
    }

    /// Lexicographic sort; like shuffle, this intentionally breaks
    /// insertion order.
    pub fn sort(&mut self) {
        self.entries.sort_unstable_by(|a, b| a.as_str().cmp(b.as_str()));
    }

    /// Replace all contents with `names` (blanks and duplicates dropped).
    pub fn reset_to(&mut self, names: &[&str]) {
        self.entries.clear();
        self.present.clear();
        for name in names {
            self.add(name);
        }
    }
}
