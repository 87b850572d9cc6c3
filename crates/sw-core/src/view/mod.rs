//! Filtered, windowed views over the entry store.
//!
//! Filtering and windowing only bound rendering cost; the wheel's
//! selection set is always the full unfiltered store.

mod filter;
mod window;

pub use filter::{filter_controls_visible, FilterPredicate, FILTER_UI_THRESHOLD};
pub use window::{window_range, Viewport, WINDOWING_THRESHOLD, WINDOW_BUFFER_ROWS};

use crate::entries::EntryStore;

/// Ordered store indices matching the active filter.
///
/// Rebuilt whenever the store or the predicate changes; positions in
/// the index are display positions, values are canonical store indices.
#[derive(Debug, Clone, Default)]
pub struct ViewIndex {
    indices: Vec<usize>,
}

impl ViewIndex {
    pub fn rebuild(store: &EntryStore, predicate: &FilterPredicate) -> Self {
        let indices = store
            .iter()
            .enumerate()
            .filter(|(_, name)| predicate.matches(name))
            .map(|(index, _)| index)
            .collect();
        Self { indices }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Store index displayed at `position`.
    pub fn get(&self, position: usize) -> Option<usize> {
        self.indices.get(position).copied()
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }
}
