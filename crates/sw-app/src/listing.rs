//! Windowed listing use case.
//!
//! Projects the store through the active filter and the viewport's
//! window into the rows a list view actually materializes. The window
//! only bounds rendering cost; selection always runs on the full store.

use serde::Serialize;

use sw_core::view::window_range;
use sw_core::{EntryName, EntryStore, FilterPredicate, ViewIndex, Viewport};

/// One materialized list row. `store_index` is the canonical position
/// in the unfiltered store (used for removal).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryRow {
    pub store_index: usize,
    pub name: EntryName,
}

/// DTO handed to the list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryWindow {
    pub total_entries: usize,
    pub filtered_entries: usize,
    /// Filtered position of the first materialized row.
    pub window_start: usize,
    pub rows: Vec<EntryRow>,
}

pub fn build_window(
    store: &EntryStore,
    predicate: &FilterPredicate,
    viewport: &Viewport,
) -> EntryWindow {
    let index = ViewIndex::rebuild(store, predicate);
    let range = window_range(index.len(), viewport);
    let rows = index.indices()[range.clone()]
        .iter()
        .filter_map(|&store_index| {
            store.get(store_index).map(|name| EntryRow {
                store_index,
                name: name.clone(),
            })
        })
        .collect();
    EntryWindow {
        total_entries: store.len(),
        filtered_entries: index.len(),
        window_start: range.start,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_of(count: usize) -> EntryStore {
        let mut store = EntryStore::new();
        for i in 0..count {
            store.add(&format!("name-{i:04}"));
        }
        store
    }

    #[test]
    fn small_filtered_lists_materialize_fully() {
        let store = store_of(30);
        let window = build_window(&store, &FilterPredicate::new(""), &Viewport::default());
        assert_eq!(window.total_entries, 30);
        assert_eq!(window.filtered_entries, 30);
        assert_eq!(window.rows.len(), 30);
        assert_eq!(window.window_start, 0);
    }

    #[test]
    fn large_lists_materialize_a_window_only() {
        let store = store_of(2000);
        let viewport = Viewport {
            height: 400.0,
            row_height: 40.0,
            scroll_offset: 4000.0,
        };
        let window = build_window(&store, &FilterPredicate::new(""), &viewport);
        assert_eq!(window.filtered_entries, 2000);
        assert!(window.rows.len() < 2000);
        assert_eq!(window.window_start, 95);
    }

    #[test]
    fn window_is_consistent_with_the_filtered_order() {
        let store = store_of(500);
        let predicate = FilterPredicate::new("name-0");
        let viewport = Viewport {
            height: 200.0,
            row_height: 20.0,
            scroll_offset: 400.0,
        };
        let window = build_window(&store, &predicate, &viewport);

        let full = ViewIndex::rebuild(&store, &predicate);
        for (offset, row) in window.rows.iter().enumerate() {
            let filtered_position = window.window_start + offset;
            assert_eq!(full.get(filtered_position), Some(row.store_index));
        }
    }

    #[test]
    fn filter_narrows_but_window_start_clamps() {
        let store = store_of(100);
        // Ten matches: name-0000 .. name-0009 via the "name-000" prefix.
        let predicate = FilterPredicate::new("name-000");
        let window = build_window(&store, &predicate, &Viewport::default());
        assert_eq!(window.filtered_entries, 10);
        assert_eq!(window.rows.len(), 10);
        let names: Vec<_> = window.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names[0], "name-0000");
        assert_eq!(names[9], "name-0009");
    }
}
