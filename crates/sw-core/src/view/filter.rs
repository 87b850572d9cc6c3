use crate::entries::EntryName;

/// Unfiltered entry count above which the UI surfaces the filter box.
/// Engine-level filtering itself is always available.
pub const FILTER_UI_THRESHOLD: usize = 20;

pub fn filter_controls_visible(unfiltered_count: usize) -> bool {
    unfiltered_count > FILTER_UI_THRESHOLD
}

/// Case-insensitive substring match against the entry label.
/// An empty predicate passes everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPredicate {
    needle: String,
}

impl FilterPredicate {
    pub fn new(text: &str) -> Self {
        Self {
            needle: text.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// The predicate text as typed (lowercased).
    pub fn text(&self) -> &str {
        &self.needle
    }

    pub fn matches(&self, name: &EntryName) -> bool {
        self.needle.is_empty() || name.as_str().to_lowercase().contains(&self.needle)
    }
}
