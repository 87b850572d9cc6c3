//! Entry domain models.

mod entry;
mod store;

pub use entry::EntryName;
pub use store::{EntryStore, DEFAULT_ENTRIES};
