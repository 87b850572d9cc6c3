//! # sw-core
//!
//! Core domain models and selection logic for Spinwheel.
//!
//! This crate contains pure business logic without any infrastructure
//! dependencies: the entry store, sector geometry, the spin state machine,
//! the bounded history ledger and the filter/window view index. Runtime
//! behaviors like the resolution timer and cooperative import scheduling
//! are handled by the application layer (sw-app).

// Public module exports
pub mod config;
pub mod entries;
pub mod history;
pub mod ports;
pub mod snapshot;
pub mod spin;
pub mod view;
pub mod wheel;

// Re-export commonly used types at the crate root
pub use config::{ConfigError, ImportTuning, SpinTuning, WheelConfig};
pub use entries::{EntryName, EntryStore};
pub use history::{HistoryLedger, HistoryRecord};
pub use snapshot::{PersistedWheel, WheelSnapshot};
pub use spin::{SpinPhase, SpinRejection, SpinSample, SpinWheel};
pub use view::{FilterPredicate, ViewIndex, Viewport};
