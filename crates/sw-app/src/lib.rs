//! # sw-app
//!
//! Application layer for Spinwheel.
//!
//! Owns the live session state and serializes every mutation through a
//! single async mutex, mirroring the cooperative single-event-loop
//! model of the widget host. Each mutation publishes an immutable
//! [`sw_core::WheelSnapshot`] on a watch channel; rendering and
//! persistence collaborators subscribe to snapshots and never touch
//! live state.

pub mod input;
pub mod listing;
pub mod session;

pub use input::{map_key, Command, Key, KeyEvent};
pub use listing::{build_window, EntryRow, EntryWindow};
pub use session::WheelSession;
