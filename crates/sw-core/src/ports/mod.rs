//! Port interfaces for the application layer
//!
//! Ports define the contract between the selection logic and its
//! environment. The domain never reads the system clock or a random
//! number generator directly; both come in through these seams so a
//! resolved spin is reproducible from its inputs.

mod clock;
mod randomness;

pub use clock::ClockPort;
pub use randomness::RandomnessPort;
