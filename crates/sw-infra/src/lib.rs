//! # sw-infra
//!
//! Infrastructure adapters behind the sw-core ports: wall-clock time,
//! OS randomness and configuration loading.

mod config;
mod random;
mod time;

pub use config::load_config_or_default;
pub use random::ThreadRngRandomness;
pub use time::SystemClock;
