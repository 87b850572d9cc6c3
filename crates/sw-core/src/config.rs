//! Engine configuration domain model.
//!
//! Only scheduling knobs live here. Geometry density thresholds are a
//! rendering contract and stay as constants in [`crate::wheel`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("spin.max_rotations must be greater than spin.min_rotations")]
    InvalidRotationRange,
    #[error("spin.duration_ms must be non-zero")]
    ZeroSpinDuration,
    #[error("import.chunk_size must be non-zero")]
    ZeroChunkSize,
    #[error("history_capacity must be non-zero")]
    ZeroHistoryCapacity,
}

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    pub spin: SpinTuning,
    pub import: ImportTuning,
    /// Number of past winners retained.
    pub history_capacity: usize,
}

/// Spin randomization and timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinTuning {
    /// Delay between spin start and winner resolution. This is a
    /// contract with the presentation layer's spin animation: the two
    /// must match or the visual wheel position and the computed winner
    /// disagree.
    pub duration_ms: u64,
    pub min_rotations: f64,
    pub max_rotations: f64,
}

/// Bulk import batching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportTuning {
    /// Imports up to this many new names are applied atomically.
    pub atomic_limit: usize,
    /// Larger imports are applied in chunks of this size, yielding to
    /// the scheduler between chunks.
    pub chunk_size: usize,
}

impl Default for SpinTuning {
    fn default() -> Self {
        Self {
            duration_ms: 3000,
            min_rotations: 5.0,
            max_rotations: 10.0,
        }
    }
}

impl Default for ImportTuning {
    fn default() -> Self {
        Self {
            atomic_limit: 500,
            chunk_size: 100,
        }
    }
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            spin: SpinTuning::default(),
            import: ImportTuning::default(),
            history_capacity: crate::history::HISTORY_CAPACITY,
        }
    }
}

impl WheelConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.spin.max_rotations <= self.spin.min_rotations {
            return Err(ConfigError::InvalidRotationRange);
        }
        if self.spin.duration_ms == 0 {
            return Err(ConfigError::ZeroSpinDuration);
        }
        if self.import.chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }
        if self.history_capacity == 0 {
            return Err(ConfigError::ZeroHistoryCapacity);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(WheelConfig::default().validate(), Ok(()));
    }

    #[test]
    fn default_spin_matches_the_animation_contract() {
        let tuning = SpinTuning::default();
        assert_eq!(tuning.duration_ms, 3000);
        assert_eq!(tuning.min_rotations, 5.0);
        assert_eq!(tuning.max_rotations, 10.0);
    }

    #[test]
    fn inverted_rotation_range_is_rejected() {
        let mut config = WheelConfig::default();
        config.spin.min_rotations = 10.0;
        config.spin.max_rotations = 5.0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidRotationRange));
    }

    #[test]
    fn partial_documents_fall_back_to_defaults() {
        let config: WheelConfig = serde_json::from_str(r#"{"spin":{"duration_ms":1500}}"#).unwrap();
        assert_eq!(config.spin.duration_ms, 1500);
        assert_eq!(config.spin.min_rotations, 5.0);
        assert_eq!(config.import.chunk_size, 100);
    }
}
