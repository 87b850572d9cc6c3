//! Spin state machine and winner resolution.
//!
//! Design principle: this is a pure state machine with only state
//! definitions and transition logic. Runtime behaviors (the fixed-delay
//! resolution timer, history recording, snapshot publication) are
//! handled by the application layer (sw-app).
//!
//! State transitions:
//! ```text
//!   Idle ──spin──► Spinning ──resolve──► Resolved ──dismiss──► Idle
//!                     │                     │
//!                     │ (store emptied)     └──spin──► Spinning
//!                     └──resolve──► Idle
//! ```
//! The accumulated rotation is separate from the phase and strictly
//! increases across spins; it is never reset, so consecutive spins
//! compose visually regardless of the resting position.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SpinTuning;
use crate::entries::{EntryName, EntryStore};
use crate::ports::RandomnessPort;
use crate::wheel::segment_angle;

/// Why a `spin()` request was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpinRejection {
    #[error("cannot spin an empty wheel")]
    NoEntries,
    #[error("a spin is already in flight")]
    AlreadySpinning,
}

/// The two uniform draws that fully determine a spin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpinSample {
    /// Full turns, uniform over `[min_rotations, max_rotations)`.
    pub rotations: f64,
    /// Resting angle, uniform over `[0, 360)` degrees.
    pub angle: f64,
}

impl SpinSample {
    pub fn draw(tuning: &SpinTuning, randomness: &dyn RandomnessPort) -> Self {
        let span = tuning.max_rotations - tuning.min_rotations;
        Self {
            rotations: tuning.min_rotations + randomness.next_unit() * span,
            angle: randomness.next_unit() * 360.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SpinPhase {
    Idle,
    Spinning {
        target_rotation: f64,
        started_at_ms: i64,
    },
    Resolved {
        winner: EntryName,
    },
}

/// Rotation state plus the spin phase machine.
#[derive(Debug, Clone)]
pub struct SpinWheel {
    rotation: f64,
    phase: SpinPhase,
}

impl Default for SpinWheel {
    fn default() -> Self {
        Self {
            rotation: 0.0,
            phase: SpinPhase::Idle,
        }
    }
}

impl SpinWheel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulated rotation in degrees. While spinning this is already
    /// the target the wheel is animating toward.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn phase(&self) -> &SpinPhase {
        &self.phase
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.phase, SpinPhase::Spinning { .. })
    }

    pub fn current_winner(&self) -> Option<&EntryName> {
        match &self.phase {
            SpinPhase::Resolved { winner } => Some(winner),
            _ => None,
        }
    }

    /// Start a spin. The previous result (if any) is discarded as the
    /// wheel enters `Spinning`. Returns the new target rotation.
    pub fn begin_spin(
        &mut self,
        entry_count: usize,
        sample: SpinSample,
        now_ms: i64,
    ) -> Result<f64, SpinRejection> {
        if self.is_spinning() {
            return Err(SpinRejection::AlreadySpinning);
        }
        if entry_count == 0 {
            return Err(SpinRejection::NoEntries);
        }
        let target = self.rotation + sample.rotations * 360.0 + sample.angle;
        self.rotation = target;
        self.phase = SpinPhase::Spinning {
            target_rotation: target,
            started_at_ms: now_ms,
        };
        Ok(target)
    }

    /// Map a resting rotation to the sector under the fixed top pointer.
    ///
    /// The wheel rotates clockwise while the pointer stays put, so the
    /// winning sector is the one whose position measured *against* the
    /// rotation direction lands at 0°. The clamp guards the float edge
    /// where `normalized / segment` rounds up to `n`.
    pub fn winner_index(target_rotation: f64, entry_count: usize) -> Option<usize> {
        if entry_count == 0 {
            return None;
        }
        let normalized = (360.0 - target_rotation.rem_euclid(360.0)).rem_euclid(360.0);
        let index = (normalized / segment_angle(entry_count)).floor() as usize;
        Some(index.min(entry_count - 1))
    }

    /// Resolve the in-flight spin against the store as it is *now*.
    ///
    /// Entries may have been added or removed during the spin window;
    /// resolution deliberately uses the current store, and yields no
    /// winner at all if the store emptied meanwhile. No-op unless the
    /// phase is `Spinning`.
    pub fn resolve(&mut self, entries: &EntryStore) -> Option<EntryName> {
        let SpinPhase::Spinning {
            target_rotation, ..
        } = &self.phase
        else {
            return None;
        };
        let target_rotation = *target_rotation;
        let winner = Self::winner_index(target_rotation, entries.len())
            .and_then(|index| entries.get(index))
            .cloned();
        match &winner {
            Some(winner) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(winner = %winner, target_rotation, "spin resolved");
                self.phase = SpinPhase::Resolved {
                    winner: winner.clone(),
                };
            }
            None => {
                self.phase = SpinPhase::Idle;
            }
        }
        winner
    }

    /// Drop the shown result.
    pub fn dismiss(&mut self) {
        if matches!(self.phase, SpinPhase::Resolved { .. }) {
            self.phase = SpinPhase::Idle;
        }
    }

    /// Abandon an in-flight spin without resolving (session reset).
    /// Rotation is kept so the next spin still composes forward.
    pub fn abort(&mut self) {
        self.phase = SpinPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_of(names: &[&str]) -> EntryStore {
        let mut store = EntryStore::new();
        for name in names {
            store.add(name);
        }
        store
    }

    fn sample(rotations: f64, angle: f64) -> SpinSample {
        SpinSample { rotations, angle }
    }

    #[test]
    fn worked_example_725_degrees_selects_d() {
        // 725 mod 360 = 5; (360 − 5) mod 360 = 355; 355 / 90 → 3.
        assert_eq!(SpinWheel::winner_index(725.0, 4), Some(3));
    }

    #[test]
    fn zero_angle_selects_the_first_entry() {
        assert_eq!(SpinWheel::winner_index(720.0, 4), Some(0));
    }

    #[test]
    fn winner_index_is_always_in_range() {
        for n in [1usize, 2, 3, 7, 100] {
            for tenth in 0..3600 {
                let rotation = tenth as f64 / 10.0;
                let index = SpinWheel::winner_index(rotation, n).unwrap();
                assert!(index < n, "rotation={rotation} n={n} index={index}");
            }
        }
    }

    #[test]
    fn empty_wheel_has_no_winner_index() {
        assert_eq!(SpinWheel::winner_index(123.0, 0), None);
    }

    #[test]
    fn begin_spin_rejects_empty_wheel() {
        let mut wheel = SpinWheel::new();
        let err = wheel.begin_spin(0, sample(5.0, 10.0), 0).unwrap_err();
        assert_eq!(err, SpinRejection::NoEntries);
        assert_eq!(wheel.rotation(), 0.0);
    }

    #[test]
    fn begin_spin_rejects_while_spinning() {
        let mut wheel = SpinWheel::new();
        wheel.begin_spin(4, sample(5.0, 10.0), 0).unwrap();
        let err = wheel.begin_spin(4, sample(5.0, 10.0), 1).unwrap_err();
        assert_eq!(err, SpinRejection::AlreadySpinning);
    }

    #[test]
    fn rotation_strictly_increases_across_spins() {
        let mut wheel = SpinWheel::new();
        let store = store_of(&["A", "B"]);
        let mut previous = 0.0;
        for i in 0..5 {
            let target = wheel.begin_spin(2, sample(5.0, 0.25), i).unwrap();
            assert!(target > previous, "spin {i}: {target} <= {previous}");
            previous = target;
            wheel.resolve(&store);
        }
    }

    #[test]
    fn resolve_uses_the_store_at_resolution_time() {
        let mut wheel = SpinWheel::new();
        let mut store = store_of(&["A", "B", "C", "D"]);
        // Target 1805: normalized angle 355. With 4 entries that's D;
        // after shrinking to 2 entries the 180° sectors make it B.
        wheel.begin_spin(store.len(), sample(5.0, 5.0), 0).unwrap();
        store.remove("C");
        store.remove("D");
        let winner = wheel.resolve(&store).unwrap();
        assert_eq!(winner.as_str(), "B");
    }

    #[test]
    fn resolve_on_emptied_store_returns_to_idle() {
        let mut wheel = SpinWheel::new();
        let mut store = store_of(&["A"]);
        wheel.begin_spin(1, sample(5.0, 5.0), 0).unwrap();
        store.remove("A");
        assert_eq!(wheel.resolve(&store), None);
        assert_eq!(*wheel.phase(), SpinPhase::Idle);
    }

    #[test]
    fn result_is_held_until_dismissed_or_respun() {
        let mut wheel = SpinWheel::new();
        let store = store_of(&["A", "B", "C", "D"]);
        wheel.begin_spin(store.len(), sample(5.0, 5.0), 0).unwrap();
        wheel.resolve(&store);
        assert_eq!(wheel.current_winner().unwrap().as_str(), "D");
        // A new spin clears the shown result.
        wheel.begin_spin(store.len(), sample(5.0, 0.0), 1).unwrap();
        assert_eq!(wheel.current_winner(), None);
        assert!(wheel.is_spinning());
    }

    #[test]
    fn dismiss_only_acts_on_a_resolved_phase() {
        let mut wheel = SpinWheel::new();
        let store = store_of(&["A"]);
        wheel.dismiss();
        assert_eq!(*wheel.phase(), SpinPhase::Idle);
        wheel.begin_spin(1, sample(5.0, 5.0), 0).unwrap();
        wheel.dismiss();
        assert!(wheel.is_spinning());
        wheel.resolve(&store);
        wheel.dismiss();
        assert_eq!(*wheel.phase(), SpinPhase::Idle);
    }

    #[test]
    fn abort_keeps_rotation_for_forward_composition() {
        let mut wheel = SpinWheel::new();
        let target = wheel.begin_spin(3, sample(6.0, 90.0), 0).unwrap();
        wheel.abort();
        assert_eq!(*wheel.phase(), SpinPhase::Idle);
        assert_eq!(wheel.rotation(), target);
    }

    #[test]
    fn sample_draw_respects_tuning_bounds() {
        struct HalfUnit;
        impl RandomnessPort for HalfUnit {
            fn next_unit(&self) -> f64 {
                0.5
            }
        }
        let tuning = SpinTuning::default();
        let sample = SpinSample::draw(&tuning, &HalfUnit);
        assert_eq!(sample.rotations, 7.5);
        assert_eq!(sample.angle, 180.0);
    }
}
