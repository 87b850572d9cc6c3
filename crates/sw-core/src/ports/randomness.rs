/// Source of uniform random samples.
///
/// One sample per draw, uniform over `[0, 1)`. Spins consume exactly two
/// samples (turn count, then resting angle), shuffles consume one per
/// swap, so a scripted implementation can replay any outcome.
pub trait RandomnessPort: Send + Sync {
    fn next_unit(&self) -> f64;
}
