use rand::Rng;

use sw_core::ports::RandomnessPort;

/// Thread-local PRNG behind the randomness port. Not cryptographically
/// secure, and does not need to be.
pub struct ThreadRngRandomness;

impl RandomnessPort for ThreadRngRandomness {
    fn next_unit(&self) -> f64 {
        rand::rng().random::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_stay_in_the_unit_interval() {
        let randomness = ThreadRngRandomness;
        for _ in 0..10_000 {
            let sample = randomness.next_unit();
            assert!((0.0..1.0).contains(&sample), "sample {sample} out of range");
        }
    }
}
