mod thread_rng;

pub use thread_rng::ThreadRngRandomness;
