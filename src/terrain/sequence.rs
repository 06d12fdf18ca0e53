use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed-keyed random source. ChaCha8 keeps the stream stable across platforms, so a seed always
/// reproduces the same terrain.
#[derive(Debug, Clone)]
pub struct SequenceGenerator {
    rng: ChaCha8Rng,
}

impl SequenceGenerator {
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(u64::from(seed)),
        }
    }

    /// Seeds from ambient entropy, for sessions that did not ask for a fixed layout.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }

    /// Uniform draw over `[-amplitude, amplitude]`.
    pub fn symmetric(&mut self, amplitude: f64) -> f64 {
        let amplitude = amplitude.abs();
        if amplitude == 0.0 || !amplitude.is_finite() {
            return 0.0;
        }
        self.rng.random_range(-amplitude..=amplitude)
    }

    /// Uniform draw over `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Uniform draw over `[lo, hi)`; returns `lo` for an empty range.
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        if hi <= lo {
            return lo;
        }
        self.rng.random_range(lo..hi)
    }

    pub fn next_seed(&mut self) -> u32 {
        self.rng.random()
    }
}
