//! Injectable randomness for reply picks and proactive rolls.

#[cfg(test)]
#[path = "random_test.rs"]
mod random_test;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub trait RandomSource {
    /// Uniform sample in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    fn pick_index(&mut self, len: usize) -> usize {
        let scaled = (self.next_unit() * len as f64).floor() as usize;
        scaled.min(len.saturating_sub(1))
    }
}

/// Seeded `SmallRng`. The browser host seeds from the clock; tests pick a
/// fixed seed.
#[derive(Debug, Clone)]
pub struct SeededRandom(SmallRng);

impl SeededRandom {
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.0.random::<f64>()
    }

    fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.0.random_range(0..len)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }

    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}
