use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Uniform sampler over the whole board, deterministic for a given seed.
#[derive(Clone, Debug)]
pub struct RandomSampler<R = SmallRng> {
    rng: R,
}

impl RandomSampler<SmallRng> {
    pub fn seed_from_u64(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MineSampler for RandomSampler<R> {
    fn sample(&mut self, (rows, cols): Coord2) -> Coord2 {
        (self.rng.random_range(0..rows), self.rng.random_range(0..cols))
    }
}
