//! Null-model sampler for the permutation test.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

///
/// Draws the random variant samples that make up the null distribution.
///
/// Each sample contains `n` positions drawn uniformly with replacement from
/// `[1, length)`. The sampler holds only a base seed; the generator for
/// permutation `i` is derived from `(seed, i)`, so samples are mutually
/// independent, reproducible for a fixed seed, and can be generated in any
/// order — which is what lets the run loop go wide over permutations.
///
#[derive(Debug, Clone)]
pub struct NullSampler {
    n: usize,
    length: u32,
    seed: u64,
}

impl NullSampler {
    pub fn new(n: usize, length: u32, seed: u64) -> NullSampler {
        NullSampler { n, length, seed }
    }

    /// Sampler with a seed drawn from OS entropy, for the default
    /// non-deterministic behavior.
    pub fn from_entropy(n: usize, length: u32) -> NullSampler {
        NullSampler::new(n, length, rand::rng().random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw the sample for permutation `index`.
    pub fn sample(&self, index: u64) -> Vec<u32> {
        // seed_from_u64 runs the input through SplitMix64, so consecutive
        // indices yield unrelated streams
        let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(index));
        (0..self.n)
            .map(|_| rng.random_range(1..self.length))
            .collect()
    }
}
