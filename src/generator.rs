//! Random bar heights.
//!
//! Uniform heights in `MIN_HEIGHT..=MAX_HEIGHT`. A seed makes the
//! sequence reproducible across runs (used by `trace` and the tests).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{MAX_HEIGHT, MIN_HEIGHT};

/// Produces fresh bar sequences of a fixed length.
#[derive(Debug)]
pub struct ArrayGenerator {
    len: usize,
    rng: StdRng,
}

impl ArrayGenerator {
    /// Create a generator for `len` bars. `None` seeds from OS entropy.
    pub fn new(len: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        ArrayGenerator { len, rng }
    }

    /// Number of bars each call to [`generate`](Self::generate) produces.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Draw a new sequence of heights.
    pub fn generate(&mut self) -> Vec<u32> {
        (0..self.len)
            .map(|_| self.rng.gen_range(MIN_HEIGHT..=MAX_HEIGHT))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_requested_length_within_range() {
        let mut generator = ArrayGenerator::new(500, None);
        let values = generator.generate();
        assert_eq!(values.len(), 500);
        assert!(values.iter().all(|v| (MIN_HEIGHT..=MAX_HEIGHT).contains(v)));
    }

    #[test]
    fn same_seed_same_sequence() {
        let a = ArrayGenerator::new(32, Some(7)).generate();
        let b = ArrayGenerator::new(32, Some(7)).generate();
        assert_eq!(a, b);
    }

    #[test]
    fn successive_draws_differ() {
        let mut generator = ArrayGenerator::new(64, Some(1));
        let first = generator.generate();
        let second = generator.generate();
        assert_ne!(first, second);
    }

    #[test]
    fn zero_length_generator_is_empty() {
        let mut generator = ArrayGenerator::new(0, Some(3));
        assert!(generator.is_empty());
        assert!(generator.generate().is_empty());
    }
}
