use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DEFAULT_SEED: u64 = 3819201;

/// Source of randomness used to break ties between equally good moves.
pub trait RandomGenerator: Default {
    /// Returns a uniformly distributed index in `0..len`. `len` must be non-zero.
    fn next_index(&mut self, len: usize) -> usize;

    /// Picks one element uniformly at random, or `None` for an empty slice.
    fn choose<'a, K>(&mut self, items: &'a [K]) -> Option<&'a K> {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_index(items.len()))
    }
}

/// Draws from the thread-local generator seeded by the operating system.
#[derive(Debug, Default)]
pub struct StandardRandomGenerator;

impl RandomGenerator for StandardRandomGenerator {
    fn next_index(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Deterministic generator for reproducible searches and tests.
#[derive(Debug)]
pub struct SeededRandomGenerator {
    rng: StdRng,
}

impl Default for SeededRandomGenerator {
    fn default() -> Self {
        SeededRandomGenerator::new(DEFAULT_SEED)
    }
}

impl RandomGenerator for SeededRandomGenerator {
    fn next_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

impl SeededRandomGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}
