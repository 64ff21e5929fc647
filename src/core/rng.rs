//! Seeded random number generation for the fallback move.
//!
//! The search itself is deterministic. Randomness only picks the move that is
//! played when not even the shallowest search finishes in time, and that pick
//! is reproducible for a given seed.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG owned by a move selector.
///
/// Uses ChaCha8 for speed; the same seed yields the same sequence of picks.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }

    /// Restart the sequence from the original seed.
    pub fn reseed(&mut self) {
        self.inner = ChaCha8Rng::seed_from_u64(self.seed);
    }
}
