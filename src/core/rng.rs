//! Deterministic random number generation for agents.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Injectable**: Agents that randomize take a `GameRng` so tests can fix it
//! - **Forkable**: Independent streams for several agents from one seed
//!
//! ## Usage
//!
//! ```
//! use pursuit_search::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//!
//! // Fork a stream for a second agent
//! let mut other = rng.fork();
//!
//! // Original and fork produce different sequences
//! let items: Vec<u32> = (0..1000).collect();
//! let a: Vec<_> = (0..8).map(|_| *rng.choose(&items).unwrap()).collect();
//! let b: Vec<_> = (0..8).map(|_| *other.choose(&items).unwrap()).collect();
//! assert_ne!(a, b);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG used for tie-breaking and random adversaries.
///
/// Uses ChaCha8 for speed while keeping a reproducible stream.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent stream.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Choose a random element from a slice, uniformly.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(0)
    }
}
