//! Deterministic random number generation for role, word and turn-order draws.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Injectable**: The engine only sees the [`Randomness`] trait, so tests can
//!   script exact picks and permutations
//!
//! ```
//! use insider::core::{GameRng, Randomness};
//!
//! let mut rng = GameRng::new(42);
//! let mut order = vec![0, 1, 2, 3];
//! rng.shuffle(&mut order);
//!
//! let mut again = GameRng::new(42);
//! let mut same = vec![0, 1, 2, 3];
//! again.shuffle(&mut same);
//! assert_eq!(order, same);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of randomness consumed by the engine.
///
/// Every random decision in a game goes through one of these two calls:
/// picking the insider, picking the word pair, shuffling clue order and
/// the zero-ballot fallback.
pub trait Randomness {
    /// Uniform index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;

    /// Fisher-Yates shuffle: walk from the back, swap `i` with a uniform `j` in `0..=i`.
    fn shuffle(&mut self, items: &mut [usize]) {
        for i in (1..items.len()).rev() {
            let j = self.pick(i + 1);
            items.swap(i, j);
        }
    }
}

impl<R: Randomness + ?Sized> Randomness for &mut R {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }

    fn shuffle(&mut self, items: &mut [usize]) {
        (**self).shuffle(items)
    }
}

/// Seedable ChaCha8 generator.
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

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this generator was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Randomness for GameRng {
    fn pick(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}
