//! Seeded random number generation for shuffling and random insertion.
//!
//! Each `Deck` owns one `DeckRng`, seeded once and reused for every shuffle
//! and insert. Passing an explicit seed makes a deck's behaviour fully
//! reproducible, which is what the tests rely on.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Forkable**: Derive independent streams for sibling decks
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use playing_cards::core::DeckRng;
//!
//! let mut a = DeckRng::new(42);
//! let mut b = DeckRng::new(42);
//! assert_eq!(a.gen_index(52), b.gen_index(52));
//!
//! // Forks are independent of the parent but reproducible
//! let mut child = a.fork();
//! let _ = child.gen_index(52);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG owned by a deck.
///
/// Uses ChaCha8 for speed while keeping every index uniformly distributed.
#[derive(Clone, Debug)]
pub struct DeckRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl DeckRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
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

    /// Uniform index into a sequence of length `len`, i.e. in `[0, len)`.
    ///
    /// Returns `None` when `len` is zero.
    pub fn gen_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.inner.gen_range(0..len))
        }
    }

    /// Uniform insertion position for a sequence of length `len`, i.e. in `[0, len]`.
    pub fn gen_position(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..=len)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> DeckRngState {
        DeckRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &DeckRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}
