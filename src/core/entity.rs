//! Deck identification.
//!
//! Every `Deck` gets a process-unique `DeckId` when it is built. Cards
//! remember the id of the deck that issued them, which is how a deck tells
//! its own (native) cards apart from foreign ones.
//!
//! ## Usage
//!
//! ```
//! use playing_cards::core::DeckId;
//!
//! let a = DeckId::next();
//! let b = DeckId::next();
//! assert_ne!(a, b);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

static NEXT_DECK_ID: AtomicU64 = AtomicU64::new(0);

/// Unique identifier for a deck.
///
/// Ids are only minted by `DeckId::next` and never reused within a process,
/// so a card's deck reference can never be confused with another deck.
/// No constructor takes a raw number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct DeckId(u64);

impl DeckId {
    /// Allocate a fresh deck id.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_DECK_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for DeckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Deck({})", self.0)
    }
}
