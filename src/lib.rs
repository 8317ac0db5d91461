//! # playing-cards
//!
//! An in-memory model of a standard deck of playing cards, meant to be
//! embedded in a card game.
//!
//! ## Design Principles
//!
//! 1. **Cards know where they came from**: every card issued by a deck
//!    carries that deck's `DeckId`, fixed for its lifetime. Cards can be
//!    passed between decks freely; a deck can always hand back the ones
//!    that are not its own.
//!
//! 2. **Move-only cards**: `Card` is not `Clone`. Dealing transfers the
//!    card to the caller, and a dealt card that nobody keeps is gone.
//!
//! 3. **Seeded randomness**: each deck owns a ChaCha8 stream seeded once.
//!    Supplying a seed makes shuffles and inserts reproducible.
//!
//! 4. **Per-deck duplicate tracking**: every deck owns a `CardLedger` of
//!    the faces it issued. New native cards only come from
//!    `Deck::issue_card`, so a deck never issues the same face twice.
//!
//! ## Modules
//!
//! - `core`: Deck ids, RNG, configuration, errors
//! - `cards`: Ranks, suits, cards, and the ledger
//! - `deck`: The deck itself
//!
//! ## Usage
//!
//! ```
//! use playing_cards::{Deck, DeckConfig};
//!
//! let mut deck = Deck::new(DeckConfig::default().with_jokers());
//! assert_eq!(deck.size(), 54);
//!
//! while let Some(card) = deck.deal_card() {
//!     let _ = card.display_name();
//! }
//! assert!(deck.deal_card().is_none());
//! ```

pub mod cards;
pub mod core;
pub mod deck;

// Re-export commonly used types
pub use crate::core::{
    ace_policy, set_ace_policy, AcePolicy, CardError, DeckConfig, DeckId, DeckRng, DeckRngState,
    Result, STANDARD_DECK_SIZE_WITHOUT_JOKERS, STANDARD_DECK_SIZE_WITH_JOKERS,
};

pub use crate::cards::{Card, CardFace, CardLedger, Color, Rank, Suit};

pub use crate::deck::Deck;
