//! Error type shared by cards, ledgers, and decks.
//!
//! Every failure is surfaced to the caller; nothing here retries. Messages
//! name the offending value and, where one exists, the valid domain.

use thiserror::Error;

use super::entity::DeckId;

/// Errors raised by card and deck operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank symbol outside the 13 standard ranks.
    #[error("\"{rank}\" not a valid Card rank! Valid Card ranks: [2, 3, 4, 5, 6, 7, 8, 9, 10, J, Q, K, A]")]
    InvalidRank { rank: String },

    /// Suit symbol outside the 4 standard suits.
    #[error("\"{suit}\" not a valid suit! Valid suits: [C, S, H, D]")]
    InvalidSuit { suit: String },

    /// A card with this id is already associated with the deck.
    #[error("Card {id} already exists in {deck}")]
    DuplicateCard { id: String, deck: DeckId },

    /// Deck association is fixed when a card is issued.
    #[error("Cannot assign a Deck! Decks are only assigned when Cards are created by a Deck")]
    UnassignedAssignment,

    /// Jokers carry no rank.
    #[error("Jokers do not have a numeric value!")]
    NoNumericValue,

    /// Token does not describe a card.
    #[error("\"{token}\" is not a Card! Expected a rank followed by a suit (e.g. 4H, 10D) or Joker")]
    InvalidCard { token: String },
}

/// Result alias for card and deck operations.
pub type Result<T> = std::result::Result<T, CardError>;
