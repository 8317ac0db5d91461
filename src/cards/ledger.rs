//! Card ledger for duplicate detection.
//!
//! Every `Deck` owns the `CardLedger` for its id. The ledger records which
//! standard faces the deck has issued, and it is the only way a card with
//! a deck reference gets created, so no deck can end up with two native
//! copies of a face. The ledger lives and dies with its deck; nothing is
//! kept in global state.

use rustc_hash::FxHashSet;

use super::card::{Card, CardFace};
use super::rank::Rank;
use super::suit::Suit;
use crate::core::entity::DeckId;
use crate::core::error::{CardError, Result};

/// Registry of the standard faces issued for one deck.
///
/// ## Example
///
/// ```
/// use playing_cards::cards::{CardFace, Rank, Suit};
/// use playing_cards::Deck;
///
/// let mut deck = Deck::standard();
/// let face = CardFace::Standard { rank: Rank::Ace, suit: Suit::Spades };
///
/// assert!(deck.ledger().contains(face));
/// assert!(deck.issue_card(face).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct CardLedger {
    deck: DeckId,
    entries: FxHashSet<(Rank, Suit)>,
}

impl CardLedger {
    /// Create an empty ledger for `deck`.
    pub(crate) fn new(deck: DeckId) -> Self {
        Self {
            deck,
            entries: FxHashSet::default(),
        }
    }

    /// Create a ledger already holding the faces of `cards`.
    pub(crate) fn from_cards(deck: DeckId, cards: &[Card]) -> Self {
        let entries = cards
            .iter()
            .filter_map(|card| match card.face() {
                CardFace::Standard { rank, suit } => Some((rank, suit)),
                CardFace::Joker => None,
            })
            .collect();
        Self { deck, entries }
    }

    /// The deck this ledger belongs to.
    #[must_use]
    pub fn deck(&self) -> DeckId {
        self.deck
    }

    /// Record that `face` has been issued for this ledger's deck.
    ///
    /// Fails with `DuplicateCard` if it already was. Jokers are accepted
    /// without being recorded.
    pub(crate) fn register(&mut self, face: CardFace) -> Result<()> {
        let CardFace::Standard { rank, suit } = face else {
            return Ok(());
        };

        if !self.entries.insert((rank, suit)) {
            return Err(CardError::DuplicateCard {
                id: face.id(),
                deck: self.deck,
            });
        }
        Ok(())
    }

    /// Check whether `face` has been issued for this deck.
    #[must_use]
    pub fn contains(&self, face: CardFace) -> bool {
        match face {
            CardFace::Standard { rank, suit } => self.entries.contains(&(rank, suit)),
            CardFace::Joker => false,
        }
    }

    /// Number of recorded faces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the ledger is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
