//! Playing cards.
//!
//! A `Card` is a face (rank + suit, or a Joker) plus an optional reference
//! to the deck that issued it. Both are fixed at construction: there is no
//! way to move a card to another deck after the fact, only to place it in
//! another deck's sequence as a foreign card.
//!
//! Cards are not `Clone`: each issued card exists once, and dealing a card
//! hands that single value to the caller.
//!
//! ```
//! use playing_cards::cards::{Card, Rank, Suit};
//!
//! let card = Card::new(Rank::Jack, Suit::Diamonds);
//! assert_eq!(card.id(), "JD");
//! assert_eq!(card.to_string(), "jack of diamonds");
//! assert_eq!(card.value(), Ok(11));
//! ```

use std::ops::Add;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ledger::CardLedger;
use super::rank::Rank;
use super::suit::{Color, Suit};
use crate::core::config::{ace_policy, AcePolicy};
use crate::core::entity::DeckId;
use crate::core::error::{CardError, Result};

/// Id and display name shared by all Jokers.
pub const JOKER: &str = "Joker";

/// What is printed on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardFace {
    /// One of the 52 rank/suit combinations.
    Standard { rank: Rank, suit: Suit },
    /// A wild card with no rank, suit, or value.
    Joker,
}

impl CardFace {
    /// Short id: "{rank}{suit}" (e.g. "4H", "10D"), or "Joker".
    #[must_use]
    pub fn id(self) -> String {
        match self {
            CardFace::Standard { rank, suit } => format!("{}{}", rank.symbol(), suit.symbol()),
            CardFace::Joker => JOKER.to_string(),
        }
    }
}

impl FromStr for CardFace {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self> {
        if s == JOKER {
            return Ok(CardFace::Joker);
        }

        let invalid = || CardError::InvalidCard { token: s.to_string() };

        // Suit symbols are a single ASCII letter; everything before it is the rank.
        if !s.is_ascii() || s.len() < 2 {
            return Err(invalid());
        }
        let (rank, suit) = s.split_at(s.len() - 1);
        let rank = rank.parse::<Rank>().map_err(|_| invalid())?;
        let suit = suit.parse::<Suit>().map_err(|_| invalid())?;
        Ok(CardFace::Standard { rank, suit })
    }
}

/// A single playing card.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Card {
    face: CardFace,
    deck: Option<DeckId>,
}

impl Card {
    /// Create a standalone card that belongs to no deck.
    #[must_use]
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            face: CardFace::Standard { rank, suit },
            deck: None,
        }
    }

    /// Create a standalone card from rank and suit symbols ("Q", "H").
    ///
    /// Fails with `InvalidRank` or `InvalidSuit` naming the valid symbols.
    pub fn parse(rank: &str, suit: &str) -> Result<Self> {
        Ok(Self::new(rank.parse()?, suit.parse()?))
    }

    /// Create a standalone Joker.
    #[must_use]
    pub fn joker() -> Self {
        Self {
            face: CardFace::Joker,
            deck: None,
        }
    }

    /// Issue a card for the deck that owns `ledger`.
    ///
    /// Issuing the same standard face twice fails with `DuplicateCard`.
    /// Jokers are not tracked, a deck may hold more than one.
    pub(crate) fn issue(face: CardFace, ledger: &mut CardLedger) -> Result<Self> {
        ledger.register(face)?;
        Ok(Self::native(face, ledger.deck()))
    }

    /// Build a card for `deck` without consulting its ledger. Only used
    /// while a deck creates its own cards.
    pub(crate) fn native(face: CardFace, deck: DeckId) -> Self {
        Self {
            face,
            deck: Some(deck),
        }
    }

    #[must_use]
    pub fn face(&self) -> CardFace {
        self.face
    }

    /// Rank, or `None` for a Joker.
    #[must_use]
    pub fn rank(&self) -> Option<Rank> {
        match self.face {
            CardFace::Standard { rank, .. } => Some(rank),
            CardFace::Joker => None,
        }
    }

    /// Suit, or `None` for a Joker.
    #[must_use]
    pub fn suit(&self) -> Option<Suit> {
        match self.face {
            CardFace::Standard { suit, .. } => Some(suit),
            CardFace::Joker => None,
        }
    }

    /// Color, or `None` for a Joker.
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        self.suit().map(Suit::color)
    }

    #[must_use]
    pub fn is_joker(&self) -> bool {
        self.face == CardFace::Joker
    }

    /// Short id such as "4H" or "Joker".
    #[must_use]
    pub fn id(&self) -> String {
        self.face.id()
    }

    /// Human-readable name such as "jack of diamonds" or "Joker".
    #[must_use]
    pub fn display_name(&self) -> String {
        self.to_string()
    }

    /// The deck that issued this card, if any.
    #[must_use]
    pub fn deck(&self) -> Option<DeckId> {
        self.deck
    }

    /// Always fails: a card's deck is fixed when it is issued.
    pub fn set_deck(&mut self, _deck: DeckId) -> Result<()> {
        Err(CardError::UnassignedAssignment)
    }

    /// Numeric value under the process-wide Ace policy.
    ///
    /// Fails with `NoNumericValue` for Jokers.
    pub fn value(&self) -> Result<u32> {
        self.value_with(ace_policy())
    }

    /// Numeric value under an explicit Ace policy.
    pub fn value_with(&self, policy: AcePolicy) -> Result<u32> {
        match self.face {
            CardFace::Standard { rank, .. } => Ok(u32::from(rank.value(policy))),
            CardFace::Joker => Err(CardError::NoNumericValue),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.face {
            CardFace::Standard { rank, suit } => write!(f, "{} of {}", rank.name(), suit.name()),
            CardFace::Joker => f.write_str(JOKER),
        }
    }
}

/// Parses a card id back into a standalone card.
impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self> {
        let face = s.parse::<CardFace>()?;
        Ok(Self { face, deck: None })
    }
}

impl Add for &Card {
    type Output = Result<u32>;

    fn add(self, other: Self) -> Self::Output {
        Ok(self.value()? + other.value()?)
    }
}

impl Add<u32> for &Card {
    type Output = Result<u32>;

    fn add(self, other: u32) -> Self::Output {
        Ok(self.value()? + other)
    }
}
