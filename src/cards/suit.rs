//! Card suits and colors.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::CardError;

/// Card color, derived from the suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Color::Red => "red",
            Color::Black => "black",
        })
    }
}

/// One of the four standard suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Spades,
    Hearts,
    Diamonds,
}

impl Suit {
    /// All suits, in deck construction order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Spades, Suit::Hearts, Suit::Diamonds];

    /// Single-letter symbol used in card ids.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Suit::Clubs => "C",
            Suit::Spades => "S",
            Suit::Hearts => "H",
            Suit::Diamonds => "D",
        }
    }

    /// Conventional plural name ("hearts").
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "clubs",
            Suit::Spades => "spades",
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
        }
    }

    /// Hearts and diamonds are red, clubs and spades black.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }
}

impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Suit::ALL
            .into_iter()
            .find(|suit| suit.symbol() == s)
            .ok_or_else(|| CardError::InvalidSuit { suit: s.to_string() })
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors() {
        assert_eq!(Suit::Hearts.color(), Color::Red);
        assert_eq!(Suit::Diamonds.color(), Color::Red);
        assert_eq!(Suit::Clubs.color(), Color::Black);
        assert_eq!(Suit::Spades.color(), Color::Black);
    }

    #[test]
    fn test_parse() {
        for suit in Suit::ALL {
            assert_eq!(suit.symbol().parse::<Suit>(), Ok(suit));
        }
        assert_eq!(
            "Hearts".parse::<Suit>(),
            Err(CardError::InvalidSuit { suit: "Hearts".into() })
        );
        assert!("h".parse::<Suit>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Suit::Spades.to_string(), "S");
        assert_eq!(Suit::Spades.name(), "spades");
        assert_eq!(Color::Red.to_string(), "red");
    }
}
