//! Card ranks.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::config::AcePolicy;
use crate::core::error::CardError;

/// One of the 13 standard ranks, ordered Two..Ace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All ranks in ascending order. Decks are built in this order within a suit.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Short symbol used in card ids.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    /// Conventional name. Number cards keep their digits ("4"), court
    /// cards and aces are spelled out ("jack").
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Rank::Jack => "jack",
            Rank::Queen => "queen",
            Rank::King => "king",
            Rank::Ace => "ace",
            other => other.symbol(),
        }
    }

    /// Numeric value under the given Ace policy.
    ///
    /// Number cards are worth their face, J/Q/K are 11/12/13.
    #[must_use]
    pub const fn value(self, policy: AcePolicy) -> u8 {
        match self {
            Rank::Ace => policy.ace_value(),
            other => other as u8 + 2,
        }
    }
}

impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rank::ALL
            .into_iter()
            .find(|rank| rank.symbol() == s)
            .ok_or_else(|| CardError::InvalidRank { rank: s.to_string() })
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values() {
        assert_eq!(Rank::Two.value(AcePolicy::High), 2);
        assert_eq!(Rank::Ten.value(AcePolicy::High), 10);
        assert_eq!(Rank::Jack.value(AcePolicy::High), 11);
        assert_eq!(Rank::Queen.value(AcePolicy::Low), 12);
        assert_eq!(Rank::King.value(AcePolicy::High), 13);
        assert_eq!(Rank::Ace.value(AcePolicy::High), 14);
        assert_eq!(Rank::Ace.value(AcePolicy::Low), 1);
    }

    #[test]
    fn test_parse_symbols() {
        for rank in Rank::ALL {
            assert_eq!(rank.symbol().parse::<Rank>(), Ok(rank));
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(
            "12".parse::<Rank>(),
            Err(CardError::InvalidRank { rank: "12".into() })
        );
        assert!("T".parse::<Rank>().is_err());
        assert!("1".parse::<Rank>().is_err());
        assert!("j".parse::<Rank>().is_err());
    }

    #[test]
    fn test_names() {
        assert_eq!(Rank::Four.name(), "4");
        assert_eq!(Rank::Ten.name(), "10");
        assert_eq!(Rank::Jack.name(), "jack");
        assert_eq!(Rank::Ace.name(), "ace");
    }
}
