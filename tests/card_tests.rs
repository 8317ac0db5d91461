//! Card behaviour as seen by a hosting game.
//!
//! Covers:
//! - Validation of ranks and suits
//! - Ids, names, and parsing ids back
//! - Write-once deck references
//! - Jokers

use playing_cards::{Card, CardError, CardFace, Color, Deck, DeckConfig, Rank, Suit};
use proptest::prelude::*;

/// Every valid (rank, suit) pair has a short, unique id that parses back.
#[test]
fn test_ids_unique_and_round_trip() {
    let mut seen = Vec::new();

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            let card = Card::new(rank, suit);
            let id = card.id();

            assert!((2..=3).contains(&id.len()), "{id} has unexpected length");
            assert!(!seen.contains(&id), "{id} is not unique");

            let parsed: Card = id.parse().unwrap();
            assert_eq!(parsed.rank(), Some(rank));
            assert_eq!(parsed.suit(), Some(suit));

            seen.push(id);
        }
    }

    assert_eq!(seen.len(), 52);
}

#[test]
fn test_invalid_rank_lists_valid_ranks() {
    let err = Card::parse("12", "D").unwrap_err();
    assert!(matches!(err, CardError::InvalidRank { .. }));

    let msg = err.to_string();
    assert!(msg.contains("not a valid Card rank"));
    assert!(msg.contains("2, 3, 4, 5, 6, 7, 8, 9, 10, J, Q, K, A"));
}

#[test]
fn test_invalid_suit_lists_valid_suits() {
    let err = Card::parse("8", "Hearts").unwrap_err();
    assert!(matches!(err, CardError::InvalidSuit { .. }));
    assert!(err.to_string().contains("not a valid suit"));
}

#[test]
fn test_display_names() {
    assert_eq!(Card::parse("4", "S").unwrap().to_string(), "4 of spades");
    assert_eq!(Card::parse("J", "D").unwrap().display_name(), "jack of diamonds");
    assert_eq!(Card::parse("A", "C").unwrap().display_name(), "ace of clubs");
}

#[test]
fn test_colors() {
    assert_eq!(Card::new(Rank::Two, Suit::Hearts).color(), Some(Color::Red));
    assert_eq!(Card::new(Rank::Two, Suit::Spades).color(), Some(Color::Black));
}

#[test]
fn test_queen_is_twelve() {
    for suit in Suit::ALL {
        assert_eq!(Card::new(Rank::Queen, suit).value(), Ok(12));
    }
}

#[test]
fn test_card_from_deck_references_deck() {
    let deck = Deck::standard();
    let top = deck.top_card().unwrap();
    assert_eq!(top.deck(), Some(deck.id()));
}

#[test]
fn test_setting_deck_fails_for_all_cards() {
    let other = Deck::standard();

    let mut standalone = Card::new(Rank::Four, Suit::Diamonds);
    assert_eq!(standalone.set_deck(other.id()), Err(CardError::UnassignedAssignment));

    let mut deck = Deck::standard();
    let mut dealt = deck.deal_card().unwrap();
    assert_eq!(dealt.set_deck(other.id()), Err(CardError::UnassignedAssignment));
    assert_eq!(dealt.deck(), Some(deck.id()));
}

/// A deck never hands out a second native copy of a standard face.
#[test]
fn test_duplicate_card_in_deck_rejected() {
    let mut deck = Deck::standard();

    let face = CardFace::Standard { rank: Rank::Four, suit: Suit::Clubs };
    let err = deck.issue_card(face).unwrap_err();
    assert_eq!(err, CardError::DuplicateCard { id: "4C".into(), deck: deck.id() });
}

#[test]
fn test_reissue_after_deal_rejected() {
    let mut deck = Deck::new(DeckConfig::default().with_seed(5));
    let hand = deck.deal(52);
    assert!(deck.is_empty());

    for card in &hand {
        assert!(deck.ledger().contains(card.face()));
        assert!(matches!(deck.issue_card(card.face()), Err(CardError::DuplicateCard { .. })));
    }

    // The same face from another deck is accepted as a foreign card
    let mut other = Deck::new(DeckConfig::default().with_seed(6));
    let face = CardFace::Standard { rank: Rank::Ace, suit: Suit::Hearts };
    assert!(other.issue_card(face).is_err());
    let card = other.deal(52).into_iter().find(|card| card.face() == face).unwrap();
    deck.add_card(card);
    assert_eq!(deck.foreign_count(), 1);
    assert_eq!(deck.native_count(), 0);
}

#[test]
fn test_joker() {
    let joker = Card::joker();
    assert_eq!(joker.value(), Err(CardError::NoNumericValue));
    assert_eq!(joker.display_name(), "Joker");
    assert_eq!(joker.id(), "Joker");
    assert!((&joker + 3).is_err());
}

#[test]
fn test_jokers_from_deck_reference_deck() {
    let deck = Deck::new(DeckConfig::default().with_jokers());
    let jokers: Vec<_> = deck.cards().iter().filter(|card| card.is_joker()).collect();

    assert_eq!(jokers.len(), 2);
    for joker in jokers {
        assert_eq!(joker.deck(), Some(deck.id()));
    }
}

proptest! {
    #[test]
    fn prop_addition_matches_values(a in 0usize..13, b in 0usize..13, n in 0u32..100) {
        let x = Card::new(Rank::ALL[a], Suit::Clubs);
        let y = Card::new(Rank::ALL[b], Suit::Hearts);

        prop_assert_eq!(&x + &y, Ok(x.value().unwrap() + y.value().unwrap()));
        prop_assert_eq!(&x + n, Ok(x.value().unwrap() + n));
    }

    #[test]
    fn prop_arbitrary_tokens_never_panic(token in "\\PC{0,4}") {
        let _ = token.parse::<Card>();
    }
}
