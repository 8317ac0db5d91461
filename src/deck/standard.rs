//! The standard 52/54 card deck.

use crate::cards::{Card, CardFace, CardLedger, Rank, Suit};
use crate::core::config::{DeckConfig, JOKERS_PER_DECK};
use crate::core::entity::DeckId;
use crate::core::error::Result;
use crate::core::rng::{DeckRng, DeckRngState};

/// An ordered pile of cards.
///
/// Index 0 is the bottom of the deck, the last index is the top. Cards are
/// dealt from and added to the top.
///
/// A deck is built with its 52 native cards (plus two native Jokers if
/// configured). Foreign cards can be added or inserted at any time and are
/// removed again by `clear`.
///
/// Each deck owns the `CardLedger` for its id, so the only way to get
/// another card for the deck is `issue_card`, which refuses a standard
/// face the deck already issued.
///
/// ## Usage
///
/// ```
/// use playing_cards::cards::{Card, Rank, Suit};
/// use playing_cards::core::DeckConfig;
/// use playing_cards::deck::Deck;
///
/// let mut deck = Deck::new(DeckConfig::default().with_seed(42));
/// assert_eq!(deck.size(), 52);
///
/// let dealt = deck.deal_card().unwrap();
/// assert_eq!(dealt.deck(), Some(deck.id()));
///
/// deck.add_card(Card::new(Rank::Eight, Suit::Clubs));
/// let foreign = deck.clear();
/// assert_eq!(foreign.len(), 1);
/// assert_eq!(deck.size(), 51);
/// ```
#[derive(Debug)]
pub struct Deck {
    id: DeckId,
    cards: Vec<Card>,
    ledger: CardLedger,
    rng: DeckRng,
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

impl Deck {
    /// Build a deck with the default configuration: 52 cards, shuffled.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(DeckConfig::default())
    }

    /// Build a deck from `config`.
    ///
    /// Cards are created suit by suit (clubs, spades, hearts, diamonds),
    /// each suit from Two up to Ace, followed by any Jokers. With
    /// `config.shuffle` set the deck is shuffled once before it is returned.
    #[must_use]
    pub fn new(config: DeckConfig) -> Self {
        let id = DeckId::next();
        let cards = Self::faces(config.include_jokers)
            .map(|face| Card::native(face, id))
            .collect();
        Self::assemble(id, cards, &config)
    }

    fn faces(include_jokers: bool) -> impl Iterator<Item = CardFace> {
        let jokers = if include_jokers { JOKERS_PER_DECK } else { 0 };
        Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| CardFace::Standard { rank, suit }))
            .chain(std::iter::repeat(CardFace::Joker).take(jokers))
    }

    fn assemble(id: DeckId, cards: Vec<Card>, config: &DeckConfig) -> Self {
        let rng = config.seed.map_or_else(DeckRng::from_entropy, DeckRng::new);
        let ledger = CardLedger::from_cards(id, &cards);
        let mut deck = Self { id, cards, ledger, rng };

        tracing::debug!(
            deck = %id,
            size = deck.cards.len(),
            seed = deck.rng.seed(),
            shuffle = config.shuffle,
            "deck built"
        );

        if config.shuffle {
            deck.shuffle();
        }
        deck
    }

    /// This deck's identity. Native cards report it from `Card::deck`.
    #[must_use]
    pub fn id(&self) -> DeckId {
        self.id
    }

    /// Standard faces this deck has issued, whether or not it still holds
    /// them.
    #[must_use]
    pub fn ledger(&self) -> &CardLedger {
        &self.ledger
    }

    /// Issue a new native card for this deck.
    ///
    /// The card is returned, not placed in the deck. Fails with
    /// `DuplicateCard` if the deck already issued this standard face, even
    /// if that card has since been dealt away. Jokers can always be issued.
    pub fn issue_card(&mut self, face: CardFace) -> Result<Card> {
        let card = Card::issue(face, &mut self.ledger)?;
        tracing::trace!(deck = %self.id, card = %card.id(), "issued");
        Ok(card)
    }

    /// Number of cards currently held.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The top card, without removing it.
    #[must_use]
    pub fn top_card(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Remove and return the top card.
    ///
    /// Returns `None` once the deck is empty, so callers can deal in a loop.
    pub fn deal_card(&mut self) -> Option<Card> {
        let card = self.cards.pop();
        match &card {
            Some(card) => tracing::trace!(deck = %self.id, card = %card.id(), "dealt"),
            None => tracing::debug!(deck = %self.id, "deal from empty deck"),
        }
        card
    }

    /// Deal up to `count` cards, in the order they come off the top.
    pub fn deal(&mut self, count: usize) -> Vec<Card> {
        let keep = self.cards.len().saturating_sub(count);
        let mut dealt = self.cards.split_off(keep);
        dealt.reverse();
        tracing::trace!(deck = %self.id, requested = count, dealt = dealt.len(), "dealt cards");
        dealt
    }

    /// Put a card, native or foreign, on top.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Insert a card, native or foreign, at a uniformly random position
    /// (anywhere from the bottom to the top).
    pub fn insert_card(&mut self, card: Card) {
        let position = self.rng.gen_position(self.cards.len());
        self.cards.insert(position, card);
    }

    /// Replace the contents with a uniformly random permutation.
    ///
    /// Cards are drawn one at a time from the remaining pile, each remaining
    /// card equally likely, and stacked in draw order.
    pub fn shuffle(&mut self) {
        let mut remaining = std::mem::take(&mut self.cards);
        let mut shuffled = Vec::with_capacity(remaining.len());

        while let Some(index) = self.rng.gen_index(remaining.len()) {
            shuffled.push(remaining.swap_remove(index));
        }

        self.cards = shuffled;
        tracing::debug!(deck = %self.id, size = self.cards.len(), "shuffled");
    }

    /// Remove and return every foreign card.
    ///
    /// Native cards stay, in their current relative order. Foreign cards
    /// come back in bottom-to-top order.
    pub fn clear(&mut self) -> Vec<Card> {
        let id = self.id;
        let (native, foreign): (Vec<_>, Vec<_>) = std::mem::take(&mut self.cards)
            .into_iter()
            .partition(|card| card.deck() == Some(id));

        self.cards = native;
        tracing::debug!(deck = %id, removed = foreign.len(), remaining = self.cards.len(), "cleared foreign cards");
        foreign
    }

    /// Was `card` issued by this deck?
    #[must_use]
    pub fn is_native(&self, card: &Card) -> bool {
        card.deck() == Some(self.id)
    }

    /// Number of held cards issued by this deck.
    #[must_use]
    pub fn native_count(&self) -> usize {
        self.cards.iter().filter(|card| self.is_native(card)).count()
    }

    /// Number of held cards issued elsewhere (or by no deck).
    #[must_use]
    pub fn foreign_count(&self) -> usize {
        self.cards.len() - self.native_count()
    }

    /// Check whether a card with the given id ("4H", "Joker") is held.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.cards.iter().any(|card| card.id() == id)
    }

    /// Current RNG state, for replaying later shuffles and inserts.
    #[must_use]
    pub fn rng_state(&self) -> DeckRngState {
        self.rng.state()
    }

    /// Replace the deck's RNG, e.g. with a fork of a table-wide stream.
    pub fn set_rng(&mut self, rng: DeckRng) {
        self.rng = rng;
    }
}
