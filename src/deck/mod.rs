//! Decks of cards.
//!
//! ## Key Types
//!
//! - `Deck`: an ordered pile built with 52 native cards (optionally 54),
//!   supporting dealing, adding, random insertion, shuffling, and clearing
//!   out foreign cards
//!
//! ## Native and Foreign Cards
//!
//! A card is native to the deck whose id it carries and foreign everywhere
//! else. Cards move freely between decks; `Deck::clear` is the only
//! operation that sorts them apart.

pub mod standard;

pub use standard::Deck;
