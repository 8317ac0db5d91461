//! Card system: ranks, suits, cards, and the duplicate ledger.
//!
//! ## Key Types
//!
//! - `Rank`, `Suit`, `Color`: the fixed symbolic domains
//! - `CardFace`: rank + suit, or Joker
//! - `Card`: a face plus the (write-once) deck that issued it
//! - `CardLedger`: the faces one deck has issued, owned by that deck
//!
//! ## Standalone Cards
//!
//! Cards built with `Card::new`, `Card::parse`, or `Card::joker` belong to
//! no deck. They are foreign to every deck they are added to. A card with
//! a deck reference only comes from that deck.

pub mod card;
pub mod ledger;
pub mod rank;
pub mod suit;

pub use card::{Card, CardFace, JOKER};
pub use ledger::CardLedger;
pub use rank::Rank;
pub use suit::{Color, Suit};
