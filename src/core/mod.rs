//! Core building blocks: deck identity, RNG, configuration, errors.
//!
//! Nothing in here knows about ranks or suits; `cards` and `deck` build on
//! top of these types.

pub mod config;
pub mod entity;
pub mod error;
pub mod rng;

pub use config::{
    ace_policy, set_ace_policy, AcePolicy, DeckConfig, JOKERS_PER_DECK,
    STANDARD_DECK_SIZE_WITHOUT_JOKERS, STANDARD_DECK_SIZE_WITH_JOKERS,
};
pub use entity::DeckId;
pub use error::{CardError, Result};
pub use rng::{DeckRng, DeckRngState};
