//! Deck configuration and the process-wide Ace policy.
//!
//! - `DeckConfig`: how a deck is composed and whether it starts shuffled
//! - `AcePolicy`: whether an Ace counts 14 (high) or 1 (low)
//!
//! The Ace policy is meant to be chosen once at startup, before any card
//! values are read, and left alone for the rest of the run.

use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};

/// Number of cards in a deck without jokers.
pub const STANDARD_DECK_SIZE_WITHOUT_JOKERS: usize = 52;

/// Number of cards in a deck with jokers.
pub const STANDARD_DECK_SIZE_WITH_JOKERS: usize = 54;

/// Jokers added by `DeckConfig::with_jokers`.
pub const JOKERS_PER_DECK: usize = STANDARD_DECK_SIZE_WITH_JOKERS - STANDARD_DECK_SIZE_WITHOUT_JOKERS;

/// Numeric valuation of Aces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AcePolicy {
    /// Ace is worth 14.
    #[default]
    High,
    /// Ace is worth 1.
    Low,
}

impl AcePolicy {
    /// Numeric value of an Ace under this policy.
    #[must_use]
    pub const fn ace_value(self) -> u8 {
        match self {
            AcePolicy::High => 14,
            AcePolicy::Low => 1,
        }
    }
}

static ACE_HIGH: AtomicBool = AtomicBool::new(true);

/// Set the process-wide Ace policy.
pub fn set_ace_policy(policy: AcePolicy) {
    ACE_HIGH.store(policy == AcePolicy::High, Ordering::Relaxed);
    tracing::debug!(?policy, "ace policy set");
}

/// Current process-wide Ace policy. Defaults to `AcePolicy::High`.
#[must_use]
pub fn ace_policy() -> AcePolicy {
    if ACE_HIGH.load(Ordering::Relaxed) {
        AcePolicy::High
    } else {
        AcePolicy::Low
    }
}

/// Configuration for building a `Deck`.
///
/// ```
/// use playing_cards::core::DeckConfig;
///
/// let config = DeckConfig::default().with_jokers().with_seed(7);
/// assert!(config.include_jokers);
/// assert!(config.shuffle);
/// assert_eq!(config.deck_size(), 54);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Add two Jokers after the 52 standard cards.
    pub include_jokers: bool,

    /// Shuffle once right after construction.
    pub shuffle: bool,

    /// Seed for the deck's RNG. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            include_jokers: false,
            shuffle: true,
            seed: None,
        }
    }
}

impl DeckConfig {
    /// Create the default configuration (no jokers, shuffled, entropy seed).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Include the two Jokers.
    #[must_use]
    pub fn with_jokers(mut self) -> Self {
        self.include_jokers = true;
        self
    }

    /// Keep the deterministic construction order (no initial shuffle).
    #[must_use]
    pub fn unshuffled(mut self) -> Self {
        self.shuffle = false;
        self
    }

    /// Seed the deck's RNG for reproducible shuffles and inserts.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of cards a freshly built deck holds.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        if self.include_jokers {
            STANDARD_DECK_SIZE_WITH_JOKERS
        } else {
            STANDARD_DECK_SIZE_WITHOUT_JOKERS
        }
    }
}
