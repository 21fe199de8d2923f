use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// A shuffled 52-card deck, consumed front-to-back as cards are dealt.
/// Built once per hand and never reshuffled mid-hand. Shuffling is a
/// Fisher-Yates permutation driven by a ChaCha20 RNG, so a fixed seed
/// reproduces the exact card order for replays and audits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
}

impl Deck {
    /// A freshly shuffled deck seeded from OS entropy.
    pub fn new() -> Self {
        Self::shuffled_with(&mut ChaCha20Rng::from_os_rng())
    }

    /// A freshly shuffled deck with a deterministic seed.
    pub fn new_with_seed(seed: u64) -> Self {
        Self::shuffled_with(&mut ChaCha20Rng::seed_from_u64(seed))
    }

    fn shuffled_with(rng: &mut ChaCha20Rng) -> Self {
        let mut cards = full_deck();
        cards.shuffle(rng);
        Self { cards, position: 0 }
    }

    /// A deck in exactly the given order, dealt front-to-back. Intended
    /// for scripted hands in tests; the caller is responsible for card
    /// uniqueness.
    pub fn stacked(cards: Vec<Card>) -> Self {
        Self { cards, position: 0 }
    }

    /// Removes and returns the next card. Running out of cards is a
    /// fatal precondition violation (a 52-card deck covers any table of
    /// up to 8 seats plus board and burns), surfaced as an error rather
    /// than dealing undefined cards.
    pub fn deal_card(&mut self) -> Result<Card, GameError> {
        let c = self
            .cards
            .get(self.position)
            .copied()
            .ok_or(GameError::DeckExhausted)?;
        self.position += 1;
        Ok(c)
    }

    /// Discards the next card unseen.
    pub fn burn_card(&mut self) -> Result<(), GameError> {
        self.deal_card().map(|_| ())
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
