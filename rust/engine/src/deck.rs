use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// A 52-card deck with a cursor. Dealing advances the cursor rather than
/// removing cards, so a deck is cheap to inspect and never reorders
/// behind the caller's back. The shuffle RNG is seedable for
/// reproducible hands.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    /// Fresh deck seeded from the OS. Initial order is suit-major until
    /// [`shuffle`](Deck::shuffle) is called.
    pub fn new() -> Self {
        Self::new_with_seed(rand::random())
    }

    /// Fresh deck with a fixed shuffle seed.
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    /// Restores all 52 cards and shuffles them with the deck's RNG.
    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    /// Deals the next card, or `None` once all 52 have been dealt.
    pub fn deal_card(&mut self) -> Option<Card> {
        let card = self.cards.get(self.position).copied();
        if card.is_some() {
            self.position += 1;
        }
        card
    }

    /// Discards the next card face down. No-op on an empty deck.
    pub fn burn_card(&mut self) {
        let _ = self.deal_card();
    }

    /// Number of cards still undealt.
    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
