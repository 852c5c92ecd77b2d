//! Personality-driven heuristic opponent.
//!
//! The policy buckets adjusted hand strength into four bands and mixes
//! raises, calls, and folds inside each band with probabilities scaled
//! by a fixed personality. Higher personality plays more hands and
//! sizes raises larger.

use felt_engine::player::Action;
use felt_engine::table::Table;
use rand::{Rng, RngCore};

use crate::Opponent;

/// Strength-band opponent with a stable personality in [0.3, 0.9].
#[derive(Debug, Clone)]
pub struct HeuristicAi {
    name: String,
    personality: f64,
}

impl HeuristicAi {
    /// Creates an opponent with the given personality, clamped to
    /// [0.3, 0.9] once here so every later formula sees a sane value.
    pub fn new(name: impl Into<String>, personality: f64) -> Self {
        Self {
            name: name.into(),
            personality: personality.clamp(0.3, 0.9),
        }
    }

    pub fn personality(&self) -> f64 {
        self.personality
    }

    fn raise_sized(&self, pot: u32, chips: u32, fraction: f64) -> Action {
        let amount = (f64::from(pot) * fraction).min(f64::from(chips));
        Action::Raise(amount as u32)
    }
}

impl Opponent for HeuristicAi {
    fn act(&self, table: &Table, seat: usize, rng: &mut dyn RngCore) -> Action {
        let Some(player) = table.players().get(seat) else {
            return Action::Check;
        };
        if player.is_folded() || player.is_all_in() {
            return Action::Check;
        }

        let community = table.community_cards();
        let mut strength = player.hand_strength(community);
        // A fresh flop reads slightly weaker until the turn confirms it.
        if community.len() == 3 {
            strength *= 0.95;
        }
        let adjusted = strength + (self.personality - 0.5) * 0.2;

        let pot = table.pot();
        let chips = player.chips();

        if adjusted > 0.8 {
            self.raise_sized(pot, chips, 0.10 + (self.personality - 0.5) * 0.4)
        } else if adjusted > 0.6 {
            if rng.random::<f64>() < self.personality {
                self.raise_sized(pot, chips, 0.10 + (self.personality - 0.6) * 0.2)
            } else {
                Action::Call
            }
        } else if adjusted > 0.4 {
            if rng.random::<f64>() < self.personality * 0.3 {
                self.raise_sized(pot, chips, 0.15)
            } else if rng.random::<f64>() < 0.7 {
                Action::Call
            } else {
                Action::Fold
            }
        } else if rng.random::<f64>() < self.personality * 0.2 {
            self.raise_sized(pot, chips, 0.2)
        } else {
            Action::Fold
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
