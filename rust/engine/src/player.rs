use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::{evaluate, evaluate_best_hand};

/// A player decision during a betting round. `Raise` carries the amount
/// on top of the current bet level; the table clamps it to the stack.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Forfeit the hand
    Fold,
    /// Pass without betting
    Check,
    /// Match the current bet level
    Call,
    /// Increase the bet level by the given amount
    Raise(u32),
}

/// Default starting stack for each seated player, in chips.
pub const STARTING_STACK: u32 = 1_000;

/// A seated player: chip stack, hole cards, and the per-hand betting
/// flags the table reads when advancing turns.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    chips: u32,
    hand: Vec<Card>,
    current_bet: u32,
    folded: bool,
    all_in: bool,
    is_ai: bool,
    position: usize,
}

impl Player {
    pub fn new(name: impl Into<String>, chips: u32, is_ai: bool) -> Self {
        Self {
            name: name.into(),
            chips,
            hand: Vec::with_capacity(2),
            current_bet: 0,
            folded: false,
            all_in: false,
            is_ai,
            position: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn chips(&self) -> u32 {
        self.chips
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }

    pub fn is_folded(&self) -> bool {
        self.folded
    }

    pub fn is_all_in(&self) -> bool {
        self.all_in
    }

    pub fn is_ai(&self) -> bool {
        self.is_ai
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    /// Adds a hole card. The table deals during a hand; this is public
    /// for assembling positions by hand.
    pub fn receive_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Puts `amount` chips in front of the player. Betting the whole
    /// stack (or more) goes all-in: the stack empties and `current_bet`
    /// is REPLACED by the amount actually moved, it does not
    /// accumulate. Partial bets accumulate as usual.
    pub fn bet(&mut self, amount: u32) {
        if amount >= self.chips {
            self.current_bet = self.chips;
            self.chips = 0;
            self.all_in = true;
        } else {
            self.chips -= amount;
            self.current_bet += amount;
        }
    }

    /// Calls for up to `amount`, clamped to the remaining stack.
    /// Returns the chips actually committed.
    pub fn call(&mut self, amount: u32) -> u32 {
        let committed = amount.min(self.chips);
        self.bet(committed);
        committed
    }

    pub fn fold(&mut self) {
        self.folded = true;
    }

    /// Clears cards and per-hand flags before the next deal. Chips
    /// carry over.
    pub fn new_hand(&mut self) {
        self.hand.clear();
        self.folded = false;
        self.all_in = false;
        self.current_bet = 0;
    }

    /// Zeroes the street bet between betting rounds.
    pub fn reset_bet(&mut self) {
        self.current_bet = 0;
    }

    pub fn win_pot(&mut self, amount: u32) {
        self.chips = self.chips.saturating_add(amount);
    }

    /// Strength of this player's best hand given the community cards.
    /// Before the flop only the hole cards count.
    pub fn hand_strength(&self, community: &[Card]) -> f64 {
        if self.hand.len() < 2 {
            return 0.0;
        }
        if community.is_empty() {
            evaluate(&self.hand)
        } else {
            evaluate_best_hand(&self.hand, community)
        }
    }
}
