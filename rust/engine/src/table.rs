use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::player::{Action, Player};
use crate::records::{ActionRecord, Street};

/// Small blind posted by the seat after the dealer, in chips.
pub const SMALL_BLIND: u32 = 10;
/// Big blind posted by the seat after the small blind, in chips.
pub const BIG_BLIND: u32 = 20;

/// A table of players plus all per-hand state: deck, community cards,
/// pot, street, bet level, and the turn pointer.
///
/// The table never advances itself. A driver polls
/// [`is_betting_round_complete`](Table::is_betting_round_complete) and
/// [`current_player`](Table::current_player), submits one
/// [`Action`] at a time through
/// [`process_action`](Table::process_action), and calls the dealing
/// and showdown methods between streets.
#[derive(Debug)]
pub struct Table {
    players: Vec<Player>,
    deck: Deck,
    community: Vec<Card>,
    pot: u32,
    street: Street,
    current_player_index: usize,
    bet_level: u32,
    dealer_index: usize,
    small_blind_index: usize,
    big_blind_index: usize,
    actions: Vec<ActionRecord>,
}

impl Table {
    /// Empty table with an OS-seeded deck.
    pub fn new() -> Self {
        Self::with_deck(Deck::new())
    }

    /// Empty table with a fixed shuffle seed, for reproducible hands.
    pub fn new_with_seed(seed: u64) -> Self {
        Self::with_deck(Deck::new_with_seed(seed))
    }

    /// Empty table using the given deck.
    pub fn with_deck(deck: Deck) -> Self {
        Self {
            players: Vec::new(),
            deck,
            community: Vec::new(),
            pot: 0,
            street: Street::PreFlop,
            current_player_index: 0,
            bet_level: 0,
            dealer_index: 0,
            small_blind_index: 0,
            big_blind_index: 0,
            actions: Vec::new(),
        }
    }

    /// Seats a player at the next free seat. Call before the first
    /// hand; seats are fixed for the session apart from broke players
    /// being dropped between hands.
    pub fn add_player(&mut self, name: impl Into<String>, chips: u32, is_ai: bool) {
        let mut player = Player::new(name, chips, is_ai);
        player.set_position(self.players.len());
        self.players.push(player);
    }

    /// Starts the next hand: drops broke players, reshuffles, rotates
    /// the dealer, resets per-hand state, posts blinds (only with more
    /// than 2 seated; heads-up posts nothing), deals 2 hole cards per
    /// seat, and points the turn at the seat after the big blind.
    ///
    /// The broke-player removal persists even when the hand is then
    /// rejected with [`GameError::NotEnoughPlayers`].
    pub fn start_new_hand(&mut self) -> Result<(), GameError> {
        self.players.retain(|p| p.chips() > 0);
        for (seat, player) in self.players.iter_mut().enumerate() {
            player.set_position(seat);
        }
        if self.players.len() < 2 {
            return Err(GameError::NotEnoughPlayers {
                seated: self.players.len(),
            });
        }

        self.deck.shuffle();
        self.community.clear();
        self.actions.clear();
        self.pot = 0;
        self.street = Street::PreFlop;
        self.bet_level = 0;

        self.dealer_index = (self.dealer_index + 1) % self.players.len();
        self.small_blind_index = (self.dealer_index + 1) % self.players.len();
        self.big_blind_index = (self.small_blind_index + 1) % self.players.len();

        for player in &mut self.players {
            player.new_hand();
        }

        if self.players.len() > 2 {
            self.post_blinds();
        }
        self.deal_hole_cards()?;
        self.current_player_index = (self.big_blind_index + 1) % self.players.len();
        Ok(())
    }

    /// The pot receives what the blinds actually post, which can be
    /// less than the nominal amounts for a short stack. The level to
    /// call stays at the full big blind either way.
    fn post_blinds(&mut self) {
        let small = &mut self.players[self.small_blind_index];
        small.bet(SMALL_BLIND);
        let posted = small.current_bet();
        self.pot = self.pot.saturating_add(posted);

        let big = &mut self.players[self.big_blind_index];
        big.bet(BIG_BLIND);
        let posted = big.current_bet();
        self.pot = self.pot.saturating_add(posted);

        self.bet_level = BIG_BLIND;
    }

    fn deal_hole_cards(&mut self) -> Result<(), GameError> {
        for seat in 0..self.players.len() {
            for _ in 0..2 {
                let card = self.deck.deal_card().ok_or(GameError::EmptyDeck)?;
                self.players[seat].receive_card(card);
            }
        }
        Ok(())
    }

    /// Burns one card, reveals the 3 flop cards, advances the street.
    /// The turn pointer is left where pre-flop betting put it.
    pub fn deal_flop(&mut self) -> Result<(), GameError> {
        self.deck.burn_card();
        for _ in 0..3 {
            let card = self.deck.deal_card().ok_or(GameError::EmptyDeck)?;
            self.community.push(card);
        }
        self.street = Street::Flop;
        Ok(())
    }

    /// Burns one card, reveals the turn card, advances the street.
    pub fn deal_turn(&mut self) -> Result<(), GameError> {
        self.deck.burn_card();
        let card = self.deck.deal_card().ok_or(GameError::EmptyDeck)?;
        self.community.push(card);
        self.street = Street::Turn;
        Ok(())
    }

    /// Burns one card, reveals the river card, advances the street.
    pub fn deal_river(&mut self) -> Result<(), GameError> {
        self.deck.burn_card();
        let card = self.deck.deal_card().ok_or(GameError::EmptyDeck)?;
        self.community.push(card);
        self.street = Street::River;
        Ok(())
    }

    /// Marks the hand as gone to showdown. Winner determination and
    /// pot distribution stay separate driver calls.
    pub fn enter_showdown(&mut self) {
        self.street = Street::Showdown;
    }

    /// Applies `action` for the current seat and advances the turn.
    ///
    /// A folded or all-in current seat ignores the action and just
    /// advances (nothing is logged for it). `Check` never changes
    /// state, even behind a bet; the round simply stays incomplete
    /// until that player matches the level or folds. `Call` and
    /// `Raise` clamp to the player's stack.
    pub fn process_action(&mut self, action: Action) {
        let Some(player) = self.players.get(self.current_player_index) else {
            return;
        };
        if player.is_folded() || player.is_all_in() {
            self.advance_turn();
            return;
        }

        let seat = self.current_player_index;
        let bet_to_call = self.bet_level.saturating_sub(player.current_bet());

        match action {
            Action::Fold => self.players[seat].fold(),
            Action::Check => {}
            Action::Call => {
                let committed = self.players[seat].call(bet_to_call);
                self.pot = self.pot.saturating_add(committed);
            }
            Action::Raise(amount) => {
                let total = bet_to_call.saturating_add(amount);
                let committed = total.min(self.players[seat].chips());
                self.players[seat].bet(committed);
                self.pot = self.pot.saturating_add(committed);
                // An all-in for less than the call must not lower the
                // level the rest of the table has to match.
                self.bet_level = self.bet_level.max(self.players[seat].current_bet());
            }
        }

        self.actions.push(ActionRecord {
            seat,
            street: self.street,
            action,
        });
        self.advance_turn();
    }

    /// Moves the turn to the next seat that can still act, scanning at
    /// most one full lap so a table of folded and all-in seats cannot
    /// cycle forever.
    fn advance_turn(&mut self) {
        let start = self.current_player_index;
        let mut attempts = 0;
        loop {
            self.current_player_index = (self.current_player_index + 1) % self.players.len();
            attempts += 1;
            if attempts >= self.players.len() {
                break;
            }
            let next = &self.players[self.current_player_index];
            if !(next.is_folded() || next.is_all_in()) || self.current_player_index == start {
                break;
            }
        }
    }

    /// True when at most one non-folded player remains, or every
    /// non-folded player either matches the bet level exactly or is
    /// all-in.
    pub fn is_betting_round_complete(&self) -> bool {
        let mut active = 0;
        let mut at_level = 0;
        for player in &self.players {
            if player.is_folded() {
                continue;
            }
            active += 1;
            if player.current_bet() == self.bet_level || player.is_all_in() {
                at_level += 1;
            }
        }
        active <= 1 || at_level == active
    }

    /// Seat of the strongest non-folded hand against the current
    /// board. Ties keep the first seat encountered; the whole pot goes
    /// to one winner. `None` only when every seat folded.
    pub fn determine_winner(&self) -> Option<usize> {
        let mut winner: Option<(usize, f64)> = None;
        for (seat, player) in self.players.iter().enumerate() {
            if player.is_folded() {
                continue;
            }
            let strength = player.hand_strength(&self.community);
            match winner {
                Some((_, best)) if strength <= best => {}
                _ => winner = Some((seat, strength)),
            }
        }
        winner.map(|(seat, _)| seat)
    }

    /// Zeroes every per-street bet and the bet level. Drivers call
    /// this between streets, never between hands.
    pub fn reset_bets(&mut self) {
        for player in &mut self.players {
            player.reset_bet();
        }
        self.bet_level = 0;
    }

    /// Awards the whole pot to `seat` and zeroes it. Out-of-range
    /// seats are ignored.
    pub fn distribute_pot(&mut self, seat: usize) {
        let Some(winner) = self.players.get_mut(seat) else {
            return;
        };
        winner.win_pot(self.pot);
        self.pot = 0;
    }

    /// Number of players still in the hand (not folded).
    pub fn active_player_count(&self) -> usize {
        self.players.iter().filter(|p| !p.is_folded()).count()
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn community_cards(&self) -> &[Card] {
        &self.community
    }

    pub fn pot(&self) -> u32 {
        self.pot
    }

    pub fn current_bet_level(&self) -> u32 {
        self.bet_level
    }

    pub fn street(&self) -> Street {
        self.street
    }

    pub fn dealer_index(&self) -> usize {
        self.dealer_index
    }

    /// Processed actions for the hand in progress, oldest first.
    pub fn action_log(&self) -> &[ActionRecord] {
        &self.actions
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}
