//! # felt-engine: Texas Hold'em Table Engine
//!
//! A multi-seat Texas Hold'em engine with a normalized hand evaluator
//! and an externally driven betting state machine. The engine never
//! advances a street by itself: a driver polls round completion and the
//! current seat, submits one action at a time, and calls the dealing
//! and showdown methods in between. Shuffling is seedable for
//! reproducible hands.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card, rank, and suit types plus compact text parsing
//! - [`deck`] - Seeded ChaCha20 shuffling, dealing, and burn cards
//! - [`hand`] - Normalized hand strength evaluation and categories
//! - [`player`] - Seat state, chip stack, and betting primitives
//! - [`table`] - The table state machine: blinds, streets, pot, turns
//! - [`records`] - Serializable per-hand action and result records
//! - [`errors`] - Error types for table operations
//!
//! ## Quick Start
//!
//! ```rust
//! use felt_engine::player::Action;
//! use felt_engine::table::Table;
//!
//! let mut table = Table::new_with_seed(42);
//! table.add_player("You", 1_000, false);
//! table.add_player("Alice", 1_000, true);
//! table.add_player("Bob", 1_000, true);
//!
//! table.start_new_hand().expect("three funded players");
//! assert_eq!(table.pot(), 30); // small blind + big blind
//!
//! // Drive the pre-flop round: everyone calls the big blind.
//! while !table.is_betting_round_complete() {
//!     table.process_action(Action::Call);
//! }
//! table.reset_bets();
//! table.deal_flop().expect("fresh deck");
//! assert_eq!(table.community_cards().len(), 3);
//! ```
//!
//! ## Hand Evaluation
//!
//! Strengths are flat scores in `[0.0, 1.0]` per category, with no
//! kicker comparison outside the high-card band:
//!
//! ```rust
//! use felt_engine::cards::Card;
//! use felt_engine::hand::evaluate;
//!
//! let royal: Vec<Card> = ["Ah", "Kh", "Qh", "Jh", "Th"]
//!     .iter()
//!     .map(|s| s.parse().expect("valid card"))
//!     .collect();
//! assert_eq!(evaluate(&royal), 1.0);
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod player;
pub mod records;
pub mod table;
