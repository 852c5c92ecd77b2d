//! # felt-ai: AI Opponents for the Table Engine
//!
//! Heuristic AI opponents for Texas Hold'em. Decisions are pure over
//! the table state plus an injected RNG, so simulations stay
//! reproducible under a fixed seed.
//!
//! ## Core Components
//!
//! - [`Opponent`] - Trait for per-seat decision making
//! - [`heuristic`] - The personality-driven strength-band policy
//! - [`create_ai`] - Factory mapping profile names to opponents
//!
//! ## Quick Start
//!
//! ```rust
//! use felt_ai::create_ai;
//!
//! let ai = create_ai("balanced", "Alice").expect("known profile");
//! assert_eq!(ai.name(), "Alice");
//!
//! // Unknown profiles are rejected rather than defaulted.
//! assert!(create_ai("gto", "Bob").is_none());
//! ```

use felt_engine::player::Action;
use felt_engine::table::Table;
use rand::RngCore;

pub mod heuristic;

/// A seat-level decision maker. Implementors read the table through
/// shared references only; all randomness comes from the injected RNG
/// so the caller controls reproducibility.
pub trait Opponent: Send + Sync + std::fmt::Debug {
    /// Decides the action for `seat` given the current table state.
    /// Must be safe to call for any seat, including folded, all-in, or
    /// out-of-range seats (a no-op `Check` is the conventional answer
    /// there; the table ignores actions from seats that cannot act).
    fn act(&self, table: &Table, seat: usize, rng: &mut dyn RngCore) -> Action;

    /// Display name of this opponent.
    fn name(&self) -> &str;
}

/// Builds an opponent from a profile name: `"cautious"` (personality
/// 0.35), `"balanced"` (0.60), or `"aggressive"` (0.85). Unknown
/// profiles return `None` so callers surface a configuration error
/// instead of a silent default.
pub fn create_ai(profile: &str, name: &str) -> Option<Box<dyn Opponent>> {
    let personality = match profile {
        "cautious" => 0.35,
        "balanced" => 0.60,
        "aggressive" => 0.85,
        _ => return None,
    };
    Some(Box::new(heuristic::HeuristicAi::new(name, personality)))
}
