//! Command handler modules for the Felt CLI.
//!
//! Each subcommand is implemented in its own module with a consistent
//! pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed as parameters so tests can
//!   capture them
//! - Interactive input as `&mut dyn BufRead` for the same reason
//! - All errors propagated via the `CliError` enum; `run` maps them to
//!   exit codes
//!
//! The helpers below are shared table-setup code: seat naming and
//! opponent construction from a profile string.

use rand::Rng;

use felt_ai::heuristic::HeuristicAi;
use felt_ai::{Opponent, create_ai};

use crate::error::CliError;

pub mod deal;
pub mod eval;
pub mod play;
pub mod sim;

pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;

/// Seat names handed out to AI opponents in order.
const OPPONENT_NAMES: [&str; 8] = [
    "Alice", "Bob", "Charlie", "Dana", "Eve", "Frank", "Grace", "Heidi",
];

/// Name for the i-th AI opponent at the table.
pub(crate) fn opponent_name(i: usize) -> String {
    match OPPONENT_NAMES.get(i) {
        Some(name) => (*name).to_string(),
        None => format!("AI {}", i + 1),
    }
}

/// Builds one opponent from a profile string.
///
/// The "random" profile draws a fresh personality from `rng` for each
/// opponent, so a table of randoms is a mixed field; named profiles map
/// to fixed personalities. Unknown profiles error here as well as in
/// config validation, since this is also reachable with a profile no
/// config check has seen.
pub(crate) fn build_opponent(
    profile: &str,
    name: &str,
    rng: &mut impl Rng,
) -> Result<Box<dyn Opponent>, CliError> {
    if profile == "random" {
        let personality = 0.3 + rng.random::<f64>() * 0.6;
        return Ok(Box::new(HeuristicAi::new(name, personality)));
    }
    create_ai(profile, name).ok_or_else(|| {
        CliError::InvalidInput(format!(
            "unknown profile '{}', expected cautious, balanced, aggressive, or random",
            profile
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn opponents_take_names_in_seat_order() {
        assert_eq!(opponent_name(0), "Alice");
        assert_eq!(opponent_name(1), "Bob");
        assert_eq!(opponent_name(7), "Heidi");
        assert_eq!(opponent_name(8), "AI 9");
    }

    #[test]
    fn named_profiles_build_opponents() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        for profile in ["cautious", "balanced", "aggressive", "random"] {
            let ai = build_opponent(profile, "Alice", &mut rng).unwrap();
            assert_eq!(ai.name(), "Alice");
        }
    }

    #[test]
    fn unknown_profiles_are_an_error() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let err = build_opponent("reckless", "Alice", &mut rng).unwrap_err();
        assert!(err.to_string().contains("unknown profile 'reckless'"));
    }
}
