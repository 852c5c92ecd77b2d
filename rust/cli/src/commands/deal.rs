//! Deal command handler for face-up hand dealing.
//!
//! Deals hole cards to every seat, runs out the full board with burns, and
//! prints the showdown scores. Useful for eyeballing shuffles and for
//! pinning down a seed worth replaying.

use std::io::Write;

use felt_engine::player::STARTING_STACK;
use felt_engine::table::Table;

use crate::cli::DealArgs;
use crate::commands::opponent_name;
use crate::error::CliError;
use crate::formatters::{describe_strength, format_board, format_cards};

/// Handle the deal command.
///
/// Deals one hand face up: hole cards for every seat, the complete 5-card
/// board, and each seat's showdown strength. The seed is printed so an
/// interesting deal can be reproduced exactly.
///
/// # Examples
///
/// ```rust
/// use felt_cli::cli::DealArgs;
/// use felt_cli::commands::handle_deal_command;
///
/// let args = DealArgs { seed: Some(42), players: None };
/// let mut out = Vec::new();
/// handle_deal_command(args, &mut out).unwrap();
/// assert!(String::from_utf8(out).unwrap().contains("Seed: 42"));
/// ```
pub fn handle_deal_command(args: DealArgs, out: &mut dyn Write) -> Result<(), CliError> {
    let players = args.players.unwrap_or(3);
    if !(2..=9).contains(&players) {
        return Err(CliError::InvalidInput(
            "players must be between 2 and 9".to_string(),
        ));
    }
    let seed = args.seed.unwrap_or_else(rand::random);

    let mut table = Table::new_with_seed(seed);
    for i in 0..players {
        table.add_player(opponent_name(i), STARTING_STACK, true);
    }
    table.start_new_hand()?;

    writeln!(out, "Seed: {}", seed)?;
    for player in table.players() {
        writeln!(out, "{}: {}", player.name(), format_cards(player.hand()))?;
    }

    table.deal_flop()?;
    table.deal_turn()?;
    table.deal_river()?;
    table.enter_showdown();

    writeln!(out, "Board: {}", format_board(table.community_cards()))?;
    writeln!(out, "Showdown:")?;
    for player in table.players() {
        let strength = player.hand_strength(table.community_cards());
        writeln!(
            out,
            "  {}: {:.2} ({})",
            player.name(),
            strength,
            describe_strength(strength)
        )?;
    }
    if let Some(winner) = table.determine_winner() {
        writeln!(out, "Winner: {}", table.players()[winner].name())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal(seed: Option<u64>, players: Option<usize>) -> Result<String, CliError> {
        let mut out = Vec::new();
        handle_deal_command(DealArgs { seed, players }, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_deal_command_with_seed() {
        let output = deal(Some(42), None).unwrap();
        assert!(output.contains("Seed: 42"));
        assert!(output.contains("Alice:"));
        assert!(output.contains("Bob:"));
        assert!(output.contains("Charlie:"));
        assert!(output.contains("Board:"));
        assert!(output.contains("Winner:"));
    }

    #[test]
    fn test_deal_command_deterministic() {
        let out1 = deal(Some(12345), None).unwrap();
        let out2 = deal(Some(12345), None).unwrap();
        assert_eq!(out1, out2, "Same seed should produce identical output");
    }

    #[test]
    fn test_deal_command_without_seed() {
        let output = deal(None, None).unwrap();
        assert!(output.contains("Seed:"));
        assert!(output.contains("Board:"));
    }

    #[test]
    fn test_deal_command_respects_player_count() {
        let output = deal(Some(7), Some(6)).unwrap();
        assert!(output.contains("Frank:"));
        assert!(!output.contains("Grace:"));
    }

    #[test]
    fn test_deal_command_rejects_bad_player_counts() {
        assert!(matches!(
            deal(Some(1), Some(1)),
            Err(CliError::InvalidInput(_))
        ));
        assert!(matches!(
            deal(Some(1), Some(10)),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_deal_command_runs_out_five_board_cards() {
        let output = deal(Some(9), Some(2)).unwrap();
        let board_line = output
            .lines()
            .find(|l| l.starts_with("Board:"))
            .expect("board line");
        // "[A♠ K♥ Q♦ J♣ 10♠]" has four separators for five cards
        assert_eq!(board_line.matches(' ').count(), 5);
    }

    #[test]
    fn test_deal_command_scores_every_seat_at_showdown() {
        let output = deal(Some(3), Some(4)).unwrap();
        let showdown_at = output.find("Showdown:").expect("showdown section");
        let scored = output[showdown_at..]
            .lines()
            .filter(|l| l.starts_with("  "))
            .count();
        assert_eq!(scored, 4);
    }
}
