//! # Sim Command
//!
//! AI-only batch simulation.
//!
//! Each hand runs on a fresh table seeded at `seed + i`, so earlier
//! results never bleed into later shuffles and any single hand from a
//! batch can be reproduced on its own. Results stream one line per
//! hand, as text or as JSON hand records, with win and net-chip totals
//! per seat at the end.

use std::io::Write;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use felt_ai::Opponent;
use felt_engine::records::{HandRecord, ShowdownEntry, Street, rfc3339_now};
use felt_engine::table::Table;

use crate::cli::SimArgs;
use crate::commands::{build_opponent, opponent_name};
use crate::config;
use crate::error::CliError;
use crate::formatters::describe_strength;
use crate::ui;

/// Handle the sim command: deal AI-only hands and report the results.
///
/// Every hand gets its own table and deck at `seed + i`, so hand `i`
/// of a batch can be re-run alone with `--hands 1 --seed <seed+i>`.
/// Text mode prints one result line per hand; `--json` emits the full
/// [`HandRecord`] for each, one per line.
///
/// # Examples
///
/// ```rust,no_run
/// use felt_cli::cli::SimArgs;
/// use felt_cli::commands::handle_sim_command;
/// use std::io;
///
/// let args = SimArgs {
///     hands: 100,
///     seed: Some(42),
///     players: Some(4),
///     stack: None,
///     profile: None,
///     json: false,
/// };
/// let mut out = io::stdout();
/// let mut err = io::stderr();
/// handle_sim_command(args, &mut out, &mut err).unwrap();
/// ```
pub fn handle_sim_command(
    args: SimArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if args.hands == 0 {
        ui::write_error(err, "hands must be >= 1")?;
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }

    let mut cfg = config::load()?;
    if let Some(stack) = args.stack {
        cfg.starting_stack = stack;
    }
    if let Some(seed) = args.seed {
        cfg.seed = Some(seed);
    }
    if let Some(profile) = &args.profile {
        cfg.profile = profile.clone();
    }
    config::validate(&cfg)?;

    let players = args.players.unwrap_or(cfg.opponents + 1);
    if !(2..=config::MAX_OPPONENTS + 1).contains(&players) {
        return Err(CliError::InvalidInput(format!(
            "players must be between 2 and {}",
            config::MAX_OPPONENTS + 1
        )));
    }

    let base_seed = cfg.seed.unwrap_or_else(rand::random);
    // Personalities are drawn once, so a "random" profile still keeps
    // each seat's style fixed across the whole batch.
    let mut setup_rng = ChaCha20Rng::seed_from_u64(base_seed);
    let mut opponents: Vec<Box<dyn Opponent>> = Vec::with_capacity(players);
    for i in 0..players {
        opponents.push(build_opponent(&cfg.profile, &opponent_name(i), &mut setup_rng)?);
    }

    writeln!(
        out,
        "sim: hands={} players={} stack={} profile={} seed={}",
        args.hands, players, cfg.starting_stack, cfg.profile, base_seed
    )?;

    let bankroll = u64::from(cfg.starting_stack) * players as u64;
    let mut wins = vec![0u64; players];
    let mut net = vec![0i64; players];

    for i in 0..args.hands {
        let hand_seed = base_seed.wrapping_add(i);
        let mut table = Table::new_with_seed(hand_seed);
        for opponent in &opponents {
            table.add_player(opponent.name().to_string(), cfg.starting_stack, true);
        }
        table.start_new_hand()?;

        // Offset so AI decisions don't replay the deck's stream.
        let mut rng = ChaCha20Rng::seed_from_u64(hand_seed.wrapping_add(1));
        run_hand(&mut table, &opponents, &mut rng)?;

        let pot = table.pot();
        let winner = table.determine_winner();
        let showdown: Vec<ShowdownEntry> = table
            .players()
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_folded())
            .map(|(seat, p)| {
                let strength = p.hand_strength(table.community_cards());
                ShowdownEntry {
                    seat,
                    strength,
                    category: describe_strength(strength).to_string(),
                }
            })
            .collect();

        if args.json {
            let record = HandRecord {
                hand_no: i + 1,
                seed: Some(hand_seed),
                actions: table.action_log().to_vec(),
                board: table.community_cards().to_vec(),
                winner_seat: winner,
                pot_won: pot,
                ts: Some(rfc3339_now()),
                meta: Some(serde_json::json!({
                    "players": players,
                    "stack": cfg.starting_stack,
                    "profile": cfg.profile,
                })),
                showdown,
            };
            let line = serde_json::to_string(&record)
                .map_err(|e| CliError::Engine(format!("cannot serialize hand record: {}", e)))?;
            writeln!(out, "{}", line)?;
        } else {
            match winner {
                Some(w) => writeln!(
                    out,
                    "Hand {}: {} wins {}",
                    i + 1,
                    table.players()[w].name(),
                    pot
                )?,
                None => writeln!(out, "Hand {}: no winner", i + 1)?,
            }
        }

        if let Some(w) = winner {
            table.distribute_pot(w);
            wins[w] += 1;
        }

        // A finished hand must leave the chips it started with.
        let on_table: u64 = table
            .players()
            .iter()
            .map(|p| u64::from(p.chips()))
            .sum::<u64>()
            + u64::from(table.pot());
        if on_table != bankroll {
            return Err(CliError::Engine(format!(
                "chip conservation broken on hand {}: {} chips on the table, expected {}",
                i + 1,
                on_table,
                bankroll
            )));
        }
        for (seat, player) in table.players().iter().enumerate() {
            net[seat] += i64::from(player.chips()) - i64::from(cfg.starting_stack);
        }
    }

    writeln!(out, "Simulated: {} hands", args.hands)?;
    for (seat, opponent) in opponents.iter().enumerate() {
        writeln!(
            out,
            "  {}: {} wins, net {:+}",
            opponent.name(),
            wins[seat],
            net[seat]
        )?;
    }
    Ok(())
}

/// Drives one AI-only hand to showdown.
///
/// Round completion is checked before every action. Heads-up tables
/// post no blinds, so the opening check is skipped until someone has
/// acted, otherwise the only betting round would be fast-forwarded
/// past.
fn run_hand(
    table: &mut Table,
    opponents: &[Box<dyn Opponent>],
    rng: &mut ChaCha20Rng,
) -> Result<(), CliError> {
    let mut acted = table.pot() > 0;
    loop {
        if acted && table.is_betting_round_complete() {
            match table.street() {
                Street::PreFlop => {
                    table.reset_bets();
                    table.deal_flop()?;
                }
                Street::Flop => {
                    table.reset_bets();
                    table.deal_turn()?;
                }
                Street::Turn => {
                    table.reset_bets();
                    table.deal_river()?;
                }
                Street::River | Street::Showdown => {
                    table.reset_bets();
                    table.enter_showdown();
                    return Ok(());
                }
            }
            continue;
        }

        let seat = table.current_player_index();
        // Seats were filled from `opponents` in order on a fresh table,
        // so the seat index maps straight back.
        let action = opponents[seat].act(table, seat, rng);
        table.process_action(action);
        acted = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(hands: u64, seed: u64, players: usize) -> SimArgs {
        SimArgs {
            hands,
            seed: Some(seed),
            players: Some(players),
            stack: Some(200),
            profile: Some("balanced".to_string()),
            json: false,
        }
    }

    fn sim(args: SimArgs) -> (Result<(), CliError>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_sim_command(args, &mut out, &mut err);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_sim_runs_the_requested_hands() {
        let (result, out, _err) = sim(args(2, 42, 3));
        assert!(result.is_ok(), "sim failed: {:?}", result);
        assert!(out.contains("sim: hands=2 players=3 stack=200 profile=balanced seed=42"));
        assert!(out.contains("Hand 1:"));
        assert!(out.contains("Hand 2:"));
        assert!(out.contains("Simulated: 2 hands"));
    }

    #[test]
    fn test_sim_reports_per_seat_totals() {
        let (result, out, _err) = sim(args(3, 9, 3));
        assert!(result.is_ok());
        let totals: Vec<&str> = out
            .lines()
            .filter(|l| l.contains(" wins, net "))
            .collect();
        assert_eq!(totals.len(), 3);
    }

    #[test]
    fn test_sim_zero_hands_is_invalid() {
        let (result, _out, err) = sim(args(0, 42, 3));
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
        assert!(err.contains("hands must be >= 1"));
    }

    #[test]
    fn test_sim_rejects_out_of_range_players() {
        for players in [1, 10] {
            let (result, _out, _err) = sim(args(1, 42, players));
            match result {
                Err(CliError::InvalidInput(msg)) => {
                    assert!(msg.contains("players must be between 2 and 9"))
                }
                other => panic!("players={} accepted: {:?}", players, other),
            }
        }
    }

    #[test]
    fn test_sim_rejects_bad_profiles() {
        let mut bad = args(1, 42, 3);
        bad.profile = Some("wild".to_string());
        let (result, _out, _err) = sim(bad);
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_sim_same_seed_reports_identically() {
        let (r1, out1, _e1) = sim(args(3, 5, 4));
        let (r2, out2, _e2) = sim(args(3, 5, 4));
        assert!(r1.is_ok() && r2.is_ok());
        assert_eq!(out1, out2);
    }

    #[test]
    fn test_sim_json_lines_are_hand_records() {
        let mut a = args(3, 42, 3);
        a.json = true;
        let (result, out, _err) = sim(a);
        assert!(result.is_ok(), "json sim failed: {:?}", result);

        let records: Vec<HandRecord> = out
            .lines()
            .filter(|l| l.starts_with('{'))
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(records.len(), 3);
        for (k, record) in records.iter().enumerate() {
            assert_eq!(record.hand_no, k as u64 + 1);
            assert_eq!(record.seed, Some(42 + k as u64));
            assert_eq!(record.board.len(), 5);
            assert!(record.winner_seat.is_some());
            assert!(record.pot_won > 0);
            assert!(!record.actions.is_empty());
            assert!(!record.showdown.is_empty());
            let meta = record.meta.as_ref().unwrap();
            assert_eq!(meta["players"], 3);
            assert_eq!(meta["profile"], "balanced");
        }
    }

    #[test]
    fn test_sim_heads_up_plays_hands() {
        let (result, out, _err) = sim(args(2, 11, 2));
        assert!(result.is_ok(), "heads-up sim failed: {:?}", result);
        assert!(out.contains("Simulated: 2 hands"));
    }
}
