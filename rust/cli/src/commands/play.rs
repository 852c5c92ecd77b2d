//! # Play Command
//!
//! Interactive Texas Hold'em against AI opponents.
//!
//! One human seat ("You") plus a configurable field of AI seats. Hands
//! chain until one stack holds every chip, the human busts or quits, or a
//! `--hands` limit is reached. Betting runs pre-flop; once the round
//! settles, the board runs out street by street and the hand is settled
//! at showdown, folded-out hands included.

use std::io::{BufRead, Write};

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use felt_ai::Opponent;
use felt_engine::errors::GameError;
use felt_engine::player::Action;
use felt_engine::records::Street;
use felt_engine::table::Table;

use crate::cli::PlayArgs;
use crate::commands::{build_opponent, opponent_name};
use crate::config;
use crate::error::CliError;
use crate::formatters::{describe_strength, format_action, format_board, format_cards};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_player_action};

/// What the human chose at a prompt.
enum HumanMove {
    Action(Action),
    Quit,
}

/// How a single hand ended.
enum HandOutcome {
    Settled,
    Quit,
}

/// Handle the play command: an interactive session against AI seats.
///
/// Table setup comes from config layered under the command-line flags;
/// the shuffle seed is printed in the header so a session can be
/// replayed. Deliberate quits end the session cleanly; input closing
/// mid-prompt surfaces as [`CliError::Interrupted`].
///
/// # Examples
///
/// ```rust,no_run
/// use felt_cli::cli::PlayArgs;
/// use felt_cli::commands::handle_play_command;
/// use std::io;
///
/// let args = PlayArgs {
///     seed: Some(42),
///     opponents: Some(3),
///     stack: None,
///     profile: None,
///     config: None,
///     hands: None,
/// };
/// let mut out = io::stdout();
/// let mut err = io::stderr();
/// let stdin = io::stdin();
/// handle_play_command(args, &mut out, &mut err, &mut stdin.lock()).unwrap();
/// ```
pub fn handle_play_command(
    args: PlayArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    if args.hands == Some(0) {
        ui::write_error(err, "hands must be >= 1")?;
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }

    let mut cfg = config::load_from(args.config.as_deref())?;
    if let Some(stack) = args.stack {
        cfg.starting_stack = stack;
    }
    if let Some(opponents) = args.opponents {
        cfg.opponents = opponents;
    }
    if let Some(seed) = args.seed {
        cfg.seed = Some(seed);
    }
    if let Some(profile) = &args.profile {
        cfg.profile = profile.clone();
    }
    config::validate(&cfg)?;

    let seed = cfg.seed.unwrap_or_else(rand::random);
    // Offset so AI decisions don't replay the deck's stream.
    let mut rng = ChaCha20Rng::seed_from_u64(seed.wrapping_add(1));

    let mut table = Table::new_with_seed(seed);
    table.add_player("You", cfg.starting_stack, false);
    let mut opponents: Vec<Box<dyn Opponent>> = Vec::with_capacity(cfg.opponents);
    for i in 0..cfg.opponents {
        let name = opponent_name(i);
        table.add_player(name.clone(), cfg.starting_stack, true);
        opponents.push(build_opponent(&cfg.profile, &name, &mut rng)?);
    }

    writeln!(
        out,
        "play: opponents={} stack={} profile={} seed={}",
        cfg.opponents, cfg.starting_stack, cfg.profile, seed
    )?;

    let mut hand_no: u64 = 0;
    let mut quit = false;
    loop {
        match table.start_new_hand() {
            Ok(()) => {}
            Err(GameError::NotEnoughPlayers { .. }) => break,
            Err(e) => return Err(e.into()),
        }
        hand_no += 1;

        writeln!(out)?;
        writeln!(out, "Hand {}", hand_no)?;
        if let Some(human) = table.players().iter().find(|p| !p.is_ai()) {
            writeln!(out, "Your cards: {}", format_cards(human.hand()))?;
        }
        if table.pot() > 0 {
            writeln!(out, "Blinds posted, pot {}", table.pot())?;
        }

        match run_hand(&mut table, &opponents, &mut rng, out, err, stdin)? {
            HandOutcome::Settled => {}
            HandOutcome::Quit => {
                quit = true;
                writeln!(out, "Goodbye.")?;
                break;
            }
        }
        show_stacks(&table, out)?;

        if let Some(limit) = args.hands
            && hand_no >= limit
        {
            break;
        }
        if table.players().iter().filter(|p| p.chips() > 0).count() <= 1 {
            break;
        }
        match table.players().iter().find(|p| !p.is_ai()) {
            Some(p) if p.chips() == 0 => {
                writeln!(out, "You are out of chips.")?;
                break;
            }
            Some(_) => {}
            None => break,
        }
    }

    writeln!(out, "Session over after {} hand(s).", hand_no)?;
    let funded: Vec<_> = table.players().iter().filter(|p| p.chips() > 0).collect();
    if !quit && funded.len() == 1 {
        if funded[0].is_ai() {
            writeln!(out, "{} holds all the chips.", funded[0].name())?;
        } else {
            writeln!(out, "You hold all the chips.")?;
        }
    }
    Ok(())
}

/// Drives one hand to showdown or a quit.
///
/// Round completion is checked before every action; once a street's
/// betting settles, the next card comes out. Heads-up tables post no
/// blinds, so the opening check is skipped until someone has acted or
/// chips sit in the pot, otherwise the only betting round would be
/// fast-forwarded past.
fn run_hand(
    table: &mut Table,
    opponents: &[Box<dyn Opponent>],
    rng: &mut ChaCha20Rng,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<HandOutcome, CliError> {
    let mut acted = table.pot() > 0;
    loop {
        if acted && table.is_betting_round_complete() {
            match table.street() {
                Street::PreFlop => {
                    table.reset_bets();
                    table.deal_flop()?;
                    writeln!(out, "Flop: {}", format_board(table.community_cards()))?;
                }
                Street::Flop => {
                    table.reset_bets();
                    table.deal_turn()?;
                    writeln!(out, "Turn: {}", format_board(table.community_cards()))?;
                }
                Street::Turn => {
                    table.reset_bets();
                    table.deal_river()?;
                    writeln!(out, "River: {}", format_board(table.community_cards()))?;
                }
                Street::River | Street::Showdown => {
                    table.reset_bets();
                    table.enter_showdown();
                    settle_hand(table, out)?;
                    return Ok(HandOutcome::Settled);
                }
            }
            continue;
        }

        let seat = table.current_player_index();
        if table.players()[seat].is_ai() {
            let name = table.players()[seat].name().to_string();
            let action = opponents
                .iter()
                .find(|o| o.name() == name)
                .map(|o| o.act(table, seat, rng))
                .unwrap_or(Action::Check);
            writeln!(out, "{}: {}", name, format_action(&action))?;
            table.process_action(action);
        } else {
            match prompt_human(table, out, err, stdin)? {
                HumanMove::Action(action) => {
                    writeln!(out, "You: {}", format_action(&action))?;
                    table.process_action(action);
                }
                HumanMove::Quit => return Ok(HandOutcome::Quit),
            }
        }
        acted = true;
    }
}

/// Prompts until the human enters a recognizable action or quits.
/// `None` from stdin means input closed with a decision pending, which
/// is an interruption, not a quit.
fn prompt_human(
    table: &Table,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<HumanMove, CliError> {
    let seat = table.current_player_index();
    let player = &table.players()[seat];
    let to_call = table.current_bet_level().saturating_sub(player.current_bet());
    writeln!(
        out,
        "Pot: {}  To call: {}  Chips: {}",
        table.pot(),
        to_call,
        player.chips()
    )?;
    loop {
        write!(out, "Enter action (fold/check/call/raise <n>/quit): ")?;
        out.flush()?;
        let Some(line) = read_stdin_line(stdin) else {
            return Err(CliError::Interrupted("input closed".to_string()));
        };
        match parse_player_action(&line) {
            ParseResult::Action(Action::Check) if to_call > 0 => {
                ui::display_warning(
                    err,
                    &format!("{} to call, checking leaves the bet unmatched", to_call),
                )?;
                return Ok(HumanMove::Action(Action::Check));
            }
            ParseResult::Action(action) => return Ok(HumanMove::Action(action)),
            ParseResult::Quit => return Ok(HumanMove::Quit),
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }
}

/// Prints the showdown and moves the pot to the winner. The pot is read
/// before distribution zeroes it.
fn settle_hand(table: &mut Table, out: &mut dyn Write) -> Result<(), CliError> {
    let pot = table.pot();
    writeln!(out, "Showdown:")?;
    for player in table.players() {
        if player.is_folded() {
            continue;
        }
        let strength = player.hand_strength(table.community_cards());
        writeln!(
            out,
            "  {}: {}  {:.2} ({})",
            player.name(),
            format_cards(player.hand()),
            strength,
            describe_strength(strength)
        )?;
    }
    if let Some(winner) = table.determine_winner() {
        let name = table.players()[winner].name().to_string();
        table.distribute_pot(winner);
        writeln!(out, "{} wins the pot of {} chips", name, pot)?;
    }
    Ok(())
}

fn show_stacks(table: &Table, out: &mut dyn Write) -> Result<(), CliError> {
    let stacks: Vec<String> = table
        .players()
        .iter()
        .map(|p| format!("{}={}", p.name(), p.chips()))
        .collect();
    writeln!(out, "Stacks: {}", stacks.join(" "))?;
    Ok(())
}
