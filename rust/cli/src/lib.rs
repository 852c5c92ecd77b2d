//! # Felt CLI Library
//!
//! Command-line interface for the Felt poker engine: interactive play,
//! AI-only simulation, face-up deals, and hand scoring.
//!
//! The entry point is [`run`], which parses arguments and dispatches to
//! the matching subcommand handler.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["felt", "play", "--opponents", "3", "--hands", "10"];
//! let code = felt_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Subcommands
//!
//! - `play`: interactive Texas Hold'em against AI opponents
//! - `sim`: AI-only hand batches, reported as text or JSON records
//! - `deal`: deal a hand face up and run out the board
//! - `eval`: score hole cards against an optional board

use std::io::Write;

use clap::Parser;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod formatters;
pub mod io_utils;
pub mod ui;
pub mod validation;

use cli::{Commands, FeltCli};
use commands::{
    handle_deal_command, handle_eval_command, handle_play_command, handle_sim_command,
};

pub use error::CliError;

/// Main entry point for the CLI.
///
/// Parses command-line arguments and dispatches to the matching
/// subcommand handler.
///
/// # Arguments
///
/// * `args` - Command-line arguments (typically `std::env::args()`)
/// * `out` - Stream for normal output (typically `stdout`)
/// * `err` - Stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` when input closes
/// mid-prompt during play.
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["felt", "deal", "--seed", "42"];
/// let code = felt_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "sim", "deal", "eval"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = FeltCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return 2;
                    }
                    0
                }
                _ => {
                    // Clap's own message first, then the command list
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err).is_err()
                        || writeln!(err, "Felt Poker CLI").is_err()
                        || writeln!(err, "Usage: felt <command> [options]\n").is_err()
                        || writeln!(err, "Commands:").is_err()
                    {
                        return 2;
                    }
                    for c in COMMANDS {
                        if writeln!(err, "  {}", c).is_err() {
                            return 2;
                        }
                    }
                    if writeln!(err, "\nFor full help, run: felt --help").is_err() {
                        return 2;
                    }
                    2
                }
            }
        }
        Ok(cli) => match cli.cmd {
            Commands::Play(args) => {
                // Real stdin, so both TTYs and piped input work
                let stdin = std::io::stdin();
                let mut stdin_lock = stdin.lock();
                match handle_play_command(args, out, err, &mut stdin_lock) {
                    Ok(()) => 0,
                    Err(CliError::Interrupted(_)) => 130,
                    Err(e) => {
                        if writeln!(err, "Error: {}", e).is_err() {
                            return 2;
                        }
                        2
                    }
                }
            }
            Commands::Sim(args) => match handle_sim_command(args, out, err) {
                Ok(()) => 0,
                Err(e) => {
                    if writeln!(err, "Error: {}", e).is_err() {
                        return 2;
                    }
                    2
                }
            },
            Commands::Deal(args) => match handle_deal_command(args, out) {
                Ok(()) => 0,
                Err(e) => {
                    if writeln!(err, "Error: {}", e).is_err() {
                        return 2;
                    }
                    2
                }
            },
            Commands::Eval(args) => match handle_eval_command(args, out) {
                Ok(()) => 0,
                Err(e) => {
                    if writeln!(err, "Error: {}", e).is_err() {
                        return 2;
                    }
                    2
                }
            },
        },
    }
}
