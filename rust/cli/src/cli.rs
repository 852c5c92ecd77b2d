//! Command-line argument definitions.
//!
//! The clap derive types live here so the parse surface is visible in one
//! place; `run` in the crate root dispatches each variant to its handler in
//! the `commands` module.

use clap::{Args, Parser, Subcommand};

/// Top-level argument parser for the `felt` binary.
#[derive(Debug, Parser)]
#[command(name = "felt", version, about = "Texas Hold'em at the terminal")]
pub struct FeltCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play an interactive session against AI opponents
    Play(PlayArgs),
    /// Run AI-only hands and report the results
    Sim(SimArgs),
    /// Deal a hand face up and run out the board
    Deal(DealArgs),
    /// Score a hand given hole cards and an optional board
    Eval(EvalArgs),
}

#[derive(Debug, Args)]
pub struct PlayArgs {
    /// Shuffle seed for a reproducible session
    #[arg(long)]
    pub seed: Option<u64>,
    /// Number of AI opponents at the table
    #[arg(long)]
    pub opponents: Option<usize>,
    /// Starting chip stack for every seat
    #[arg(long)]
    pub stack: Option<u32>,
    /// Opponent profile: cautious, balanced, aggressive, or random
    #[arg(long)]
    pub profile: Option<String>,
    /// Path to a config file (overrides FELT_CONFIG and felt.toml)
    #[arg(long)]
    pub config: Option<String>,
    /// Stop after this many hands instead of playing to a winner
    #[arg(long)]
    pub hands: Option<u64>,
}

#[derive(Debug, Args)]
pub struct SimArgs {
    /// Number of hands to simulate
    #[arg(long)]
    pub hands: u64,
    /// Base seed; hand i is dealt with seed + i
    #[arg(long)]
    pub seed: Option<u64>,
    /// Number of AI seats at the table
    #[arg(long)]
    pub players: Option<usize>,
    /// Starting chip stack for every seat
    #[arg(long)]
    pub stack: Option<u32>,
    /// Opponent profile: cautious, balanced, aggressive, or random
    #[arg(long)]
    pub profile: Option<String>,
    /// Emit one JSON hand record per line instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct DealArgs {
    /// Shuffle seed for a reproducible deal
    #[arg(long)]
    pub seed: Option<u64>,
    /// Number of seats to deal to
    #[arg(long)]
    pub players: Option<usize>,
}

#[derive(Debug, Args)]
pub struct EvalArgs {
    /// Two hole cards, e.g. "Ah Kh"
    #[arg(long)]
    pub hole: String,
    /// Up to five board cards, e.g. "Qh Jh Th"
    #[arg(long)]
    pub board: Option<String>,
}
