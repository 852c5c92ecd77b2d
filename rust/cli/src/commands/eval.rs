//! Eval command handler for scoring a hand from the command line.
//!
//! Takes hole cards (and optionally a board) in compact notation, scores
//! them with the engine's evaluator, and names the category. With a board
//! the score is the best 5-card hand available, same as showdown.

use std::collections::HashSet;
use std::io::Write;

use felt_engine::cards::Card;
use felt_engine::hand::{Category, classify, evaluate, evaluate_best_hand};

use crate::cli::EvalArgs;
use crate::error::CliError;
use crate::formatters::{format_board, format_cards};

/// Handle the eval command.
///
/// Parses the cards, rejects impossible inputs (wrong counts, duplicates),
/// and prints the normalized strength plus the category label.
///
/// # Examples
///
/// ```rust
/// use felt_cli::cli::EvalArgs;
/// use felt_cli::commands::handle_eval_command;
///
/// let args = EvalArgs {
///     hole: "Ah Kh".to_string(),
///     board: Some("Qh Jh Th".to_string()),
/// };
/// let mut out = Vec::new();
/// handle_eval_command(args, &mut out).unwrap();
/// let output = String::from_utf8(out).unwrap();
/// assert!(output.contains("Strength: 1.00"));
/// assert!(output.contains("Category: Royal Flush"));
/// ```
pub fn handle_eval_command(args: EvalArgs, out: &mut dyn Write) -> Result<(), CliError> {
    let hole = parse_cards(&args.hole)?;
    if hole.len() != 2 {
        return Err(CliError::InvalidInput(format!(
            "expected exactly 2 hole cards, got {}",
            hole.len()
        )));
    }
    let board = match args.board.as_deref() {
        Some(raw) => parse_cards(raw)?,
        None => Vec::new(),
    };
    if board.len() > 5 {
        return Err(CliError::InvalidInput(format!(
            "the board holds at most 5 cards, got {}",
            board.len()
        )));
    }
    let mut seen = HashSet::new();
    for card in hole.iter().chain(board.iter()) {
        if !seen.insert(card) {
            return Err(CliError::InvalidInput(format!("duplicate card '{}'", card)));
        }
    }

    let strength = if board.is_empty() {
        evaluate(&hole)
    } else {
        evaluate_best_hand(&hole, &board)
    };
    let combined: Vec<Card> = hole.iter().chain(board.iter()).copied().collect();
    let category = classify(&combined).map(Category::label).unwrap_or("High Card");

    writeln!(out, "Hole: {}", format_cards(&hole))?;
    if !board.is_empty() {
        writeln!(out, "Board: {}", format_board(&board))?;
    }
    writeln!(out, "Strength: {:.2}", strength)?;
    writeln!(out, "Category: {}", category)?;
    Ok(())
}

fn parse_cards(input: &str) -> Result<Vec<Card>, CliError> {
    input
        .split_whitespace()
        .map(|tok| {
            tok.parse::<Card>()
                .map_err(|e| CliError::InvalidInput(e.to_string()))
        })
        .collect()
}
