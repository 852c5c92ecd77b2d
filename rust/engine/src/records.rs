use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::player::Action;

/// A betting street, in hand order. `Showdown` is the terminal phase
/// where remaining hands are compared.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Street {
    /// Hole cards dealt, no community cards yet
    PreFlop,
    /// 3 community cards out
    Flop,
    /// 4th community card out
    Turn,
    /// 5th community card out
    River,
    /// Hands revealed, pot awarded
    Showdown,
}

/// One processed player action, tagged with the seat and the street it
/// happened on.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Seat index at the table
    pub seat: usize,
    /// The street when this action was taken
    pub street: Street,
    /// The action taken
    pub action: Action,
}

/// Per-seat showdown reveal: the evaluated strength and its category
/// label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowdownEntry {
    /// Seat index at the table
    pub seat: usize,
    /// Normalized hand strength in [0.0, 1.0]
    pub strength: f64,
    /// Category name, e.g. "Two Pair"
    pub category: String,
}

/// Complete record of one played hand. Kept in memory and serialized
/// on demand; the engine never writes these to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// 1-based hand number within the session
    pub hand_no: u64,
    /// Shuffle seed, when the hand was dealt deterministically
    pub seed: Option<u64>,
    /// Chronological list of processed actions
    pub actions: Vec<ActionRecord>,
    /// Community cards at the end of the hand (up to 5)
    pub board: Vec<Card>,
    /// Winning seat, `None` if every seat folded
    pub winner_seat: Option<usize>,
    /// Chips awarded to the winner
    pub pot_won: u32,
    /// RFC3339 timestamp of when the hand finished
    #[serde(default)]
    pub ts: Option<String>,
    /// Extensible metadata object
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
    /// Showdown reveals, empty when the hand ended on folds
    #[serde(default)]
    pub showdown: Vec<ShowdownEntry>,
}

/// Current time as an RFC3339 string with second precision, e.g.
/// `2026-08-23T10:05:00Z`.
pub fn rfc3339_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
