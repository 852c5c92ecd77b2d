//! Card, board, and action formatters for terminal display.
//!
//! Pure functions that turn engine values into the strings the commands
//! print. Card suits render as Unicode symbols with an ASCII fallback for
//! terminal environments that don't support them.
//!
//! ## Unicode vs ASCII Fallback
//!
//! On Windows the module checks for a modern terminal (WT_SESSION,
//! TERM_PROGRAM, VSCODE_INJECTION) before using ♥ ♦ ♣ ♠; everywhere else
//! Unicode is assumed. The ASCII fallback uses the same suit letters the
//! card parser accepts (h d c s), so printed cards can be fed back in.
//!
//! ## Example
//!
//! ```rust
//! use felt_engine::cards::{Card, Rank, Suit};
//! use felt_cli::formatters::{format_card, format_board};
//!
//! let ace_spades = Card { rank: Rank::Ace, suit: Suit::Spades };
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//!
//! let board = vec![ace_spades];
//! assert!(format_board(&board).starts_with("[A"));
//! ```

use felt_engine::cards::{Card, Rank, Suit};
use felt_engine::player::Action;

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM), or VS Code (VSCODE_INJECTION). On Unix-like systems,
/// assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// Format a suit as a Unicode symbol (♥ ♦ ♣ ♠) or ASCII letter (h d c s).
pub fn format_suit(suit: Suit) -> String {
    if supports_unicode() {
        suit.symbol().to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// Format a rank as its display label: "2" through "10", then face letters.
pub fn format_rank(rank: Rank) -> &'static str {
    rank.label()
}

/// Format a card as rank then suit, e.g. "A♠" (Unicode) or "As" (ASCII).
pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(card.rank), format_suit(card.suit))
}

/// Format a list of cards separated by spaces, e.g. "A♠ K♥".
///
/// Used for hole cards; the board gets bracket notation via
/// [`format_board`].
pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(format_card)
        .collect::<Vec<String>>()
        .join(" ")
}

/// Format a board in bracket notation, e.g. "[A♠ K♥ Q♦]" or "[]" if empty.
///
/// # Example
///
/// ```rust
/// use felt_engine::cards::{Card, Rank, Suit};
/// # use felt_cli::formatters::format_board;
///
/// let flop = vec![
///     Card { rank: Rank::Ace, suit: Suit::Spades },
///     Card { rank: Rank::King, suit: Suit::Hearts },
///     Card { rank: Rank::Queen, suit: Suit::Diamonds },
/// ];
/// let formatted = format_board(&flop);
/// assert!(formatted.starts_with("[A"));
/// assert!(formatted.ends_with("]"));
/// ```
pub fn format_board(cards: &[Card]) -> String {
    if cards.is_empty() {
        "[]".to_string()
    } else {
        format!("[{}]", format_cards(cards))
    }
}

/// Format a player action as a human-readable string.
///
/// # Example
///
/// ```rust
/// use felt_engine::player::Action;
/// # use felt_cli::formatters::format_action;
///
/// assert_eq!(format_action(&Action::Fold), "fold");
/// assert_eq!(format_action(&Action::Raise(100)), "raise 100");
/// ```
pub fn format_action(action: &Action) -> String {
    match action {
        Action::Fold => "fold".to_string(),
        Action::Check => "check".to_string(),
        Action::Call => "call".to_string(),
        Action::Raise(amount) => format!("raise {}", amount),
    }
}

/// Name the hand category a normalized strength score falls in.
///
/// The bands mirror the engine's score ladder; scores inside the high-card
/// band carry a kicker bonus, so anything under the pair floor reads as
/// "High Card".
pub fn describe_strength(strength: f64) -> &'static str {
    if strength >= 1.0 {
        "Royal Flush"
    } else if strength >= 0.95 {
        "Straight Flush"
    } else if strength >= 0.90 {
        "Four of a Kind"
    } else if strength >= 0.85 {
        "Full House"
    } else if strength >= 0.80 {
        "Flush"
    } else if strength >= 0.75 {
        "Straight"
    } else if strength >= 0.70 {
        "Three of a Kind"
    } else if strength >= 0.65 {
        "Two Pair"
    } else if strength >= 0.60 {
        "Pair"
    } else {
        "High Card"
    }
}
