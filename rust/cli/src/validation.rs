//! Input parsing for interactive commands.
//!
//! The play command reads free-form text from the player and turns it into
//! an engine [`Action`] here, so the prompt loop itself stays small.

use felt_engine::player::Action;

/// Result type for parsing user input into player actions.
///
/// Quit is separated from the actions because it ends the session rather
/// than the hand; the prompt loop handles it before touching the table.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid player action parsed from input
    Action(Action),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input string into an [`Action`] or special commands.
///
/// Accepts the following input formats (case-insensitive):
/// - "f" or "fold" → Fold
/// - "c" or "check" → Check
/// - "call" → Call
/// - "raise X" → Raise by X over the current bet level
/// - "q" or "quit" → Quit command
///
/// # Example
///
/// ```rust
/// # use felt_cli::validation::{parse_player_action, ParseResult};
/// use felt_engine::player::Action;
///
/// assert_eq!(
///     parse_player_action("fold"),
///     ParseResult::Action(Action::Fold)
/// );
///
/// assert_eq!(
///     parse_player_action("raise 50"),
///     ParseResult::Action(Action::Raise(50))
/// );
///
/// assert_eq!(parse_player_action("q"), ParseResult::Quit);
///
/// match parse_player_action("invalid") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }

    // Check for quit commands first
    if parts[0] == "q" || parts[0] == "quit" {
        return ParseResult::Quit;
    }

    match parts[0] {
        "fold" | "f" => ParseResult::Action(Action::Fold),
        "check" | "c" => ParseResult::Action(Action::Check),
        "call" => ParseResult::Action(Action::Call),
        "raise" => {
            if parts.len() < 2 {
                return ParseResult::Invalid(
                    "Raise requires an amount (e.g., 'raise 50')".to_string(),
                );
            }
            match parts[1].parse::<u32>() {
                Ok(amount) if amount > 0 => ParseResult::Action(Action::Raise(amount)),
                Ok(_) => ParseResult::Invalid("Raise amount must be positive".to_string()),
                Err(_) => ParseResult::Invalid("Invalid raise amount".to_string()),
            }
        }
        _ => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: fold, check, call, raise <amount>, q",
            parts[0]
        )),
    }
}
