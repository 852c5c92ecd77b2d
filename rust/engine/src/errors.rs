use thiserror::Error;

/// Errors surfaced by table operations. Everything else in the engine
/// is expressed through state, not failures: actions on folded or
/// all-in seats are ignored rather than rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// The deck ran out of cards while dealing or burning.
    #[error("the deck has no cards left to deal")]
    EmptyDeck,
    /// A hand needs at least 2 funded players.
    #[error("cannot start a hand with {seated} player(s), need at least 2")]
    NotEnoughPlayers { seated: usize },
}
