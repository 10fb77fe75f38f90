//! Outcome types reported to the display collaborator.

use crate::card::Card;
use crate::player::Seat;

/// Result of a single play (or an exit signal).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    /// The seat that acted.
    pub seat: Seat,
    /// The card played. `None` only for an exit signal.
    pub card: Option<Card>,
    /// The seat that captured the table, if a capture occurred.
    pub capture: Option<Seat>,
    /// The table's top card after the play.
    pub table_top: Option<Card>,
    /// The number of cards on the table after the play.
    pub table_size: usize,
    /// Whether the acting seat's hand was replenished from the deck.
    pub replenished: bool,
    /// Whether the game has reached its terminal state.
    pub game_over: bool,
}

/// Snapshot of both players' scores and won-card counts.
///
/// Queryable at any time; authoritative only once the game is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSnapshot {
    /// The human player's score.
    pub player_score: u32,
    /// The automated player's score.
    pub ai_score: u32,
    /// Cards in the human player's won pile.
    pub player_cards: usize,
    /// Cards in the automated player's won pile.
    pub ai_cards: usize,
}
