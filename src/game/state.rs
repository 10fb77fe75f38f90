//! Game state types.

use crate::player::Seat;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the opening deal.
    WaitingForDeal,
    /// Waiting for the human player's card (or an exit signal).
    PlayerTurn,
    /// Waiting for the automated player to act.
    AiTurn,
    /// The game has ended.
    GameOver,
}

impl GameState {
    /// Returns the turn state for the given seat.
    #[must_use]
    pub const fn turn_of(seat: Seat) -> Self {
        match seat {
            Seat::Human => Self::PlayerTurn,
            Seat::Ai => Self::AiTurn,
        }
    }

    /// Returns the seat that is to act, if any.
    #[must_use]
    pub const fn active_seat(self) -> Option<Seat> {
        match self {
            Self::PlayerTurn => Some(Seat::Human),
            Self::AiTurn => Some(Seat::Ai),
            Self::WaitingForDeal | Self::GameOver => None,
        }
    }
}
