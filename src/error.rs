//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur during the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards in the deck for the opening deal.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur while submitting a play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Invalid game state for playing a card.
    #[error("invalid game state for playing a card")]
    InvalidState,
    /// Not this seat's turn.
    #[error("not this seat's turn")]
    NotYourTurn,
    /// No card at the given hand index.
    #[error("no card at the given hand index")]
    NoSuchCard,
    /// The automated player has no card to play.
    ///
    /// Signals a logic defect: unreachable from a standard 52-card deal,
    /// where both hands empty and refill in lockstep.
    #[error("the automated player has no card to play")]
    EmptyHand,
    /// Not enough cards in the deck to replenish a hand.
    ///
    /// Defensive: replenishment is only attempted when the deck holds at
    /// least a full hand.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}
