//! Game configuration.

use crate::player::Seat;

/// Configuration for a game, produced by the setup collaborator before the
/// deal.
///
/// Use the builder pattern to customize:
///
/// ```
/// use indigors::{GameConfig, Seat};
///
/// let config = GameConfig::default().with_first_mover(Seat::Ai);
/// assert_eq!(config.first_mover, Seat::Ai);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Which seat takes the first turn.
    ///
    /// The first mover also receives the leftover table when nobody captured
    /// during the game, and the endgame bonus when the pile sizes tie.
    pub first_mover: Seat,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_mover: Seat::Human,
        }
    }
}

impl GameConfig {
    /// Sets which seat moves first.
    ///
    /// # Example
    ///
    /// ```
    /// use indigors::{GameConfig, Seat};
    ///
    /// let config = GameConfig::default().with_first_mover(Seat::Human);
    /// assert_eq!(config.first_mover, Seat::Human);
    /// ```
    #[must_use]
    pub const fn with_first_mover(mut self, seat: Seat) -> Self {
        self.first_mover = seat;
        self
    }
}
