//! Player state and seat identifiers.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::Hand;

/// Identifies one of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The human player.
    Human,
    /// The automated opponent.
    Ai,
}

impl Seat {
    /// Returns the opposite seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Human => Self::Ai,
            Self::Ai => Self::Human,
        }
    }
}

/// State owned by one seat: the hand, the won-cards pile, the last-capture
/// flag, and the endgame bonus accumulator.
#[derive(Debug, Clone, Default)]
pub struct Player {
    /// Cards currently held.
    hand: Hand,
    /// Cards won through captures or endgame allocation.
    won_cards: Vec<Card>,
    /// Whether this seat made the most recent capture.
    won_last: bool,
    /// Endgame bonus points. Kept separate so cards stay immutable.
    bonus: u32,
}

impl Player {
    /// Creates a new player with an empty hand and pile.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Hand::new(),
            won_cards: Vec::new(),
            won_last: false,
            bonus: 0,
        }
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Returns the cards this player has won so far.
    #[must_use]
    pub fn won_cards(&self) -> &[Card] {
        &self.won_cards
    }

    /// Returns whether this seat made the most recent capture.
    #[must_use]
    pub const fn won_last(&self) -> bool {
        self.won_last
    }

    /// Returns the endgame bonus points awarded to this player.
    #[must_use]
    pub const fn bonus(&self) -> u32 {
        self.bonus
    }

    /// Returns the player's score: won-card points plus any bonus.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.won_cards.iter().map(Card::point).sum::<u32>() + self.bonus
    }

    /// Moves the given cards into the won pile.
    pub(crate) fn collect(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.won_cards.extend(cards);
    }

    pub(crate) const fn set_won_last(&mut self, won_last: bool) {
        self.won_last = won_last;
    }

    pub(crate) const fn add_bonus(&mut self, points: u32) {
        self.bonus += points;
    }
}
