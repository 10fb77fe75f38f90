//! Card types and deck constants.

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but may yield non-standard results when scoring.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns the point value of the card.
    ///
    /// Aces, tens, and face cards are worth 1 point; everything else 0.
    #[must_use]
    pub const fn point(&self) -> u32 {
        match self.rank {
            1 | 10..=13 => 1,
            _ => 0,
        }
    }

    /// Returns whether this card matches the other by rank or by suit.
    ///
    /// This is the capture condition: a play captures the table when the
    /// played card matches the previous table top.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.rank == other.rank || self.suit == other.suit
    }
}

/// Number of cards in the deck.
pub const DECK_SIZE: usize = 52;

/// Number of cards dealt to each hand.
pub const HAND_SIZE: usize = 6;

/// Number of cards dealt face-up to the table at game start.
pub const OPENING_TABLE_CARDS: usize = 4;

/// Bonus points awarded at game end for holding the most won cards.
pub const MOST_CARDS_BONUS: u32 = 3;
