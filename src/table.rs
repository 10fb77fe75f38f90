//! The face-up table pile.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// The stack of cards played face-up on the table.
///
/// Only the top two entries are ever inspected for capture; the full stack
/// is handed to a winner on capture or at game end.
#[derive(Debug, Clone, Default)]
pub struct Table {
    /// Cards on the table, bottom first.
    cards: Vec<Card>,
}

impl Table {
    /// Creates a new empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Places a card on top of the table pile.
    pub fn place(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Returns whether the top two cards trigger a capture.
    ///
    /// True iff the table holds at least two cards and the most recently
    /// played card matches the previous top by rank or by suit.
    #[must_use]
    pub fn is_capture(&self) -> bool {
        match self.cards.as_slice() {
            [.., previous, top] => top.matches(previous),
            _ => false,
        }
    }

    /// Removes and returns the entire table pile.
    pub fn take_all(&mut self) -> Vec<Card> {
        core::mem::take(&mut self.cards)
    }

    /// Returns the cards on the table, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards on the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
