//! Hand representation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// A player's hand of cards.
///
/// Cards keep their insertion order; the AI heuristics and the numbered
/// display the CLI collaborator shows both depend on it.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the back of the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Adds several cards to the back of the hand, preserving their order.
    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Removes and returns the card at the given index.
    ///
    /// Returns `None` if the index is out of range; the hand is unchanged.
    pub fn take(&mut self, index: usize) -> Option<Card> {
        if index < self.cards.len() {
            Some(self.cards.remove(index))
        } else {
            None
        }
    }

    /// Returns the card at the given index without removing it.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Returns the index of the given card.
    ///
    /// Value equality is safe for lookup because no two cards in a single
    /// deck are equal by value.
    #[must_use]
    pub fn index_of(&self, card: &Card) -> Option<usize> {
        self.cards.iter().position(|c| c == card)
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
