//! Game engine and state management.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, HAND_SIZE, OPENING_TABLE_CARDS, Suit};
use crate::error::DealError;
use crate::options::GameConfig;
use crate::player::{Player, Seat};
use crate::table::Table;

mod actions;
pub mod ai;
mod scoring;
pub mod state;

pub use state::GameState;

/// A two-player trick-capture game engine.
///
/// The game owns the deck, the table pile, and both players' state. It is
/// built in two phases: [`Game::new`] shuffles the deck from a seed, and
/// [`Game::deal`] performs the opening deal. The same seed always produces
/// the same shuffle.
pub struct Game {
    /// Cards remaining in the deck, drawn from the back.
    pub deck: Vec<Card>,
    /// Game configuration.
    pub config: GameConfig,
    /// The face-up table pile.
    table: Table,
    /// The human seat.
    human: Player,
    /// The automated seat.
    ai: Player,
    /// Current game state.
    state: GameState,
    /// Whether the human requested an early exit.
    exit_requested: bool,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use indigors::{Game, GameConfig};
    ///
    /// let config = GameConfig::default();
    /// let game = Game::new(config, 42);
    /// let _ = game;
    /// ```
    #[must_use]
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Self::build_deck(&mut rng);

        Self {
            deck,
            config,
            table: Table::new(),
            human: Player::new(),
            ai: Player::new(),
            state: GameState::WaitingForDeal,
            exit_requested: false,
        }
    }

    /// Creates and shuffles the 52-card deck.
    fn build_deck(rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades] {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        cards
    }

    /// Performs the opening deal: four cards face-up to the table and six to
    /// each hand, then hands the turn to the configured first mover.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has already been dealt, or if the deck
    /// holds fewer than the sixteen cards the opening deal requires. Nothing
    /// is mutated on an error.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::WaitingForDeal {
            return Err(DealError::InvalidState);
        }

        if self.deck.len() < OPENING_TABLE_CARDS + 2 * HAND_SIZE {
            return Err(DealError::NotEnoughCards);
        }

        for _ in 0..OPENING_TABLE_CARDS {
            if let Some(card) = self.deck.pop() {
                self.table.place(card);
            }
        }

        for seat in [Seat::Human, Seat::Ai] {
            let cards = self
                .draw_many(HAND_SIZE)
                .ok_or(DealError::NotEnoughCards)?;
            self.player_mut(seat).hand_mut().add_cards(cards);
        }

        self.state = GameState::turn_of(self.config.first_mover);
        Ok(())
    }

    /// Removes and returns the top `n` cards of the deck, in draw order.
    ///
    /// Returns `None` without drawing anything if fewer than `n` remain.
    fn draw_many(&mut self, n: usize) -> Option<Vec<Card>> {
        if self.deck.len() < n {
            return None;
        }

        let mut cards = Vec::with_capacity(n);
        for _ in 0..n {
            cards.push(self.deck.pop()?);
        }
        Some(cards)
    }

    /// Returns the player at the given seat.
    #[must_use]
    pub const fn player(&self, seat: Seat) -> &Player {
        match seat {
            Seat::Human => &self.human,
            Seat::Ai => &self.ai,
        }
    }

    pub(crate) const fn player_mut(&mut self, seat: Seat) -> &mut Player {
        match seat {
            Seat::Human => &mut self.human,
            Seat::Ai => &mut self.ai,
        }
    }

    /// Returns the table pile.
    #[must_use]
    pub const fn table(&self) -> &Table {
        &self.table
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the seat whose turn it is, or `None` before the deal and
    /// after the game ends.
    #[must_use]
    pub const fn active_seat(&self) -> Option<Seat> {
        self.state.active_seat()
    }

    /// Returns the seat that took the first turn.
    #[must_use]
    pub const fn first_mover(&self) -> Seat {
        self.config.first_mover
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns whether the game ended through an exit signal rather than by
    /// playing out the deck.
    #[must_use]
    pub const fn exit_requested(&self) -> bool {
        self.exit_requested
    }
}
