use crate::card::HAND_SIZE;
use crate::error::PlayError;
use crate::player::Seat;
use crate::result::TurnOutcome;

use super::{Game, GameState, ai};

impl Game {
    fn ensure_turn(&self, seat: Seat) -> Result<(), PlayError> {
        match self.state.active_seat() {
            Some(active) if active == seat => Ok(()),
            Some(_) => Err(PlayError::NotYourTurn),
            None => Err(PlayError::InvalidState),
        }
    }

    /// Submits the human player's play by hand index (0-based).
    ///
    /// The collaborator is expected to validate its 1-based prompt input
    /// before converting it; an out-of-range index that does arrive here is
    /// rejected without mutating anything.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the human's turn or the index does not
    /// name a card in the hand.
    pub fn submit_human_play(&mut self, index: usize) -> Result<TurnOutcome, PlayError> {
        self.ensure_turn(Seat::Human)?;
        self.play_from_hand(Seat::Human, index)
    }

    /// Submits the human player's exit signal, ending the game immediately.
    ///
    /// No piles are touched and no endgame allocation runs: scores keep
    /// whatever value the piles currently hold.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the human's turn.
    pub fn submit_exit(&mut self) -> Result<TurnOutcome, PlayError> {
        self.ensure_turn(Seat::Human)?;

        self.exit_requested = true;
        self.state = GameState::GameOver;

        Ok(TurnOutcome {
            seat: Seat::Human,
            card: None,
            capture: None,
            table_top: self.table.top().copied(),
            table_size: self.table.len(),
            replenished: false,
            game_over: true,
        })
    }

    /// Computes and applies the automated player's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the automated player's turn, or
    /// [`PlayError::EmptyHand`] if it has nothing to play (a defect signal,
    /// unreachable from a standard 52-card deal).
    pub fn run_ai_turn(&mut self) -> Result<TurnOutcome, PlayError> {
        self.ensure_turn(Seat::Ai)?;

        let index = ai::choose_card(self.ai.hand().cards(), self.table.top().copied())
            .ok_or(PlayError::EmptyHand)?;
        self.play_from_hand(Seat::Ai, index)
    }

    /// One play cycle: move the card to the table, resolve capture,
    /// replenish an emptied hand, switch the turn, and check termination.
    fn play_from_hand(&mut self, seat: Seat, index: usize) -> Result<TurnOutcome, PlayError> {
        let Some(card) = self.player_mut(seat).hand_mut().take(index) else {
            return Err(PlayError::NoSuchCard);
        };
        self.table.place(card);

        let capture = if self.table.is_capture() {
            self.award_table(seat);
            Some(seat)
        } else {
            None
        };

        // Literal threshold: a deck of 1-5 cards leaves the hand empty
        // until the deck also empties.
        let mut replenished = false;
        if self.player(seat).hand().is_empty() && self.deck.len() >= HAND_SIZE {
            let cards = self
                .draw_many(HAND_SIZE)
                .ok_or(PlayError::NotEnoughCards)?;
            self.player_mut(seat).hand_mut().add_cards(cards);
            replenished = true;
        }

        self.state = GameState::turn_of(seat.other());

        let game_over =
            self.deck.is_empty() && self.human.hand().is_empty() && self.ai.hand().is_empty();
        if game_over {
            self.resolve_endgame();
            self.state = GameState::GameOver;
        }

        Ok(TurnOutcome {
            seat,
            card: Some(card),
            capture,
            table_top: self.table.top().copied(),
            table_size: self.table.len(),
            replenished,
            game_over,
        })
    }

    /// Awards the entire table to the given seat and flips the last-capture
    /// flags.
    fn award_table(&mut self, seat: Seat) {
        let cards = self.table.take_all();
        self.player_mut(seat).collect(cards);
        self.player_mut(seat).set_won_last(true);
        self.player_mut(seat.other()).set_won_last(false);
    }
}
