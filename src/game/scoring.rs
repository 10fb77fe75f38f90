use core::cmp::Ordering;

use crate::card::MOST_CARDS_BONUS;
use crate::player::Seat;
use crate::result::ScoreSnapshot;

use super::Game;

impl Game {
    /// Allocates the leftover table and the most-cards bonus.
    ///
    /// Runs exactly once, when the deck and both hands have emptied. Skipped
    /// entirely on an early exit.
    pub(super) fn resolve_endgame(&mut self) {
        if !self.table.is_empty() {
            let recipient = if self.human.won_cards().is_empty() && self.ai.won_cards().is_empty()
            {
                // Nobody captured all game: the first mover takes the table.
                self.config.first_mover
            } else if self.ai.won_last() {
                Seat::Ai
            } else {
                Seat::Human
            };

            let cards = self.table.take_all();
            self.player_mut(recipient).collect(cards);
        }

        // Pile sizes are compared after the leftover award. The bonus lands
        // in an accumulator, so an empty pile is not a problem even on a
        // zero-zero tie.
        let bonus_seat = match self
            .human
            .won_cards()
            .len()
            .cmp(&self.ai.won_cards().len())
        {
            Ordering::Equal => self.config.first_mover,
            Ordering::Greater => Seat::Human,
            Ordering::Less => Seat::Ai,
        };
        self.player_mut(bonus_seat).add_bonus(MOST_CARDS_BONUS);
    }

    /// Returns the current scores and won-card counts.
    ///
    /// Queryable at any time; final values are authoritative only once the
    /// game is over.
    #[must_use]
    pub fn scores(&self) -> ScoreSnapshot {
        ScoreSnapshot {
            player_score: self.human.score(),
            ai_score: self.ai.score(),
            player_cards: self.human.won_cards().len(),
            ai_cards: self.ai.won_cards().len(),
        }
    }
}
