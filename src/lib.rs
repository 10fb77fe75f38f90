//! A trick-capture card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages a two-player session
//! over a standard 52-card deck: the opening deal, alternating plays, the
//! rank-or-suit capture rule, hand replenishment, the automated opponent's
//! card selection, and endgame scoring. Prompting and rendering are left to
//! the caller.
//!
//! # Example
//!
//! ```no_run
//! use indigors::{Game, GameConfig};
//!
//! let config = GameConfig::default();
//! let mut game = Game::new(config, 42);
//! game.deal().expect("fresh game");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, HAND_SIZE, MOST_CARDS_BONUS, OPENING_TABLE_CARDS, Suit};
pub use error::{DealError, PlayError};
pub use game::{Game, GameState};
pub use hand::Hand;
pub use options::GameConfig;
pub use player::{Player, Seat};
pub use result::{ScoreSnapshot, TurnOutcome};
pub use table::Table;
