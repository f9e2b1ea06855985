//! A two-player climbing card game engine with optional `no_std` support.
//!
//! A 52-card deck is dealt to a human and a computer player, who take turns
//! playing singles, pairs, triples, bombs and runs that must out-rank the
//! play on the table, or passing. The first player to empty their hand wins.
//!
//! The crate provides a [`Game`] type that owns the deck, both hands and the
//! table, validates plays with [`is_valid_play`], and picks the computer's
//! moves with [`select_play`]. Console input and rendering stay outside the
//! crate behind [`InputProvider`] and [`DisplaySink`].
//!
//! # Example
//!
//! ```
//! use climbrs::{Game, GameOptions, PlayerAction};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! if game.current_player() == Some(game.ai_seat()) {
//!     game.play_ai_turn().unwrap();
//! }
//! let _ = game.submit(PlayerAction::Pass).unwrap();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod rules;
pub mod strategy;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, STARTING_CARD, Suit};
pub use deck::Deck;
pub use error::{DeckError, HandError, SelectionError, TurnError};
pub use game::{
    DisplaySink, Game, GameSnapshot, GameState, InputProvider, PLAYER_COUNT, PlayerAction,
    PlayerView, TurnOutcome, TurnState,
};
pub use hand::Hand;
pub use options::{GameOptions, HAND_SIZE, HumanSeat, MAX_DISCARD};
pub use player::{MoveSource, Player};
pub use result::{GameResult, RunStatus};
pub use rules::{BOMB_SIZE, PlayKind, is_bomb, is_valid_play, shared_rank};
pub use strategy::select_play;
