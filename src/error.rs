//! Error types for game operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when dealing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// More cards were requested than remain in the deck.
    #[error("not enough cards in the deck: requested {requested}, {remaining} remaining")]
    InsufficientCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
}

/// Errors that can occur when mutating a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// A discard named a card the player does not hold.
    #[error("card {0} is not in hand")]
    CardNotInHand(Card),
}

/// Errors in a human player's card selection.
///
/// These are recoverable: the caller should ask for a new selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// An index does not point at a card in the hand.
    #[error("card index {index} is out of range for a hand of {len}")]
    CardIndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of cards in the hand.
        len: usize,
    },
    /// The same index was selected more than once.
    #[error("card index {0} was selected more than once")]
    DuplicateIndex(usize),
    /// No cards were selected for a play.
    #[error("no cards selected")]
    EmptySelection,
    /// The discard count is outside the allowed range.
    #[error("cannot discard {count} cards (maximum {max})")]
    DiscardCountOutOfRange {
        /// Requested discard count.
        count: usize,
        /// Maximum allowed discard count.
        max: usize,
    },
    /// The number of selected cards does not match the declared count.
    #[error("expected {expected} selected cards, got {actual}")]
    CountMismatch {
        /// Declared count.
        expected: usize,
        /// Number of indices supplied.
        actual: usize,
    },
}

/// Errors that can occur while processing a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// The game is over; no further turns can be taken.
    #[error("the game is over")]
    GameOver,
    /// The action is not available to the player whose turn it is.
    #[error("action is not available to the current player")]
    NotYourTurn,
    /// The human's card selection was malformed.
    #[error(transparent)]
    Selection(#[from] SelectionError),
    /// The deck could not supply the requested cards.
    #[error(transparent)]
    Deck(#[from] DeckError),
    /// A hand mutation referenced cards the player does not hold.
    #[error(transparent)]
    Hand(#[from] HandError),
}
