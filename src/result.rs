//! Game result types.

extern crate alloc;

use alloc::string::String;

/// Summary of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    /// Seat index of the winner.
    pub winner: usize,
    /// Name of the winner.
    pub winner_name: String,
    /// Number of turns taken, including passes and discard-and-draw turns.
    pub turns: usize,
    /// Cards the losing player still held.
    pub loser_cards_left: usize,
}

/// How a driven game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    /// A player emptied their hand.
    Finished(GameResult),
    /// The input provider asked to exit.
    Exited,
}
