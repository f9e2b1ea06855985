//! Game state types.

use alloc::vec::Vec;

use crate::card::Card;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the given seat to act against the current table play.
    AwaitingMove(usize),
    /// Both players passed; the given seat leads with any cards.
    RoundReset(usize),
    /// The given seat emptied their hand.
    GameOver(usize),
}

impl GameState {
    /// Returns the seat that acts next, or `None` once the game is over.
    #[must_use]
    pub const fn current_player(self) -> Option<usize> {
        match self {
            Self::AwaitingMove(player) | Self::RoundReset(player) => Some(player),
            Self::GameOver(_) => None,
        }
    }

    /// Returns the winning seat, if the game is over.
    #[must_use]
    pub const fn winner(self) -> Option<usize> {
        match self {
            Self::GameOver(winner) => Some(winner),
            Self::AwaitingMove(_) | Self::RoundReset(_) => None,
        }
    }
}

/// Pass bookkeeping for the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TurnState {
    /// Seat of the player whose turn it is.
    pub current_player: usize,
    /// Whether the next play may be any cards at all.
    pub free_play_allowed: bool,
    /// Passes recorded since the last accepted play.
    pub consecutive_passes: u8,
}

/// An action chosen by a player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerAction {
    /// Play the cards at these hand indices.
    PlayCards(Vec<usize>),
    /// Pass the turn.
    Pass,
    /// Discard `count` cards at these hand indices and draw replacements.
    DiscardAndDraw {
        /// Number of cards to swap.
        count: usize,
        /// Hand indices of the cards to swap.
        indices: Vec<usize>,
    },
    /// Abandon the current game and deal a new one.
    Restart,
    /// Stop playing.
    Exit,
}

/// What happened when a turn was processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The cards were accepted and are now the table play.
    Played {
        /// Seat that played.
        player: usize,
        /// Cards played.
        cards: Vec<Card>,
    },
    /// The player passed and the table play stands.
    Passed {
        /// Seat that passed.
        player: usize,
    },
    /// The pass completed a cycle; the table is cleared for a free lead.
    RoundReset {
        /// Seat that passed.
        player: usize,
        /// Seat that leads next.
        leader: usize,
    },
    /// The player swapped cards with the deck.
    DiscardedAndDrew {
        /// Seat that swapped.
        player: usize,
        /// Cards put on the discard pile.
        discarded: Vec<Card>,
        /// Cards drawn from the deck.
        drawn: Vec<Card>,
    },
    /// The cards do not beat the table play. The turn is not consumed.
    Rejected {
        /// Seat that proposed the play.
        player: usize,
        /// Cards proposed.
        cards: Vec<Card>,
    },
    /// The play emptied the player's hand.
    GameOver {
        /// Seat that won.
        winner: usize,
        /// Winning cards.
        cards: Vec<Card>,
    },
    /// The player asked to stop playing. State is unchanged.
    Exit,
    /// The player asked for a new game. State is unchanged until
    /// [`Game::restart`](crate::Game::restart) is called.
    RestartRequested,
}
