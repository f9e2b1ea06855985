use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::player::{MoveSource, Player};
use crate::rules::PlayKind;

use super::{Game, GameState, PLAYER_COUNT};

/// A read-only copy of one seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerView {
    /// Player name.
    pub name: String,
    /// Where the player's moves come from.
    pub source: MoveSource,
    /// Cards in hand, sorted.
    pub hand: Vec<Card>,
    /// Cards played or discarded, oldest first.
    pub discard_pile: Vec<Card>,
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name().into(),
            source: player.source(),
            hand: player.hand().cards().to_vec(),
            discard_pile: player.discard_pile().to_vec(),
        }
    }
}

/// A read-only copy of everything a display needs after a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Game state.
    pub state: GameState,
    /// Name of the player whose turn it is, `None` once the game is over.
    pub current_player_name: Option<String>,
    /// Cards left in the deck.
    pub cards_remaining: usize,
    /// Both seats, indexed by seat number.
    pub players: [PlayerView; PLAYER_COUNT],
    /// The play on the table.
    pub table_play: Vec<Card>,
    /// Shape of the table play.
    pub table_kind: Option<PlayKind>,
    /// Seat that made the table play.
    pub table_owner: Option<usize>,
    /// Whether the next play may be any cards at all.
    pub free_play_allowed: bool,
}

impl Game {
    /// Captures the current table for display.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            state: self.state,
            current_player_name: self
                .current_player()
                .map(|seat| self.players[seat].name().into()),
            cards_remaining: self.deck.remaining_count(),
            players: [
                PlayerView::from(&self.players[0]),
                PlayerView::from(&self.players[1]),
            ],
            table_play: self.table_play.clone(),
            table_kind: PlayKind::classify(&self.table_play),
            table_owner: self.table_owner,
            free_play_allowed: self.turn.free_play_allowed,
        }
    }
}
