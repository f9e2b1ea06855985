use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{DeckError, SelectionError, TurnError};
use crate::options::MAX_DISCARD;
use crate::player::MoveSource;
use crate::rules::is_valid_play;
use crate::strategy::select_play;

use super::{Game, GameState, PLAYER_COUNT, PlayerAction, TurnOutcome};

/// Passes needed to clear the table for a free lead.
const PASSES_TO_RESET: u8 = 1;

impl Game {
    fn ensure_turn_of(&self, source: MoveSource) -> Result<usize, TurnError> {
        let seat = self.current_player().ok_or(TurnError::GameOver)?;
        if self.players[seat].source() != source {
            return Err(TurnError::NotYourTurn);
        }
        Ok(seat)
    }

    /// Hands the turn to the other seat.
    fn advance_turn(&mut self) -> usize {
        self.turns_taken += 1;
        let next = (self.turn.current_player + 1) % PLAYER_COUNT;
        self.turn.current_player = next;
        self.state = if self.turn.free_play_allowed {
            GameState::RoundReset(next)
        } else {
            GameState::AwaitingMove(next)
        };
        next
    }

    /// Returns whether `cards` may be played on the current table.
    #[must_use]
    pub fn accepts(&self, cards: &[Card]) -> bool {
        !cards.is_empty() && (self.turn.free_play_allowed || is_valid_play(cards, &self.table_play))
    }

    /// Applies a play that has already been accepted.
    fn apply_play(&mut self, seat: usize, cards: Vec<Card>) -> Result<TurnOutcome, TurnError> {
        self.players[seat].discard(&cards)?;
        self.table_play.clone_from(&cards);
        self.table_owner = Some(seat);
        self.turn.free_play_allowed = false;
        self.turn.consecutive_passes = 0;

        tracing::debug!(player = self.players[seat].name(), ?cards, "play accepted");

        if self.players[seat].hand().is_empty() {
            self.turns_taken += 1;
            self.state = GameState::GameOver(seat);
            tracing::info!(
                winner = self.players[seat].name(),
                turns_taken = self.turns_taken,
                "game over"
            );
            return Ok(TurnOutcome::GameOver {
                winner: seat,
                cards,
            });
        }

        self.advance_turn();
        Ok(TurnOutcome::Played {
            player: seat,
            cards,
        })
    }

    /// Records a pass, clearing the table once enough passes accumulate.
    fn record_pass(&mut self, seat: usize) -> TurnOutcome {
        self.turn.consecutive_passes += 1;

        if self.turn.consecutive_passes >= PASSES_TO_RESET {
            self.table_play.clear();
            self.table_owner = None;
            self.turn.free_play_allowed = true;
            self.turn.consecutive_passes = 0;
            let leader = self.advance_turn();
            tracing::debug!(
                player = self.players[seat].name(),
                leader = self.players[leader].name(),
                "pass cycle complete, table cleared"
            );
            return TurnOutcome::RoundReset {
                player: seat,
                leader,
            };
        }

        tracing::debug!(player = self.players[seat].name(), "passed");
        self.advance_turn();
        TurnOutcome::Passed { player: seat }
    }

    fn play_selected(&mut self, seat: usize, indices: &[usize]) -> Result<TurnOutcome, TurnError> {
        if indices.is_empty() {
            return Err(SelectionError::EmptySelection.into());
        }

        let cards = self.players[seat].hand().select(indices)?;
        if self.accepts(&cards) {
            return self.apply_play(seat, cards);
        }

        tracing::debug!(player = self.players[seat].name(), ?cards, "play rejected");
        Ok(TurnOutcome::Rejected {
            player: seat,
            cards,
        })
    }

    fn discard_and_draw(
        &mut self,
        seat: usize,
        count: usize,
        indices: &[usize],
    ) -> Result<TurnOutcome, TurnError> {
        if count > MAX_DISCARD {
            return Err(SelectionError::DiscardCountOutOfRange {
                count,
                max: MAX_DISCARD,
            }
            .into());
        }
        if indices.len() != count {
            return Err(SelectionError::CountMismatch {
                expected: count,
                actual: indices.len(),
            }
            .into());
        }

        let discarded = self.players[seat].hand().select(indices)?;
        let remaining = self.deck.remaining_count();
        if count > remaining {
            return Err(DeckError::InsufficientCards {
                requested: count,
                remaining,
            }
            .into());
        }

        self.players[seat].discard(&discarded)?;
        let drawn = self.deck.deal(count)?;
        self.players[seat].draw(&drawn);

        tracing::debug!(
            player = self.players[seat].name(),
            count,
            cards_remaining = self.deck.remaining_count(),
            "discarded and drew"
        );

        self.advance_turn();
        Ok(TurnOutcome::DiscardedAndDrew {
            player: seat,
            discarded,
            drawn,
        })
    }

    /// Processes an action from the human player whose turn it is.
    ///
    /// A play that does not beat the table returns [`TurnOutcome::Rejected`]
    /// and leaves the turn with the same player. [`PlayerAction::Restart`]
    /// and [`PlayerAction::Exit`] change nothing; they are reported back so
    /// the caller can restart or stop.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, the current player is not the
    /// human, the card selection is malformed, or the deck cannot cover a
    /// discard-and-draw. Nothing is changed when an error is returned.
    pub fn submit(&mut self, action: PlayerAction) -> Result<TurnOutcome, TurnError> {
        match action {
            PlayerAction::Restart => Ok(TurnOutcome::RestartRequested),
            PlayerAction::Exit => Ok(TurnOutcome::Exit),
            PlayerAction::Pass => {
                let seat = self.ensure_turn_of(MoveSource::HumanInput)?;
                Ok(self.record_pass(seat))
            }
            PlayerAction::PlayCards(indices) => {
                let seat = self.ensure_turn_of(MoveSource::HumanInput)?;
                self.play_selected(seat, &indices)
            }
            PlayerAction::DiscardAndDraw { count, indices } => {
                let seat = self.ensure_turn_of(MoveSource::HumanInput)?;
                self.discard_and_draw(seat, count, &indices)
            }
        }
    }

    /// Lets the computer player take its turn.
    ///
    /// The computer plays whatever its strategy picks if the table accepts
    /// it, and passes otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over or it is the human's turn.
    pub fn play_ai_turn(&mut self) -> Result<TurnOutcome, TurnError> {
        let seat = self.ensure_turn_of(MoveSource::AiStrategy)?;

        match select_play(self.players[seat].hand().cards(), &self.table_play) {
            Some(cards) if self.accepts(&cards) => self.apply_play(seat, cards),
            Some(cards) => {
                tracing::warn!(
                    player = self.players[seat].name(),
                    ?cards,
                    table = ?self.table_play,
                    "strategy choice rejected, passing"
                );
                Ok(self.record_pass(seat))
            }
            None => Ok(self.record_pass(seat)),
        }
    }
}
