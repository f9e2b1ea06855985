use crate::error::TurnError;
use crate::player::MoveSource;
use crate::result::RunStatus;

use super::{Game, GameSnapshot, PlayerAction, TurnOutcome};

/// Supplies the human player's actions.
///
/// Implementations usually block on a console or UI. Selection indices are
/// validated by the engine; a malformed selection is reported through
/// [`DisplaySink::show_error`] and the provider is asked again.
pub trait InputProvider {
    /// Chooses the next action for the human player.
    fn next_action(&mut self, snapshot: &GameSnapshot) -> PlayerAction;
}

/// Receives game data for display.
pub trait DisplaySink {
    /// Called before every turn.
    fn show_state(&mut self, snapshot: &GameSnapshot);

    /// Called after every processed turn.
    fn show_outcome(&mut self, _outcome: &TurnOutcome) {}

    /// Called when a human action was refused and will be asked for again.
    fn show_error(&mut self, _error: &TurnError) {}
}

impl Game {
    /// Runs the game until a player wins or the provider exits.
    ///
    /// Human turns are read from `provider`, computer turns come from the
    /// built-in strategy. A restart request deals a new game in place and
    /// keeps going.
    ///
    /// # Errors
    ///
    /// Returns an error only for engine faults. Malformed selections and
    /// discard requests the deck cannot cover are shown to `sink` and asked
    /// for again.
    pub fn run<P, S>(&mut self, provider: &mut P, sink: &mut S) -> Result<RunStatus, TurnError>
    where
        P: InputProvider + ?Sized,
        S: DisplaySink + ?Sized,
    {
        loop {
            if let Some(result) = self.result() {
                return Ok(RunStatus::Finished(result));
            }

            let snapshot = self.snapshot();
            sink.show_state(&snapshot);

            let step = match self.current_source() {
                Some(MoveSource::AiStrategy) => self.play_ai_turn(),
                Some(MoveSource::HumanInput) => self.submit(provider.next_action(&snapshot)),
                None => Err(TurnError::GameOver),
            };

            match step {
                Ok(TurnOutcome::Exit) => {
                    tracing::info!(turns_taken = self.turns_taken, "exit requested");
                    return Ok(RunStatus::Exited);
                }
                Ok(TurnOutcome::RestartRequested) => {
                    sink.show_outcome(&TurnOutcome::RestartRequested);
                    self.restart();
                }
                Ok(outcome) => sink.show_outcome(&outcome),
                Err(error @ (TurnError::Selection(_) | TurnError::Deck(_))) => {
                    sink.show_error(&error);
                }
                Err(error) => return Err(error),
            }
        }
    }
}
