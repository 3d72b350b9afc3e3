use crate::error::{ActionError, GameError};
use crate::hand::DiscardSelector;
use crate::player::{Difficulty, PlayerKind};
use crate::result::{DrawResult, StepResult};
use crate::strategy;

use super::{Game, GameState};

impl Game {
    /// Returns the difficulty of the current seat if it is CPU controlled.
    fn current_cpu(&self, player: usize) -> Result<Difficulty, ActionError> {
        let players = self.players.lock();
        let seat = players.get(player).ok_or(ActionError::PlayerNotFound)?;
        match seat.kind() {
            PlayerKind::Cpu(difficulty) => Ok(difficulty),
            PlayerKind::Human => Err(ActionError::NotCpuTurn),
        }
    }

    /// Plays one phase of the current CPU player's turn.
    ///
    /// This is the pacing boundary for front ends: call it from a timer or
    /// event loop while [`Game::is_cpu_turn`] holds. A seat awaiting a draw
    /// draws; a seat awaiting a discard discards according to its difficulty.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::NotCpuTurn`] for a human seat,
    /// [`ActionError::InvalidState`] if the game is not in progress, and any
    /// error from [`Game::submit_draw`] or [`Game::submit_discard`].
    pub fn step(&self) -> Result<StepResult, GameError> {
        match self.state() {
            GameState::AwaitingDraw(player) => {
                self.current_cpu(player)?;
                self.submit_draw(player).map(StepResult::Draw)
            }
            GameState::AwaitingDiscard(player) => {
                let difficulty = self.current_cpu(player)?;
                let index = {
                    let players = self.players.lock();
                    let hand = players[player].hand().cards();
                    strategy::choose_discard(hand, difficulty, &mut *self.rng.lock())
                        .ok_or(ActionError::NoSuchCard)?
                };
                self.submit_discard(player, DiscardSelector::Index(index))
                    .map(StepResult::Discard)
            }
            _ => Err(ActionError::InvalidState.into()),
        }
    }

    /// Plays the current CPU player's whole turn: a draw and, unless the draw
    /// ended the game, a discard.
    ///
    /// # Errors
    ///
    /// Same as [`Game::step`].
    pub fn play_cpu_turn(&self) -> Result<StepResult, GameError> {
        let first = self.step()?;
        match first {
            StepResult::Draw(DrawResult::Drawn { .. }) => self.step(),
            _ => Ok(first),
        }
    }

    /// Returns whether the seat expected to act is CPU controlled.
    pub fn is_cpu_turn(&self) -> bool {
        self.current_player()
            .is_some_and(|player| self.current_cpu(player).is_ok())
    }
}
