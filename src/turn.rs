//! Turn progression as a small state machine, decoupling the driver loop
//! from the mutation primitives.

use crate::game::Game;

/// Where the game stands between mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Waiting for player `i` to fire.
    PlayerTurn(usize),
    /// A fleet has been wiped out; no further shots are accepted.
    GameOver,
}

impl TurnState {
    /// Advance after the current player's shot has been applied: the game
    /// ends as soon as one fleet is fully sunk, otherwise play passes to the
    /// next player. `GameOver` is absorbing.
    pub fn advance(self, game: &Game) -> TurnState {
        match self {
            TurnState::PlayerTurn(_) if game.is_finished() => TurnState::GameOver,
            TurnState::PlayerTurn(i) => TurnState::PlayerTurn((i + 1) % game.player_count()),
            TurnState::GameOver => TurnState::GameOver,
        }
    }
}
