//! Common types for the combat core: shot outcomes, winners and errors.

use core::fmt;

/// Classification of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// The cell held open water; it is now marked as shot.
    Miss,
    /// The cell held an intact ship segment; it is now a wreck.
    Hit,
    /// The cell had already been fired upon; nothing changed.
    AlreadyShot,
}

/// Final standing of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    /// The player with strictly more ships still afloat.
    Player(usize),
    /// Both sides have the same number of ships afloat.
    Draw,
}

/// Errors returned by core operations.
#[derive(Debug, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate lies outside the `bound`×`bound` board.
    OutOfBounds { x: usize, y: usize, bound: usize },
    /// Game parameters rejected at creation time.
    InvalidConfiguration(&'static str),
    /// The random placement search ran out of attempts for a ship.
    PlacementExhausted { size: usize },
    /// Player index outside the configured player count.
    InvalidPlayer { index: usize, players: usize },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::OutOfBounds { x, y, bound } => {
                write!(
                    f,
                    "coordinate ({}, {}) is outside the {}x{} board",
                    x, y, bound, bound
                )
            }
            GameError::InvalidConfiguration(reason) => {
                write!(f, "invalid configuration: {}", reason)
            }
            GameError::PlacementExhausted { size } => {
                write!(
                    f,
                    "could not find a free position for a ship of size {}",
                    size
                )
            }
            GameError::InvalidPlayer { index, players } => {
                write!(
                    f,
                    "player index {} out of range (game has {} players)",
                    index, players
                )
            }
        }
    }
}

impl std::error::Error for GameError {}
