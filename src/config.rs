//! Game parameters and their fail-fast validation.

use crate::common::GameError;

/// Default side length of a board.
pub const DEFAULT_BOARD_SIZE: usize = 10;
/// Default number of ships per fleet; sizes run 1..=DEFAULT_NUM_SHIPS.
pub const DEFAULT_NUM_SHIPS: usize = 5;
/// Largest supported board; the text interface labels columns A through Z.
pub const MAX_BOARD_SIZE: usize = 26;

/// Parameters fixed at game creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub players: usize,
    pub board_size: usize,
    pub ship_sizes: Vec<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            players: 2,
            board_size: DEFAULT_BOARD_SIZE,
            ship_sizes: (1..=DEFAULT_NUM_SHIPS).collect(),
        }
    }
}

impl GameConfig {
    /// Default configuration on a `size`×`size` board.
    pub fn with_board_size(size: usize) -> Self {
        GameConfig {
            board_size: size,
            ..GameConfig::default()
        }
    }

    /// Reject configurations the game cannot be created from, before any
    /// board or fleet is allocated.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.players != 2 {
            return Err(GameError::InvalidConfiguration(
                "exactly two players are supported",
            ));
        }
        if self.board_size == 0 {
            return Err(GameError::InvalidConfiguration(
                "board size must be positive",
            ));
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(GameError::InvalidConfiguration(
                "board size exceeds the A-Z column labels",
            ));
        }
        if self.ship_sizes.is_empty() {
            return Err(GameError::InvalidConfiguration(
                "fleet must contain at least one ship",
            ));
        }
        for &size in &self.ship_sizes {
            if size == 0 {
                return Err(GameError::InvalidConfiguration(
                    "ship size must be positive",
                ));
            }
            if size > self.board_size {
                return Err(GameError::InvalidConfiguration(
                    "ship size exceeds board size",
                ));
            }
        }
        Ok(())
    }
}
