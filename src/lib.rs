//! Core of a two-player naval combat simulation: cell-state boards, random
//! fleet placement, shot resolution and win-condition evaluation, with a
//! terminal driver layered on top.

mod board;
mod common;
mod config;
mod fleet;
mod game;
mod grid;
mod logging;
mod player;
mod player_ai;
mod player_cli;
mod ship;
mod turn;

pub use board::{Board, ViewMode, MAX_PLACEMENT_ATTEMPTS};
pub use common::{GameError, ShotOutcome, Winner};
pub use config::{GameConfig, DEFAULT_BOARD_SIZE, DEFAULT_NUM_SHIPS, MAX_BOARD_SIZE};
pub use fleet::Fleet;
pub use game::Game;
pub use grid::{Cell, Grid};
pub use logging::init_logging;
pub use player::Player;
pub use player_ai::AiPlayer;
pub use player_cli::{coord_label, parse_coord, CliPlayer};
pub use ship::{Orientation, Ship};
pub use turn::TurnState;
