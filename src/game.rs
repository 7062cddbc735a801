//! Whole-game state: both players' boards and fleets, shot routing and
//! win-condition evaluation.

use crate::board::{Board, ViewMode};
use crate::common::{GameError, ShotOutcome, Winner};
use crate::config::GameConfig;
use crate::fleet::Fleet;
use rand::Rng;

/// One player's half of the game.
#[derive(Debug, Clone)]
struct Side {
    board: Board,
    fleet: Fleet,
}

/// A running game. Owns every board and fleet; dropping the game releases
/// them all.
#[derive(Debug, Clone)]
pub struct Game {
    sides: Vec<Side>,
}

impl Game {
    /// Create a game from a validated configuration: one all-water board per
    /// player, fleets placed at random free positions.
    pub fn new<R: Rng>(config: &GameConfig, rng: &mut R) -> Result<Self, GameError> {
        config.validate()?;
        let mut sides = Vec::with_capacity(config.players);
        for _ in 0..config.players {
            let mut board = Board::new(config.board_size)?;
            let fleet = Fleet::place_random(rng, &mut board, &config.ship_sizes)?;
            sides.push(Side { board, fleet });
        }
        Ok(Game { sides })
    }

    /// Number of players in the game.
    pub fn player_count(&self) -> usize {
        self.sides.len()
    }

    fn side(&self, player: usize) -> Result<&Side, GameError> {
        self.sides.get(player).ok_or(GameError::InvalidPlayer {
            index: player,
            players: self.sides.len(),
        })
    }

    /// Index of the player `player` fires at.
    pub fn opponent_of(&self, player: usize) -> Result<usize, GameError> {
        self.side(player)?;
        Ok((player + 1) % self.sides.len())
    }

    /// The board owned by `player`.
    pub fn board(&self, player: usize) -> Result<&Board, GameError> {
        self.side(player).map(|s| &s.board)
    }

    /// The fleet owned by `player`.
    pub fn fleet(&self, player: usize) -> Result<&Fleet, GameError> {
        self.side(player).map(|s| &s.fleet)
    }

    /// Resolve a shot by `shooter` at (`x`, `y`) on the opponent's board.
    /// A hit is credited to the covering ship's damage counter.
    pub fn fire(&mut self, shooter: usize, x: usize, y: usize) -> Result<ShotOutcome, GameError> {
        let target = self.opponent_of(shooter)?;
        let side = &mut self.sides[target];
        let outcome = side.board.fire(x, y)?;
        if outcome == ShotOutcome::Hit {
            if let Some(ship) = side.fleet.record_hit(x, y) {
                if ship.is_sunk() {
                    log::info!(
                        "player {}'s ship of size {} has been sunk",
                        target,
                        ship.size()
                    );
                }
            }
        }
        Ok(outcome)
    }

    /// True as soon as at least one player's fleet is entirely sunk.
    pub fn is_finished(&self) -> bool {
        self.sides.iter().any(|s| s.fleet.all_sunk())
    }

    /// Compare remaining afloat ships between the two players: strictly more
    /// wins, equal counts are a draw.
    pub fn winner(&self) -> Winner {
        let first = self.sides[0].fleet.alive_count();
        let second = self.sides[1].fleet.alive_count();
        if first > second {
            Winner::Player(0)
        } else if second > first {
            Winner::Player(1)
        } else {
            Winner::Draw
        }
    }

    /// Render `player`'s board in the requested view.
    pub fn render_board(&self, player: usize, view: ViewMode) -> Result<String, GameError> {
        self.board(player).map(|b| b.render(view))
    }
}
