//! One player's board: shot resolution, ship commitment and rendering.

use crate::common::{GameError, ShotOutcome};
use crate::grid::{Cell, Grid};
use crate::ship::{Orientation, Ship};
use core::fmt::Write as _;
use rand::Rng;

/// Attempt budget for the random placement search. The search rejects
/// out-of-bounds and overlapping positions; on a board that can hold the
/// fleet at all, far fewer attempts are needed in practice.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1_000;

/// How much of the board a rendering reveals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// The owner's perspective: intact ships are visible.
    Owner,
    /// The opponent's perspective: only shot markers and wrecks are visible.
    Opponent,
}

/// A `size`×`size` board owned exclusively by one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
}

impl Board {
    /// Create a board with all cells set to water.
    pub fn new(size: usize) -> Result<Self, GameError> {
        Ok(Board {
            grid: Grid::new(size)?,
        })
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Bounds-checked read of the cell at (`x`, `y`).
    pub fn cell(&self, x: usize, y: usize) -> Result<Cell, GameError> {
        self.grid.get(x, y)
    }

    /// Bounds-checked write of the cell at (`x`, `y`).
    pub fn set_cell(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), GameError> {
        self.grid.set(x, y, cell)
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: Cell) -> usize {
        self.grid.count(state)
    }

    /// Resolve a shot at (`x`, `y`). Water becomes [`Cell::ShotWater`], a
    /// ship segment becomes [`Cell::Wreck`]; an already-shot cell is left
    /// unchanged and reported as [`ShotOutcome::AlreadyShot`].
    pub fn fire(&mut self, x: usize, y: usize) -> Result<ShotOutcome, GameError> {
        match self.grid.get(x, y)? {
            Cell::Ship => {
                self.grid.set(x, y, Cell::Wreck)?;
                Ok(ShotOutcome::Hit)
            }
            Cell::Water => {
                self.grid.set(x, y, Cell::ShotWater)?;
                Ok(ShotOutcome::Miss)
            }
            Cell::ShotWater | Cell::Wreck => Ok(ShotOutcome::AlreadyShot),
        }
    }

    /// True iff a ship of `size` at (`x`, `y`) would lie entirely within the
    /// board. Does not consider other ships.
    pub fn can_place(&self, x: usize, y: usize, size: usize, orientation: Orientation) -> bool {
        Ship::fits(x, y, size, orientation, self.size())
    }

    fn is_free(&self, ship: &Ship) -> bool {
        ship.cells()
            .all(|(x, y)| matches!(self.grid.get(x, y), Ok(Cell::Water)))
    }

    /// Mark every cell of `ship` as [`Cell::Ship`]. Cells already holding a
    /// ship are overwritten; [`Board::place_random`] screens for overlap
    /// before committing.
    pub fn place(&mut self, ship: &Ship) -> Result<(), GameError> {
        for (x, y) in ship.cells() {
            self.grid.set(x, y, Cell::Ship)?;
        }
        Ok(())
    }

    /// Find a random free position and orientation for a ship of `size`,
    /// commit it to the board and return the placed record. Samples uniform
    /// positions and orientations, rejecting out-of-bounds and overlapping
    /// candidates, and fails with [`GameError::PlacementExhausted`] once the
    /// attempt budget is spent.
    pub fn place_random<R: Rng>(&mut self, rng: &mut R, size: usize) -> Result<Ship, GameError> {
        if size == 0 {
            return Err(GameError::InvalidConfiguration("ship size must be positive"));
        }
        if size > self.size() {
            return Err(GameError::InvalidConfiguration(
                "ship size exceeds board size",
            ));
        }
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let x = rng.random_range(0..self.size());
            let y = rng.random_range(0..self.size());
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            if !self.can_place(x, y, size, orientation) {
                continue;
            }
            let ship = Ship::new(size, x, y, orientation, self.size())?;
            if !self.is_free(&ship) {
                continue;
            }
            self.place(&ship)?;
            return Ok(ship);
        }
        Err(GameError::PlacementExhausted { size })
    }

    /// Render the board as text. Pure function of the grid state: the owner
    /// view shows intact ships, the opponent view only shot markers.
    pub fn render(&self, view: ViewMode) -> String {
        let mut out = String::new();
        out.push_str("   ");
        for x in 0..self.size() {
            let label = (b'A' + x as u8) as char;
            let _ = write!(out, " {}", label);
        }
        out.push('\n');
        for y in 0..self.size() {
            let _ = write!(out, "{:2} ", y + 1);
            for x in 0..self.size() {
                let cell = self.grid.get(x, y).unwrap_or(Cell::Water);
                let glyph = match view {
                    ViewMode::Owner => match cell {
                        Cell::Water => '~',
                        Cell::Ship => 'B',
                        Cell::ShotWater => '*',
                        Cell::Wreck => 'X',
                    },
                    ViewMode::Opponent => match cell {
                        Cell::ShotWater => '*',
                        Cell::Wreck => 'X',
                        Cell::Water | Cell::Ship => '.',
                    },
                };
                let _ = write!(out, " {}", glyph);
            }
            out.push('\n');
        }
        out
    }
}
