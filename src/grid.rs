//! Flat row-major grid of cell states backing a player's board.

use crate::common::GameError;

/// State of a single grid position. Exactly one state per position at any
/// time; transitions happen only through shot resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// Untouched sea.
    #[default]
    Water,
    /// Fired on, no ship was there.
    ShotWater,
    /// Intact ship segment, not yet fired on.
    Ship,
    /// Ship segment that has been fired on.
    Wreck,
}

/// An owned `size`×`size` grid stored in one contiguous buffer, indexed by
/// row-major offset. Dimensions are fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell set to [`Cell::Water`].
    pub fn new(size: usize) -> Result<Self, GameError> {
        if size == 0 {
            return Err(GameError::InvalidConfiguration(
                "board size must be positive",
            ));
        }
        Ok(Grid {
            size,
            cells: vec![Cell::Water; size * size],
        })
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Result<usize, GameError> {
        if x >= self.size || y >= self.size {
            Err(GameError::OutOfBounds {
                x,
                y,
                bound: self.size,
            })
        } else {
            Ok(y * self.size + x)
        }
    }

    /// Bounds-checked read of the cell at (`x`, `y`).
    pub fn get(&self, x: usize, y: usize) -> Result<Cell, GameError> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Bounds-checked write of the cell at (`x`, `y`).
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), GameError> {
        let i = self.index(x, y)?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Iterator over `(x, y, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (i % self.size, i / self.size, cell))
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }
}
