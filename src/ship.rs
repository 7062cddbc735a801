//! Ship records: extent on the board and accumulated damage.

use crate::common::GameError;

/// Placement direction of a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A placed ship: hull length, reference position marking one end, the
/// direction it extends in, and how many of its cells have been hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    size: usize,
    x: usize,
    y: usize,
    orientation: Orientation,
    hits: usize,
}

impl Ship {
    /// Construct a ship at (`x`, `y`) extending along `orientation`.
    /// Fails when the extent would leave the `board_size`×`board_size` board.
    pub fn new(
        size: usize,
        x: usize,
        y: usize,
        orientation: Orientation,
        board_size: usize,
    ) -> Result<Self, GameError> {
        if !Self::fits(x, y, size, orientation, board_size) {
            return Err(GameError::OutOfBounds {
                x,
                y,
                bound: board_size,
            });
        }
        Ok(Ship {
            size,
            x,
            y,
            orientation,
            hits: 0,
        })
    }

    /// True iff a ship of `size` at (`x`, `y`) would lie entirely within the
    /// board. Occupancy by other ships is deliberately not considered here.
    pub fn fits(
        x: usize,
        y: usize,
        size: usize,
        orientation: Orientation,
        board_size: usize,
    ) -> bool {
        match orientation {
            Orientation::Horizontal => x + size <= board_size && y < board_size,
            Orientation::Vertical => y + size <= board_size && x < board_size,
        }
    }

    /// Hull length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Reference position (`x`, `y`) of the ship's first cell.
    pub fn origin(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// Direction the hull extends in.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Iterator over the `size` board cells the ship occupies.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let (x, y, orientation) = (self.x, self.y, self.orientation);
        (0..self.size).map(move |i| match orientation {
            Orientation::Horizontal => (x + i, y),
            Orientation::Vertical => (x, y + i),
        })
    }

    /// True iff the ship occupies (`x`, `y`).
    pub fn contains(&self, x: usize, y: usize) -> bool {
        match self.orientation {
            Orientation::Horizontal => y == self.y && x >= self.x && x < self.x + self.size,
            Orientation::Vertical => x == self.x && y >= self.y && y < self.y + self.size,
        }
    }

    /// Count one hit against the hull. Saturates at the hull length, so
    /// re-firing on a wreck never advances the counter.
    pub fn record_hit(&mut self) {
        if self.hits < self.size {
            self.hits += 1;
        }
    }

    /// Number of hull cells hit so far.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// A ship is afloat while fewer cells than its hull length have been hit.
    pub fn is_alive(&self) -> bool {
        self.hits < self.size
    }

    /// True once every hull cell has been hit.
    pub fn is_sunk(&self) -> bool {
        !self.is_alive()
    }
}
