//! Per-player fleet: the ordered ship collection and liveness tracking.
//!
//! The board is the authoritative record of occupied cells; the fleet is the
//! authoritative record of per-ship damage.

use crate::board::Board;
use crate::common::GameError;
use crate::ship::Ship;
use rand::Rng;

/// The ships owned by one player, in placement order. Created once at game
/// start and never resized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    /// Place one ship per entry of `sizes` at random free positions on
    /// `board` and collect the committed records.
    pub fn place_random<R: Rng>(
        rng: &mut R,
        board: &mut Board,
        sizes: &[usize],
    ) -> Result<Self, GameError> {
        let mut ships = Vec::with_capacity(sizes.len());
        for &size in sizes {
            let ship = board.place_random(rng, size)?;
            log::debug!(
                "placed ship of size {} at {:?} {:?}",
                size,
                ship.origin(),
                ship.orientation()
            );
            ships.push(ship);
        }
        Ok(Fleet { ships })
    }

    /// The ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Credit a hit at (`x`, `y`) to the ship covering that cell and return
    /// the updated record. Placement keeps ships disjoint, so at most one
    /// ship matches.
    pub fn record_hit(&mut self, x: usize, y: usize) -> Option<&Ship> {
        let idx = self.ships.iter().position(|s| s.contains(x, y))?;
        self.ships[idx].record_hit();
        Some(&self.ships[idx])
    }

    /// Number of ships still afloat.
    pub fn alive_count(&self) -> usize {
        self.ships.iter().filter(|s| s.is_alive()).count()
    }

    /// True once every ship in the fleet has been sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(|s| s.is_sunk())
    }
}
