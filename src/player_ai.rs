//! Computer player: uniform random targeting over untried cells.

use crate::board::Board;
use crate::grid::Cell;
use crate::player::Player;
use anyhow::bail;
use rand::rngs::SmallRng;
use rand::Rng;

/// Computer player. Never re-fires at a cell it has already tried.
pub struct AiPlayer {
    name: String,
}

impl AiPlayer {
    pub fn new(name: impl Into<String>) -> Self {
        AiPlayer { name: name.into() }
    }
}

impl Player for AiPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        target: &Board,
    ) -> anyhow::Result<(usize, usize)> {
        let mut untried = Vec::new();
        for y in 0..target.size() {
            for x in 0..target.size() {
                match target.cell(x, y) {
                    Ok(Cell::Water) | Ok(Cell::Ship) => untried.push((x, y)),
                    _ => {}
                }
            }
        }
        if untried.is_empty() {
            // every cell shot means every fleet cell is wrecked, so the game
            // should already be over
            bail!("no untried cells left to fire at");
        }
        Ok(untried[rng.random_range(0..untried.len())])
    }
}
