//! Interface implemented by the different player types.

use crate::board::Board;
use rand::rngs::SmallRng;

/// A participant able to pick targets on the opponent's board.
pub trait Player {
    /// Display name used in turn banners and announcements.
    fn name(&self) -> &str;

    /// Choose the next target coordinate on `target`, the opponent's board.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        target: &Board,
    ) -> anyhow::Result<(usize, usize)>;
}
