use ndarray::Array2;

use super::*;

/// Draws a uniformly random row and column until enough distinct cells hold a mine.
///
/// A draw landing on a cell that is already mined is discarded. Expected time is linear in the mine count at normal
/// densities, but unbounded in the worst case; see [`ShuffleGenerator`] for dense boards.
#[derive(Clone, Debug, PartialEq)]
pub struct RejectionGenerator {
    seed: u64,
}

impl RejectionGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineGenerator for RejectionGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        use rand::prelude::*;

        let (rows, columns) = config.size;
        let mut mines: Array2<bool> = Array2::default(config.size.to_nd_index());
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut placed: CellCount = 0;
        let mut attempts: u32 = 0;

        while placed < config.mines {
            attempts += 1;
            let coords: Coord2 = (rng.random_range(0..rows), rng.random_range(0..columns));
            let cell = &mut mines[coords.to_nd_index()];
            if !*cell {
                *cell = true;
                placed += 1;
            }
        }

        log::debug!(
            "Placed {} mines on {}x{} in {} draws",
            placed,
            rows,
            columns,
            attempts
        );
        MineLayout::from_mine_mask(mines)
    }
}
