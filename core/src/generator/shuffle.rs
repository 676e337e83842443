use alloc::vec;
use alloc::vec::Vec;

use ndarray::Array2;

use super::*;

/// Partial Fisher-Yates shuffle over every cell index.
///
/// Takes time proportional to the board area no matter how dense it is.
#[derive(Clone, Debug, PartialEq)]
pub struct ShuffleGenerator {
    seed: u64,
}

impl ShuffleGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineGenerator for ShuffleGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        use rand::prelude::*;

        let total = usize::from(config.total_cells());
        let mines = usize::from(config.mines).min(total);
        let mut cells: Vec<usize> = (0..total).collect();
        let mut rng = SmallRng::seed_from_u64(self.seed);

        for i in 0..mines {
            let j = rng.random_range(i..total);
            cells.swap(i, j);
        }

        let mut flat = vec![false; total];
        for &index in &cells[..mines] {
            flat[index] = true;
        }

        let columns = usize::from(config.columns());
        let mask = Array2::from_shape_fn(config.size.to_nd_index(), |(row, column)| {
            flat[row * columns + column]
        });
        MineLayout::from_mine_mask(mask)
    }
}
