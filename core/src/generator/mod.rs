use serde::{Deserialize, Serialize};

use crate::*;
pub use rejection::*;
pub use shuffle::*;

mod rejection;
mod shuffle;

/// Strategy that decides where the mines of a new board go.
///
/// Implementations may assume the config has already been validated and must place exactly `config.mines` mines.
pub trait MineGenerator {
    fn generate(self, config: GameConfig) -> MineLayout;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    Rejection,
    Shuffle,
}

impl Placement {
    /// Rejection sampling expects `total / free` draws per mine, so it is only used up to half density.
    pub fn for_config(config: GameConfig) -> Self {
        if config.mines <= config.total_cells() / 2 {
            Self::Rejection
        } else {
            log::debug!(
                "Dense board, {} mines in {} cells, using shuffle placement",
                config.mines,
                config.total_cells()
            );
            Self::Shuffle
        }
    }

    pub fn generate(self, config: GameConfig, seed: u64) -> MineLayout {
        match self {
            Self::Rejection => RejectionGenerator::new(seed).generate(config),
            Self::Shuffle => ShuffleGenerator::new(seed).generate(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_switches_to_shuffle_past_half_density() {
        assert_eq!(
            Placement::for_config(GameConfig::EXPERT),
            Placement::Rejection
        );
        assert_eq!(
            Placement::for_config(GameConfig::new_unchecked((4, 4), 8)),
            Placement::Rejection
        );
        assert_eq!(
            Placement::for_config(GameConfig::new_unchecked((4, 4), 9)),
            Placement::Shuffle
        );
    }

    #[test]
    fn every_placement_honors_the_requested_count() {
        let config = GameConfig::new_unchecked((7, 5), 20);
        for placement in [Placement::Rejection, Placement::Shuffle] {
            for seed in 0..16 {
                let layout = placement.generate(config, seed);
                assert_eq!(layout.size(), (7, 5));
                assert_eq!(layout.mine_count(), 20);
            }
        }
    }
}
