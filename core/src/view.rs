use alloc::vec::Vec;
use ndarray::{Array2, Zip};
use serde::{Deserialize, Serialize};

use crate::*;

/// What the player may see of a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    #[default]
    Hidden,
    Flagged,
    Revealed(u8),
    /// A revealed mine, only ever seen on a lost board.
    Mine,
}

impl CellView {
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}

/// Player-visible snapshot of a [`Board`], taken after each move so a presentation layer can poll or diff it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub size: Coord2,
    pub state: GameState,
    pub mines_left: i32,
    pub cells: Array2<CellView>,
}

impl BoardView {
    pub fn from_board(board: &Board) -> Self {
        let size = board.size();
        let cells = Array2::from_shape_fn(size.to_nd_index(), |index| {
            board.cell_at(from_nd_index(index)).view()
        });

        Self {
            size,
            state: board.state(),
            mines_left: board.mines_left(),
            cells,
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> CellView {
        self.cells[coords.to_nd_index()]
    }

    /// Coordinates whose view differs from `previous`, in row-major order.
    pub fn changed_since(&self, previous: &BoardView) -> Result<Vec<Coord2>> {
        if self.cells.dim() != previous.cells.dim() {
            return Err(GameError::InvalidBoardShape);
        }

        let mut changed = Vec::new();
        Zip::indexed(&self.cells)
            .and(&previous.cells)
            .for_each(|index, current, before| {
                if current != before {
                    changed.push(from_nd_index(index));
                }
            });
        Ok(changed)
    }
}

impl From<&Board> for BoardView {
    fn from(board: &Board) -> Self {
        Self::from_board(board)
    }
}
