use alloc::collections::VecDeque;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// One grid position. Only [`Board`] mutates cells; callers get shared references.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    is_mine: bool,
    is_revealed: bool,
    is_flagged: bool,
    adjacent_mines: u8,
}

impl Cell {
    pub const fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub const fn is_revealed(&self) -> bool {
        self.is_revealed
    }

    pub const fn is_flagged(&self) -> bool {
        self.is_flagged
    }

    /// Mines among the up to 8 neighbours. Always 0 for mine cells.
    pub const fn adjacent_mines(&self) -> u8 {
        self.adjacent_mines
    }

    pub const fn view(&self) -> CellView {
        match (self.is_revealed, self.is_flagged, self.is_mine) {
            (true, _, true) => CellView::Mine,
            (true, _, false) => CellView::Revealed(self.adjacent_mines),
            (false, true, _) => CellView::Flagged,
            (false, false, _) => CellView::Hidden,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
    revealed_count: CellCount,
    flagged_count: CellCount,
    state: GameState,
}

impl Board {
    /// Validates the settings and generates a fresh board from an entropy seed.
    #[cfg(feature = "std")]
    pub fn new(rows: Coord, columns: Coord, mines: CellCount) -> Result<Self> {
        let config = GameConfig::new((rows, columns), mines)?;
        Self::with_seed(config, rand::random())
    }

    /// Deterministic generation, picking the placement strategy from the board density.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_layout(
            Placement::for_config(config).generate(config, seed),
        ))
    }

    pub fn generate(config: GameConfig, generator: impl MineGenerator) -> Result<Self> {
        config.validate()?;
        let mine_layout = generator.generate(config);
        if mine_layout.game_config() != config {
            log::warn!(
                "Generator returned {:?}, requested {:?}",
                mine_layout.game_config(),
                config
            );
            return Err(GameError::LayoutMismatch);
        }
        Ok(Self::from_valid_layout(mine_layout))
    }

    pub fn from_layout(mine_layout: MineLayout) -> Result<Self> {
        mine_layout.game_config().validate()?;
        Ok(Self::from_valid_layout(mine_layout))
    }

    fn from_valid_layout(mine_layout: MineLayout) -> Self {
        let cells = Array2::from_shape_fn(mine_layout.size().to_nd_index(), |index| {
            let coords = from_nd_index(index);
            let is_mine = mine_layout.contains_mine(coords);
            Cell {
                is_mine,
                adjacent_mines: if is_mine {
                    0
                } else {
                    mine_layout.adjacent_mine_count(coords)
                },
                ..Default::default()
            }
        });

        Self {
            cells,
            mine_count: mine_layout.mine_count(),
            revealed_count: 0,
            flagged_count: 0,
            state: GameState::Playing,
        }
    }

    pub fn size(&self) -> Coord2 {
        from_nd_index(self.cells.dim())
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn columns(&self) -> Coord {
        self.size().1
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state == GameState::Lost
    }

    pub fn is_game_won(&self) -> bool {
        self.state == GameState::Won
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Safe cells revealed so far.
    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    /// Mine counter as shown to the player; goes negative when over-flagged.
    pub fn mines_left(&self) -> i32 {
        i32::from(self.mine_count) - i32::from(self.flagged_count)
    }

    pub fn cell(&self, coords: Coord2) -> Result<&Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(&self.cells[coords.to_nd_index()])
    }

    /// # Panics
    ///
    /// Panics if `coords` is out of bounds.
    pub fn cell_at(&self, coords: Coord2) -> &Cell {
        &self.cells[coords.to_nd_index()]
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord2, &Cell)> {
        self.cells
            .indexed_iter()
            .map(|(index, cell)| (from_nd_index(index), cell))
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        validate_coords(coords, self.size())
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.validate_coords(coords)?;
        if self.state.is_finished() {
            return Ok(MarkOutcome::NoChange);
        }

        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.is_revealed {
            return Ok(MarkOutcome::NoChange);
        }

        cell.is_flagged = !cell.is_flagged;
        if cell.is_flagged {
            self.flagged_count += 1;
        } else {
            self.flagged_count -= 1;
        }
        Ok(MarkOutcome::Changed)
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;
        if self.state.is_finished() || !self.open(coords) {
            return Ok(RevealOutcome::NoChange);
        }

        let cell = self.cells[coords.to_nd_index()];
        if cell.is_mine {
            log::debug!("Mine revealed at {coords:?}, game lost");
            self.state = GameState::Lost;
            return Ok(RevealOutcome::HitMine);
        }

        if cell.adjacent_mines == 0 {
            self.flood_fill(coords);
        }

        if self.revealed_count == self.game_config().safe_cells() {
            log::debug!("All {} safe cells revealed, game won", self.revealed_count);
            self.state = GameState::Won;
            Ok(RevealOutcome::Won)
        } else {
            Ok(RevealOutcome::Revealed)
        }
    }

    /// Opens every cell reachable from `origin` through zero-count cells. The numbered border is opened but not
    /// expanded.
    fn flood_fill(&mut self, origin: Coord2) {
        let size = self.size();
        let mut to_visit: VecDeque<Coord2> = Neighbors::new(origin, size).collect();

        while let Some(coords) = to_visit.pop_front() {
            if self.open(coords) && self.cells[coords.to_nd_index()].adjacent_mines == 0 {
                to_visit.extend(
                    Neighbors::new(coords, size)
                        .filter(|&pos| self.cells[pos.to_nd_index()].is_closed()),
                );
            }
        }
    }

    /// Marks a hidden, unflagged cell revealed. Returns whether anything changed.
    fn open(&mut self, coords: Coord2) -> bool {
        let cell = &mut self.cells[coords.to_nd_index()];
        if !cell.is_closed() {
            return false;
        }

        cell.is_revealed = true;
        if !cell.is_mine {
            self.revealed_count += 1;
        }
        true
    }
}

/// Serialized form of [`Board`], checked against its cells before it becomes playable.
#[derive(Deserialize)]
struct RawBoard {
    cells: Array2<Cell>,
    mine_count: CellCount,
    revealed_count: CellCount,
    flagged_count: CellCount,
    state: GameState,
}

impl TryFrom<RawBoard> for Board {
    type Error = GameError;

    fn try_from(raw: RawBoard) -> Result<Self> {
        let size = from_nd_index(raw.cells.dim());
        if usize::from(size.0) != raw.cells.nrows() || usize::from(size.1) != raw.cells.ncols() {
            return Err(GameError::InvalidBoardShape);
        }
        GameConfig::new_unchecked(size, raw.mine_count).validate()?;

        let mut mines: CellCount = 0;
        let mut revealed_safe: CellCount = 0;
        let mut revealed_mines: CellCount = 0;
        let mut flagged: CellCount = 0;
        for (index, cell) in raw.cells.indexed_iter() {
            if cell.is_flagged && cell.is_revealed {
                return Err(GameError::InconsistentBoard);
            }
            let adjacent = Neighbors::new(from_nd_index(index), size)
                .filter(|&pos| raw.cells[pos.to_nd_index()].is_mine)
                .count() as u8;
            if cell.adjacent_mines != if cell.is_mine { 0 } else { adjacent } {
                return Err(GameError::InconsistentBoard);
            }
            mines += CellCount::from(cell.is_mine);
            flagged += CellCount::from(cell.is_flagged);
            match (cell.is_revealed, cell.is_mine) {
                (true, true) => revealed_mines += 1,
                (true, false) => revealed_safe += 1,
                (false, _) => {}
            }
        }

        let safe_cells = GameConfig::new_unchecked(size, mines).safe_cells();
        let expected_state = match (revealed_mines, revealed_safe == safe_cells) {
            (0, false) => GameState::Playing,
            (0, true) => GameState::Won,
            (1, false) => GameState::Lost,
            _ => return Err(GameError::InconsistentBoard),
        };
        if mines != raw.mine_count
            || revealed_safe != raw.revealed_count
            || flagged != raw.flagged_count
            || expected_state != raw.state
        {
            return Err(GameError::InconsistentBoard);
        }

        Ok(Self {
            cells: raw.cells,
            mine_count: raw.mine_count,
            revealed_count: raw.revealed_count,
            flagged_count: raw.flagged_count,
            state: raw.state,
        })
    }
}

impl Cell {
    /// Hidden and not flagged, so a reveal would open it.
    const fn is_closed(&self) -> bool {
        !self.is_revealed && !self.is_flagged
    }
}
