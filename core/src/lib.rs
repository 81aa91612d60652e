#![no_std]

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{BitOr, BitOrAssign, Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use difficulty::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod board;
mod cell;
mod difficulty;
mod error;
mod generator;
mod types;

/// Dimensions and mine count of a board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl BoardConfig {
    pub const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(rows, cols, mines);
        config.validate()?;
        Ok(config)
    }

    /// Rejects empty boards and boards without a single safe cell.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(BoardError::InvalidDimensions);
        }
        if self.mines >= self.total_cells() {
            return Err(BoardError::InvalidMineCount);
        }
        Ok(())
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    /// Never overflows, 255x255 still fits a `CellCount`.
    pub const fn total_cells(&self) -> CellCount {
        self.rows as CellCount * self.cols as CellCount
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }

    pub const fn contains(&self, (row, col): Coord2) -> bool {
        row < self.rows && col < self.cols
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    size: Coord2,
    mine_count: CellCount,
}

impl MineLayout {
    /// Layout of the given size without any mine.
    pub fn empty(size: Coord2) -> Self {
        Self {
            mine_mask: Array2::default(size.to_nd_index()),
            size,
            mine_count: 0,
        }
    }

    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let (rows, cols) = mine_mask.dim();
        let size = (
            Coord::try_from(rows).map_err(|_| BoardError::InvalidDimensions)?,
            Coord::try_from(cols).map_err(|_| BoardError::InvalidDimensions)?,
        );
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count();
        let mine_count = CellCount::try_from(mine_count).map_err(|_| BoardError::InvalidMineCount)?;
        Ok(Self {
            mine_mask,
            size,
            mine_count,
        })
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut layout = Self::empty(size);

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(BoardError::InvalidCoords);
            }
            if !layout[coords] {
                layout[coords] = true;
                layout.mine_count += 1;
            }
        }

        Ok(layout)
    }

    pub fn board_config(&self) -> BoardConfig {
        BoardConfig::new_unchecked(self.size.0, self.size.1, self.mine_count)
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    /// Whether this layout can back a board of `config`: same size, same mine count.
    pub fn fits(&self, config: BoardConfig) -> bool {
        self.size == config.size() && self.mine_count == config.mines
    }

    pub fn mine_mask(&self) -> &Array2<bool> {
        &self.mine_mask
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self.mine_mask
            .get(coords.to_nd_index())
            .copied()
            .unwrap_or(false)
    }

    /// Places a mine, returns `false` if the cell already held one.
    pub(crate) fn place_mine(&mut self, coords: Coord2) -> bool {
        if self[coords] {
            return false;
        }
        self[coords] = true;
        self.mine_count += 1;
        true
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most 8 neighbors, always fits
        self.iter_neighbors(coords).filter(|&pos| self[pos]).count() as u8
    }

    pub fn iter_mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size)
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.mine_mask[(row as usize, col as usize)]
    }
}

impl IndexMut<Coord2> for MineLayout {
    fn index_mut(&mut self, (row, col): Coord2) -> &mut Self::Output {
        &mut self.mine_mask[(row as usize, col as usize)]
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// Outcome of an open or chord action: whether a mine went off and which cells were opened, in
/// reveal order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenResult {
    pub exploded: bool,
    pub opened_cells: Vec<Coord2>,
}

impl OpenResult {
    pub(crate) fn exploded_at(coords: Coord2) -> Self {
        Self {
            exploded: true,
            opened_cells: vec![coords],
        }
    }

    pub fn has_update(&self) -> bool {
        self.exploded || !self.opened_cells.is_empty()
    }
}

/// Used to merge outcomes when chording over several neighbors
impl BitOr for OpenResult {
    type Output = OpenResult;

    fn bitor(mut self, rhs: Self) -> Self::Output {
        self |= rhs;
        self
    }
}

impl BitOrAssign for OpenResult {
    fn bitor_assign(&mut self, rhs: Self) {
        self.exploded |= rhs.exploded;
        self.opened_cells.extend(rhs.opened_cells);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_empty_dimensions() {
        assert_eq!(BoardConfig::new(0, 9, 0), Err(BoardError::InvalidDimensions));
        assert_eq!(BoardConfig::new(9, 0, 0), Err(BoardError::InvalidDimensions));
    }

    #[test]
    fn config_requires_a_safe_cell() {
        assert_eq!(BoardConfig::new(3, 3, 9), Err(BoardError::InvalidMineCount));
        assert_eq!(BoardConfig::new(3, 3, 10), Err(BoardError::InvalidMineCount));

        let config = BoardConfig::new(3, 3, 8).unwrap();
        assert_eq!(config.safe_cells(), 1);
        assert_eq!(BoardConfig::new(1, 1, 0).unwrap().safe_cells(), 1);
        assert_eq!(BoardConfig::new(255, 255, 0).unwrap().total_cells(), 65025);
    }

    #[test]
    fn config_contains_only_in_range_cells() {
        let config = BoardConfig::new(2, 3, 1).unwrap();

        assert!(config.contains((1, 2)));
        assert!(!config.contains((2, 0)));
        assert!(!config.contains((0, 3)));
    }

    #[test]
    fn layout_rejects_out_of_range_mines() {
        assert_eq!(
            MineLayout::from_mine_coords((2, 2), &[(0, 2)]),
            Err(BoardError::InvalidCoords)
        );
    }

    #[test]
    fn layout_counts_duplicate_mines_once() {
        let layout = MineLayout::from_mine_coords((3, 3), &[(0, 0), (0, 0), (2, 1)]).unwrap();

        assert_eq!(layout.mine_count(), 2);
        assert_eq!(layout.board_config(), BoardConfig::new_unchecked(3, 3, 2));
        assert_eq!(layout.iter_mines().collect::<Vec<_>>(), vec![(0, 0), (2, 1)]);
    }

    #[test]
    fn layout_from_mask_counts_mines() {
        let mut mask = Array2::default([2, 4]);
        mask[(1, 3)] = true;
        let layout = MineLayout::from_mine_mask(mask).unwrap();

        assert_eq!(layout.size(), (2, 4));
        assert_eq!(layout.mine_count(), 1);
        assert!(layout.contains_mine((1, 3)));
        assert!(!layout.contains_mine((5, 5)));
    }

    #[test]
    fn adjacent_mine_count_is_clipped() {
        let layout = MineLayout::from_mine_coords((3, 3), &[(0, 0), (0, 1), (2, 2)]).unwrap();

        assert_eq!(layout.adjacent_mine_count((1, 1)), 3);
        assert_eq!(layout.adjacent_mine_count((0, 0)), 1);
        assert_eq!(layout.adjacent_mine_count((2, 0)), 0);
    }

    #[test]
    fn merged_results_keep_order_and_explosion() {
        let safe = OpenResult {
            exploded: false,
            opened_cells: vec![(0, 1), (0, 2)],
        };
        let boom = OpenResult::exploded_at((1, 1));

        let merged = safe | boom;

        assert!(merged.exploded);
        assert_eq!(merged.opened_cells, vec![(0, 1), (0, 2), (1, 1)]);
        assert!(!OpenResult::default().has_update());
    }
}
