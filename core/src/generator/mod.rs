use crate::*;
pub use random::*;

mod random;

/// Source of mine layouts, invoked once per game with the first opened cell.
///
/// The layout must fit `config` (see [`MineLayout::fits`]), a board replaces one that does not
/// with a random placement.
pub trait MineGenerator {
    fn generate(&mut self, config: BoardConfig, safe: Coord2) -> MineLayout;
}

/// A preset layout generates itself, the first opened cell is not guaranteed to be safe.
impl MineGenerator for MineLayout {
    fn generate(&mut self, _config: BoardConfig, _safe: Coord2) -> MineLayout {
        self.clone()
    }
}

/// Which cells around the first opened cell are kept free of mines.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SafeStart {
    /// Only the opened cell itself.
    Cell,
    /// The full 3x3 block centered on the opened cell.
    Halo,
}

impl SafeStart {
    /// Halo when the mines still fit outside a full 3x3 block, even if the block is clipped by
    /// the board edge.
    pub const fn for_config(config: BoardConfig) -> Self {
        if config.mines as u32 + 9 <= config.total_cells() as u32 {
            Self::Halo
        } else {
            Self::Cell
        }
    }

    pub const fn excludes(self, safe: Coord2, coords: Coord2) -> bool {
        match self {
            Self::Cell => safe.0 == coords.0 && safe.1 == coords.1,
            Self::Halo => safe.0.abs_diff(coords.0) <= 1 && safe.1.abs_diff(coords.1) <= 1,
        }
    }
}
