use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::num::Saturating;
use ndarray::{Array2, ArrayView2};

use crate::*;

/// The authoritative state of one game: mines, opened cells and flags.
///
/// Mines are placed lazily by the first [`Board::open_cell`], using that cell as the safe seed, so
/// a fresh board (or one that was [`Board::reset`]) never contains any mine. Every move is a total
/// function, coordinates outside of the board are silently ignored.
#[derive(Clone, Debug)]
pub struct Board<G = RandomMineGenerator> {
    config: BoardConfig,
    generator: G,
    mine_layout: MineLayout,
    opened: Array2<bool>,
    flagged: Array2<bool>,
    mines_placed: bool,
    opened_safe_count: Saturating<CellCount>,
    flagged_count: Saturating<CellCount>,
}

#[cfg(feature = "std")]
impl Board {
    /// Board seeded from OS entropy.
    pub fn new(config: BoardConfig) -> Result<Self> {
        Self::with_generator(config, RandomMineGenerator::from_entropy())
    }
}

impl Board {
    /// Reproducible board, the same seed and moves always give the same game.
    pub fn with_seed(config: BoardConfig, seed: u64) -> Result<Self> {
        Self::with_generator(config, RandomMineGenerator::from_seed(seed))
    }
}

impl Board<MineLayout> {
    /// Board that will use exactly `layout` once the first cell is opened.
    pub fn from_layout(layout: MineLayout) -> Result<Self> {
        let config = layout.board_config();
        Self::with_generator(config, layout)
    }
}

impl<G: MineGenerator> Board<G> {
    pub fn with_generator(config: BoardConfig, generator: G) -> Result<Self> {
        config.validate()?;
        let size = config.size();
        Ok(Self {
            config,
            generator,
            mine_layout: MineLayout::empty(size),
            opened: Array2::default(size.to_nd_index()),
            flagged: Array2::default(size.to_nd_index()),
            mines_placed: false,
            opened_safe_count: Saturating(0),
            flagged_count: Saturating(0),
        })
    }

    /// Starts a fresh game with the same dimensions and mine count.
    pub fn reset(&mut self) {
        log::debug!("Resetting {:?} board", self.config);
        self.mine_layout = MineLayout::empty(self.config.size());
        self.opened.fill(false);
        self.flagged.fill(false);
        self.mines_placed = false;
        self.opened_safe_count = Saturating(0);
        self.flagged_count = Saturating(0);
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn rows(&self) -> Coord {
        self.config.rows
    }

    pub fn cols(&self) -> Coord {
        self.config.cols
    }

    pub fn total_mines(&self) -> CellCount {
        self.config.mines
    }

    pub fn mines_placed(&self) -> bool {
        self.mines_placed
    }

    pub fn flags_count(&self) -> CellCount {
        self.flagged_count.0
    }

    /// Mines not yet accounted for by a flag, negative when over-flagged.
    pub fn mines_left(&self) -> i32 {
        i32::from(self.config.mines) - i32::from(self.flagged_count.0)
    }

    pub fn is_mine(&self, coords: Coord2) -> bool {
        self.mine_layout.contains_mine(coords)
    }

    pub fn is_opened(&self, coords: Coord2) -> bool {
        get_or_false(&self.opened, coords)
    }

    pub fn is_flagged(&self, coords: Coord2) -> bool {
        get_or_false(&self.flagged, coords)
    }

    pub fn count_adjacent_mines(&self, coords: Coord2) -> u8 {
        if !self.config.contains(coords) {
            return 0;
        }
        self.mine_layout.adjacent_mine_count(coords)
    }

    pub fn count_adjacent_flags(&self, coords: Coord2) -> u8 {
        if !self.config.contains(coords) {
            return 0;
        }
        self.flagged
            .iter_neighbors(coords)
            .filter(|&pos| self.flagged[pos.to_nd_index()])
            .count() as u8
    }

    /// Every safe cell is open. Flags play no part in it.
    pub fn is_win(&self) -> bool {
        self.opened_safe_count.0 >= self.config.safe_cells()
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<CellState> {
        if !self.config.contains(coords) {
            return None;
        }
        Some(if self.opened[coords.to_nd_index()] {
            if self.mine_layout[coords] {
                CellState::Exploded
            } else {
                CellState::Opened(self.mine_layout.adjacent_mine_count(coords))
            }
        } else if self.flagged[coords.to_nd_index()] {
            CellState::Flagged
        } else {
            CellState::Hidden
        })
    }

    /// All mines, empty until the first cell is opened.
    pub fn mine_mask(&self) -> ArrayView2<'_, bool> {
        self.mine_layout.mine_mask().view()
    }

    pub fn opened_mask(&self) -> ArrayView2<'_, bool> {
        self.opened.view()
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        if !self.config.contains(coords) || self.opened[coords.to_nd_index()] {
            return MarkOutcome::NoChange;
        }

        let flag = &mut self.flagged[coords.to_nd_index()];
        *flag = !*flag;
        if *flag {
            self.flagged_count += 1;
        } else {
            self.flagged_count -= 1;
        }
        MarkOutcome::Changed
    }

    /// Opens a cell, flood filling through cells without adjacent mines.
    ///
    /// Flagged cells are never opened, and also stop the flood fill.
    pub fn open_cell(&mut self, coords: Coord2) -> OpenResult {
        if !self.config.contains(coords) || self.flagged[coords.to_nd_index()] {
            return OpenResult::default();
        }

        self.place_mines(coords);

        if self.mine_layout[coords] {
            log::debug!("Mine hit at {:?}", coords);
            self.opened[coords.to_nd_index()] = true;
            return OpenResult::exploded_at(coords);
        }

        let opened_cells = self.flood_fill(coords);
        log::trace!("Opened {} cells from {:?}", opened_cells.len(), coords);
        OpenResult {
            exploded: false,
            opened_cells,
        }
    }

    /// Opens every unopened, unflagged neighbor of an opened cell once at least as many flags as
    /// adjacent mines surround it.
    ///
    /// Only the number of flags is checked, not where they are: a misplaced flag leaves a mine
    /// unflagged, and chording opens it.
    pub fn chord_open(&mut self, coords: Coord2) -> OpenResult {
        if !self.is_opened(coords) {
            return OpenResult::default();
        }

        let adjacent_mines = self.count_adjacent_mines(coords);
        let adjacent_flags = self.count_adjacent_flags(coords);
        if adjacent_mines == 0 || adjacent_flags < adjacent_mines {
            return OpenResult::default();
        }

        let mut result = OpenResult::default();
        for pos in self.mine_layout.iter_neighbors(coords) {
            let index = pos.to_nd_index();
            if self.flagged[index] || self.opened[index] {
                continue;
            }

            if self.mine_layout[pos] {
                log::debug!("Chord from {:?} hit mine at {:?}", coords, pos);
                self.opened[index] = true;
                result |= OpenResult::exploded_at(pos);
            } else {
                result |= self.open_cell(pos);
            }
        }

        log::trace!(
            "Chord from {:?} opened {} cells",
            coords,
            result.opened_cells.len()
        );
        result
    }

    fn place_mines(&mut self, safe: Coord2) {
        if self.mines_placed {
            return;
        }

        let mut layout = self.generator.generate(self.config, safe);
        if !layout.fits(self.config) {
            log::warn!(
                "Generated layout {:?} with {} mines does not fit {:?}, placing randomly instead",
                layout.size(),
                layout.mine_count(),
                self.config
            );
            let seed = (u64::from(safe.0) << 8) | u64::from(safe.1);
            layout = RandomMineGenerator::from_seed(seed).generate(self.config, safe);
        }
        self.mine_layout = layout;
        self.mines_placed = true;
    }

    /// Breadth-first reveal from `start`, which must be a safe unflagged cell.
    fn flood_fill(&mut self, start: Coord2) -> Vec<Coord2> {
        let mut opened_cells = Vec::new();
        let mut visited: Array2<bool> = Array2::default(self.config.size().to_nd_index());
        let mut to_visit = VecDeque::from([start]);
        visited[start.to_nd_index()] = true;

        while let Some(visit_coords) = to_visit.pop_front() {
            let index = visit_coords.to_nd_index();
            if self.opened[index] {
                continue;
            }

            self.opened[index] = true;
            self.opened_safe_count += 1;
            opened_cells.push(visit_coords);

            if self.mine_layout.adjacent_mine_count(visit_coords) != 0 {
                continue;
            }

            for pos in self.mine_layout.iter_neighbors(visit_coords) {
                let index = pos.to_nd_index();
                if !visited[index]
                    && !self.mine_layout[pos]
                    && !self.opened[index]
                    && !self.flagged[index]
                {
                    visited[index] = true;
                    to_visit.push_back(pos);
                }
            }
        }

        opened_cells
    }
}

fn get_or_false(mask: &Array2<bool>, coords: Coord2) -> bool {
    mask.get(coords.to_nd_index()).copied().unwrap_or(false)
}
