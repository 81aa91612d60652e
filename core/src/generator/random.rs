use rand::prelude::*;

use super::*;

/// Uniformly random placement that keeps the first opened cell safe, and its whole neighborhood
/// too whenever the mine density allows it.
#[derive(Clone, Debug)]
pub struct RandomMineGenerator {
    rng: SmallRng,
}

impl RandomMineGenerator {
    pub fn from_seed(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }

    pub fn from_rng(rng: SmallRng) -> Self {
        Self { rng }
    }

    #[cfg(feature = "std")]
    pub fn from_entropy() -> Self {
        Self::from_rng(SmallRng::from_os_rng())
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(&mut self, config: BoardConfig, safe: Coord2) -> MineLayout {
        let mut layout = MineLayout::empty(config.size());
        if config.mines == 0 {
            return layout;
        }

        let safe_start = SafeStart::for_config(config);
        if safe_start == SafeStart::Cell {
            log::debug!(
                "{} mines leave no room for a safe halo, only keeping {:?} safe",
                config.mines,
                safe
            );
        }

        // always terminates: a validated config leaves at least one free cell outside the
        // excluded area
        let mut placed: CellCount = 0;
        while placed < config.mines {
            let coords = (
                self.rng.random_range(0..config.rows),
                self.rng.random_range(0..config.cols),
            );
            if safe_start.excludes(safe, coords) {
                continue;
            }
            if layout.place_mine(coords) {
                placed += 1;
            }
        }

        log::debug!(
            "Placed {} mines around {:?} with {:?} start",
            placed,
            safe,
            safe_start
        );
        layout
    }
}
