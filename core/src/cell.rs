use serde::{Deserialize, Serialize};

/// Player-visible state of a single cell, as a presentation layer would draw it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Hidden,
    Flagged,
    /// Safe cell that was opened, with its adjacent mine count.
    Opened(u8),
    /// Mine that was opened.
    Exploded,
}

impl CellState {
    pub const fn is_unopened(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}
