use ndarray::Array2;

/// Single coordinate axis used for row/column counts and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let (rows, cols) = self.dim();
        let size = (
            Coord::try_from(rows).unwrap_or(Coord::MAX),
            Coord::try_from(cols).unwrap_or(Coord::MAX),
        );
        NeighborIter::new(index, size)
    }
}

/// Moore neighbourhood of a cell, clipped to the board bounds, in row-major order.
///
/// Owns its state, so callers may mutate the board while iterating.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    first_col: Coord,
    last: Coord2,
    next: Option<Coord2>,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        let (row, col) = center;
        let (rows, cols) = bounds;
        let first = (row.saturating_sub(1), col.saturating_sub(1));
        let last = (
            row.saturating_add(1).min(rows.saturating_sub(1)),
            col.saturating_add(1).min(cols.saturating_sub(1)),
        );
        let non_empty = rows > 0 && cols > 0 && first.0 <= last.0 && first.1 <= last.1;
        Self {
            center,
            first_col: first.1,
            last,
            next: non_empty.then_some(first),
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let current = self.next?;
            let (row, col) = current;
            self.next = if col < self.last.1 {
                Some((row, col + 1))
            } else if row < self.last.0 {
                Some((row + 1, self.first_col))
            } else {
                None
            };

            if current != self.center {
                return Some(current);
            }
        }
    }
}
