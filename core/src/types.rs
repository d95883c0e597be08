use core::ops::RangeInclusive;

/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts, total-cell counts and the discovered counter.
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

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Positions within one step of `pos` on an axis of length `len`, clamped to the axis.
///
/// Clamping collapses the out-of-range candidates onto `pos` itself, so the range is
/// already deduplicated and ascending: 2 values on a border, 3 inside, 1 on a
/// single-cell axis.
pub fn clamped_axis(pos: Coord, len: Coord) -> RangeInclusive<Coord> {
    let last = len.saturating_sub(1);
    pos.saturating_sub(1)..=pos.saturating_add(1).min(last)
}

/// Iterates the Cartesian product of the clamped row and column ranges around
/// `center`, rows outer, columns inner, skipping `center` itself.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    rows: RangeInclusive<Coord>,
    cols: RangeInclusive<Coord>,
    row: Option<Coord>,
    col_iter: RangeInclusive<Coord>,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        let mut rows = clamped_axis(center.0, bounds.0);
        let cols = clamped_axis(center.1, bounds.1);
        let row = rows.next();
        Self {
            center,
            rows,
            col_iter: cols.clone(),
            cols,
            row,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let row = self.row?;

            let Some(col) = self.col_iter.next() else {
                self.row = self.rows.next();
                self.col_iter = self.cols.clone();
                continue;
            };

            if (row, col) != self.center {
                return Some((row, col));
            }
        }
    }
}
