use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Outcome of clicking a cell
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The cell held a mine
    Detonated,
    /// Number of distinct cells opened by the click, origin included
    Revealed(CellCount),
}

impl ClickOutcome {
    pub const fn is_detonated(self) -> bool {
        matches!(self, Self::Detonated)
    }
}

/// Arena owning every cell of the grid, indexed by `(row, col)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    pub fn new(size: Coord2) -> Self {
        let cells = Array2::from_shape_fn(size.to_nd_index(), |(row, col)| {
            // bounded by `size`, which is itself a pair of `Coord`
            Cell::new((row as Coord, col as Coord), size)
        });
        Self { cells }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        let size = self.size();
        coords.0 < size.0 && coords.1 < size.1
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds { coords })
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn mine_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.has_mine()).count() as CellCount
    }

    /// Number of mined cells around `coords`, whatever the state of the cell itself
    pub fn mines_nearby(&self, coords: Coord2) -> u8 {
        self[coords]
            .neighbors()
            .filter(|&pos| self[pos].has_mine())
            .count() as u8
    }

    /// Deploys one mine on a cell that has none yet, sampling again on collisions.
    ///
    /// The caller must make sure at least one cell is still free.
    pub fn deploy_mine(&mut self, sampler: &mut impl MineSampler) -> Coord2 {
        let size = self.size();
        let mut coords = sampler.sample(size);
        while self[coords].has_mine() {
            log::trace!("Mine collision at {:?}, sampling again", coords);
            coords = sampler.sample(size);
        }
        self[coords].deploy_mine();
        coords
    }

    /// Opens the cell at `coords` and flood-fills zero-adjacency areas around it.
    ///
    /// Cells can enter the work queue more than once before they are first processed,
    /// the queue is kept whole and only deduplicated to count the opened cells. Copies
    /// of a cell that is already open are skipped.
    pub fn click(&mut self, coords: Coord2) -> ClickOutcome {
        if self[coords].has_mine() {
            log::debug!("Clicked mine at {:?}", coords);
            return ClickOutcome::Detonated;
        }

        self[coords].clear();

        let mut queue: Vec<Coord2> = Vec::new();
        if self.mines_nearby(coords) == 0 {
            queue.extend(self.expandable_neighbors(coords));
            log::trace!(
                "Starting flood-fill from {:?}, initial neighbors: {:?}",
                coords,
                queue
            );
        }

        let mut next = 0;
        while let Some(&visit_coords) = queue.get(next) {
            next += 1;

            // later copies of an opened cell would only queue what its first visit did
            if self[visit_coords].is_revealed() {
                continue;
            }

            self[visit_coords].clear();
            if self.mines_nearby(visit_coords) == 0 {
                let expansion: Vec<_> = self.expandable_neighbors(visit_coords).collect();
                queue.extend(expansion);
            }
        }

        let distinct: BTreeSet<Coord2> = queue.into_iter().collect();
        let revealed = distinct.len() as CellCount + 1;
        log::debug!("Clicked {:?}, revealed {} cells", coords, revealed);
        ClickOutcome::Revealed(revealed)
    }

    fn expandable_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + '_ {
        self[coords]
            .neighbors()
            .filter(|&pos| self[pos].is_valid_to_expand())
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}
