use core::ops::RangeInclusive;
use serde::{Deserialize, Serialize};

use crate::*;

/// Player-visible state of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Unknown,
    Clear,
}

impl Default for CellState {
    fn default() -> Self {
        Self::Unknown
    }
}

/// Score change reported by a flag toggle, applied to the discovered counter
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScoreDelta {
    /// A mined cell was just flagged
    Up,
    /// A mined cell was just unflagged
    Down,
    Unchanged,
}

impl ScoreDelta {
    pub const fn value(self) -> i8 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
            Self::Unchanged => 0,
        }
    }
}

/// Outcome of toggling the flag of a single cell
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FlagOutcome {
    /// Whether the cell could be toggled at all, i.e. it was not revealed
    pub eligible: bool,
    pub delta: ScoreDelta,
}

/// One slot of the board.
///
/// A cell knows its own coordinates and the extent of the board it lives in, which is
/// all it needs to enumerate its neighbors. Looking those neighbors up is the job of the
/// [`Board`] that owns every cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    coords: Coord2,
    bounds: Coord2,
    state: CellState,
    has_mine: bool,
    flagged: bool,
}

impl Cell {
    pub fn new(coords: Coord2, bounds: Coord2) -> Self {
        Self {
            coords,
            bounds,
            state: CellState::Unknown,
            has_mine: false,
            flagged: false,
        }
    }

    pub fn coords(&self) -> Coord2 {
        self.coords
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self.state, CellState::Clear)
    }

    pub fn is_flagged(&self) -> bool {
        self.flagged
    }

    pub fn has_mine(&self) -> bool {
        self.has_mine
    }

    pub fn neighbor_rows(&self) -> RangeInclusive<Coord> {
        clamped_axis(self.coords.0, self.bounds.0)
    }

    pub fn neighbor_cols(&self) -> RangeInclusive<Coord> {
        clamped_axis(self.coords.1, self.bounds.1)
    }

    pub fn neighbors(&self) -> NeighborIter {
        NeighborIter::new(self.coords, self.bounds)
    }

    pub fn deploy_mine(&mut self) {
        self.has_mine = true;
    }

    pub fn clear(&mut self) {
        self.state = CellState::Clear;
    }

    /// Whether the player may click this cell
    pub fn is_valid(&self, is_dead: bool) -> bool {
        !self.is_revealed() && !self.flagged && !is_dead
    }

    /// Whether flood-fill may open this cell, flags block the expansion
    pub fn is_valid_to_expand(&self) -> bool {
        !self.is_revealed() && !self.has_mine && !self.flagged
    }

    pub fn flag(&mut self) -> FlagOutcome {
        use ScoreDelta::*;

        if self.is_revealed() {
            return FlagOutcome {
                eligible: false,
                delta: Unchanged,
            };
        }

        self.flagged = !self.flagged;
        let delta = match (self.has_mine, self.flagged) {
            (true, true) => Up,
            (true, false) => Down,
            (false, _) => Unchanged,
        };

        FlagOutcome {
            eligible: true,
            delta,
        }
    }
}
