#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use game::*;
pub use generator::*;
pub use snapshot::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod game;
mod generator;
mod snapshot;
mod types;

/// Board dimensions and mine count, the only configuration a game takes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub width: Coord,
    pub height: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(width: Coord, height: Coord, mines: CellCount) -> Self {
        Self {
            width,
            height,
            mines,
        }
    }

    pub fn new(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(width, height, mines);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(GameError::EmptyBoard);
        }

        let capacity = self.total_cells();
        if self.mines > capacity {
            return Err(GameError::TooManyMines {
                mines: self.mines,
                capacity,
            });
        }

        Ok(())
    }

    /// `(rows, cols)`
    pub const fn size(&self) -> Coord2 {
        (self.height, self.width)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }

    pub const fn safe_cell_count(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}
