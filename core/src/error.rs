use thiserror::Error;

use crate::{CellCount, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Too many mines: requested {mines} but the board only has {capacity} slots")]
    TooManyMines { mines: CellCount, capacity: CellCount },
    #[error("Board must be at least one cell wide and one cell high")]
    EmptyBoard,
    #[error("Coordinates {coords:?} are outside the board")]
    OutOfBounds { coords: Coord2 },
}

pub type Result<T> = core::result::Result<T, GameError>;
