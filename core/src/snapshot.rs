use core::ops::Index;
use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::*;

/// What a renderer may know about a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSnapshot {
    pub flagged: bool,
    pub mines_nearby: u8,
    pub state: CellState,
    /// Only present on xray snapshots of a finished game
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_mine: Option<bool>,
}

/// Read-only copy of the board handed to renderers.
///
/// Mine locations are never part of a snapshot taken while the game is still going,
/// xray or not.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    cells: Array2<CellSnapshot>,
    finished: bool,
}

impl BoardSnapshot {
    pub(crate) fn capture(board: &Board, finished: bool, xray: bool) -> Self {
        let show_mines = finished && xray;
        let cells = Array2::from_shape_fn(board.size().to_nd_index(), |(row, col)| {
            let coords = (row as Coord, col as Coord);
            let cell = &board[coords];
            CellSnapshot {
                flagged: cell.is_flagged(),
                mines_nearby: board.mines_nearby(coords),
                state: cell.state(),
                has_mine: show_mines.then(|| cell.has_mine()),
            }
        });
        Self { cells, finished }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (rows as Coord, cols as Coord)
    }

    /// Whether the game had ended when the snapshot was taken
    pub fn is_final(&self) -> bool {
        self.finished
    }

    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, CellSnapshot>> {
        self.cells.rows().into_iter()
    }
}

impl Index<Coord2> for BoardSnapshot {
    type Output = CellSnapshot;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
