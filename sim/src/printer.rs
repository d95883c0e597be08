use clap::ValueEnum;
use minesweep_core::{BoardSnapshot, CellSnapshot, CellState};

/// Turns a board snapshot into text, one line per row.
pub trait Printer {
    fn cell_token(&self, cell: &CellSnapshot) -> char;

    fn render(&self, snapshot: &BoardSnapshot) -> String {
        let mut out = String::new();
        for row in snapshot.rows() {
            for cell in row {
                out.push(self.cell_token(cell));
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }
}

/// Mines, flags, then the first letter of the cell state.
#[derive(Copy, Clone, Debug, Default)]
pub struct SimplePrinter;

impl Printer for SimplePrinter {
    fn cell_token(&self, cell: &CellSnapshot) -> char {
        if cell.has_mine == Some(true) {
            'B'
        } else if cell.flagged {
            'F'
        } else {
            match cell.state {
                CellState::Unknown => 'u',
                CellState::Clear => 'c',
            }
        }
    }
}

/// Classic look: `#` mines, `F` flags, `.` unknown, `*` empty, digits for counts.
#[derive(Copy, Clone, Debug, Default)]
pub struct PrettyPrinter;

impl Printer for PrettyPrinter {
    fn cell_token(&self, cell: &CellSnapshot) -> char {
        if cell.has_mine == Some(true) {
            '#'
        } else if cell.flagged {
            'F'
        } else {
            match (cell.state, cell.mines_nearby) {
                (CellState::Unknown, _) => '.',
                (CellState::Clear, 0) => '*',
                (CellState::Clear, count) => char::from_digit(count.into(), 10).unwrap_or('?'),
            }
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PrinterChoice {
    /// Pick one of the printers at random for every frame
    Random,
    Simple,
    Pretty,
}

impl PrinterChoice {
    /// Resolves the choice for one frame, `coin` decides between the two in random mode
    pub fn pick(self, coin: bool) -> &'static dyn Printer {
        match (self, coin) {
            (Self::Simple, _) | (Self::Random, false) => &SimplePrinter,
            (Self::Pretty, _) | (Self::Random, true) => &PrettyPrinter,
        }
    }
}
