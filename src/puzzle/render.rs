//! Plain-text rendering of a puzzle.
//!
//! Each cell is drawn three lines tall:
//!
//! ```text
//! +-------+-------+
//! |0  R0  |1  G1  |
//! |B1   Y0|Y1   R1|
//! |   G0  |   B0  |
//! +-------+-------+
//! ```
//!
//! The identity sits top-left, labels sit on their sides. Empty cells are
//! left blank.

use super::grid::{Cell, Puzzle};
use super::piece::Piece;
use std::fmt::{self, Write};

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let num_width = self
            .iter_pieces()
            .map(|p| p.num().to_string().len())
            .max()
            .unwrap_or(1);
        let inner = num_width + 6;
        let border = format!("+{}", "-".repeat(inner)).repeat(self.cols()) + "+";

        for r in 0..self.rows() {
            writeln!(f, "{border}")?;
            for line in 0..3 {
                for c in 0..self.cols() {
                    f.write_char('|')?;
                    let text = match self.cell(r, c) {
                        Cell::Empty => String::new(),
                        Cell::Occupied(piece) => cell_line(piece, line, num_width),
                    };
                    write!(f, "{text:<inner$}")?;
                }
                writeln!(f, "|")?;
            }
        }
        writeln!(f, "{border}")
    }
}

fn cell_line(piece: &Piece, line: usize, num_width: usize) -> String {
    match line {
        0 => format!("{:<num_width$}  {}", piece.num(), piece.top()),
        1 => format!("{}{}{}", piece.left(), " ".repeat(num_width + 2), piece.right()),
        _ => format!("{}  {}", " ".repeat(num_width), piece.bottom()),
    }
}
