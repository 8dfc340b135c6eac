//! The puzzle grid.
//!
//! [`Puzzle`] is a `rows × cols` row-major grid of [`Cell`]s. Generated and
//! shuffled puzzles are always fully occupied; crossover children start as
//! [`Puzzle::empty`] and are completed by gap filling.

use super::distance::DistanceTable;
use super::edge::EdgeLabel;
use super::piece::Piece;
use crate::error::{Error, Result};
use rand::seq::SliceRandom;
use rand::Rng;

/// Content of one grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Cell {
    pub fn piece(&self) -> Option<&Piece> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(p) => Some(p),
        }
    }

    pub fn piece_mut(&mut self) -> Option<&mut Piece> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(p) => Some(p),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<Piece> for Cell {
    fn from(piece: Piece) -> Self {
        Cell::Occupied(piece)
    }
}

/// A rectangular grid of pieces.
///
/// `Clone` is a deep copy: cells hold their pieces by value, so no state is
/// shared between a puzzle and its clones.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawPuzzle")
)]
pub struct Puzzle {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

/// Unchecked wire form; deserialized puzzles go through [`Puzzle::from_cells`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPuzzle {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPuzzle> for Puzzle {
    type Error = Error;

    fn try_from(raw: RawPuzzle) -> Result<Self> {
        Self::from_cells(raw.rows, raw.cols, raw.cells)
    }
}

impl Puzzle {
    /// Creates a grid with every cell [`Cell::Empty`].
    ///
    /// # Errors
    /// Returns [`Error::InvalidDimensions`] if either dimension is zero.
    pub fn empty(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    /// Builds a grid from row-major `cells`, which may include empty ones.
    ///
    /// # Errors
    /// [`Error::InvalidDimensions`] for a zero dimension, or
    /// [`Error::PieceCountMismatch`] if `cells.len()` is not `rows * cols`.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Result<Self> {
        let mut puzzle = Self::empty(rows, cols)?;
        if cells.len() != puzzle.cells.len() {
            return Err(Error::PieceCountMismatch {
                expected: puzzle.cells.len(),
                found: cells.len(),
            });
        }
        puzzle.cells = cells;
        Ok(puzzle)
    }

    /// Lays `pieces` out row-major.
    ///
    /// # Errors
    /// Same as [`from_cells`](Self::from_cells).
    pub fn from_pieces(rows: usize, cols: usize, pieces: Vec<Piece>) -> Result<Self> {
        Self::from_cells(rows, cols, pieces.into_iter().map(Cell::Occupied).collect())
    }

    /// Generates a puzzle whose as-built layout is fully consistent.
    ///
    /// Cells are filled row-major. A cell's top label is the pair of the
    /// bottom label above it and its left label is the pair of the right
    /// label beside it; labels on the outer border and every right/bottom
    /// label are drawn at random. Piece `(r, c)` gets identity
    /// `r * cols + c`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDimensions`] if either dimension is zero.
    pub fn random_solvable<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Result<Self> {
        let mut puzzle = Self::empty(rows, cols)?;
        for r in 0..rows {
            for c in 0..cols {
                let top = match r {
                    0 => EdgeLabel::random(rng),
                    _ => puzzle.expect_piece(r - 1, c).bottom().pair(),
                };
                let right = EdgeLabel::random(rng);
                let bottom = EdgeLabel::random(rng);
                let left = match c {
                    0 => EdgeLabel::random(rng),
                    _ => puzzle.expect_piece(r, c - 1).right().pair(),
                };
                let num = r * cols + c;
                puzzle.set(r, c, Piece::new(num, top, right, bottom, left).into());
            }
        }
        Ok(puzzle)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) out of bounds for {}x{} puzzle",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    /// # Panics
    /// Panics if `(row, col)` is out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[self.index(row, col)]
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> &mut Cell {
        let idx = self.index(row, col);
        &mut self.cells[idx]
    }

    /// The piece at `(row, col)`, or `None` if the cell is empty.
    pub fn piece(&self, row: usize, col: usize) -> Option<&Piece> {
        self.cell(row, col).piece()
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        *self.cell_mut(row, col) = cell;
    }

    fn expect_piece(&self, row: usize, col: usize) -> &Piece {
        self.piece(row, col)
            .expect("cells before the cursor are filled during generation")
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Occupied pieces in row-major order.
    pub fn iter_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.cells.iter().filter_map(Cell::piece)
    }

    /// Identities of all placed pieces, sorted.
    pub fn identities(&self) -> Vec<usize> {
        let mut nums: Vec<usize> = self.iter_pieces().map(Piece::num).collect();
        nums.sort_unstable();
        nums
    }

    /// Whether any identity occupies more than one cell.
    ///
    /// Shuffling and crossover never produce duplicates; the
    /// duplicate-and-displace mutation can.
    pub fn has_duplicate_identities(&self) -> bool {
        self.identities().windows(2).any(|w| w[0] == w[1])
    }

    /// Whether every cell holds a piece.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Whether the layout is complete and fully consistent.
    pub fn is_solved(&self) -> bool {
        self.is_complete() && self.fitness() == 0
    }

    /// Randomizes positions and orientations in place.
    ///
    /// Pieces are permuted uniformly, re-laid row-major, and each receives
    /// an independent random rotation of 0–3 quarter turns. The set of
    /// identities is unchanged.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cells.shuffle(rng);
        for piece in self.cells.iter_mut().filter_map(Cell::piece_mut) {
            piece.rotate_by(rng.random_range(0..4));
        }
    }

    /// Number of mismatched interior adjacencies. Zero means solved.
    ///
    /// Each horizontal neighbour pair is checked once (left piece's right
    /// edge against right piece's left edge) and each vertical pair once
    /// (upper piece's bottom against lower piece's top), for
    /// `(rows - 1) * cols + rows * (cols - 1)` checks in total. An adjacency
    /// touching an empty cell counts as a mismatch.
    pub fn fitness(&self) -> usize {
        let mut mismatches = 0;
        for r in 0..self.rows {
            for c in 0..self.cols {
                let here = self.piece(r, c);
                if c + 1 < self.cols {
                    let fits = match (here, self.piece(r, c + 1)) {
                        (Some(a), Some(b)) => a.right().matches(b.left()),
                        _ => false,
                    };
                    mismatches += usize::from(!fits);
                }
                if r + 1 < self.rows {
                    let fits = match (here, self.piece(r + 1, c)) {
                        (Some(a), Some(b)) => a.bottom().matches(b.top()),
                        _ => false,
                    };
                    mismatches += usize::from(!fits);
                }
            }
        }
        mismatches
    }

    /// Total number of adjacencies [`fitness`](Self::fitness) inspects.
    pub fn adjacency_count(&self) -> usize {
        (self.rows - 1) * self.cols + self.rows * (self.cols - 1)
    }

    /// Builds the all-pairs distance table from the current arrangement.
    pub fn distance_table(&self) -> DistanceTable {
        DistanceTable::build(self)
    }
}
