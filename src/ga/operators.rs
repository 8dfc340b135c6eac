//! Puzzle-specific genetic operators.
//!
//! # Crossover
//!
//! [`crossover`] keeps every cell on which both parents agree exactly
//! (same piece, same orientation) and leaves the rest empty. [`fill_gaps`]
//! then completes the child greedily, row-major, using the
//! [`DistanceTable`] to pick the unused piece that best fits an
//! already-filled neighbour. It never backtracks.
//!
//! # Mutation
//!
//! [`duplicate_and_displace`] rotates a random cell and then overwrites it
//! with a copy of another random cell. The copy may duplicate an identity
//! within the individual; the search tolerates that.

use crate::error::{Error, Result};
use crate::puzzle::{Cell, DistanceTable, Puzzle};
use rand::Rng;
use std::collections::HashSet;
use tracing::trace;

/// Produces one child from two parents of the same shape.
///
/// # Errors
/// [`Error::DimensionMismatch`] if the parents differ in shape, or any
/// error from [`fill_gaps`].
pub fn crossover<R: Rng>(
    mother: &Puzzle,
    father: &Puzzle,
    table: &DistanceTable,
    rng: &mut R,
) -> Result<Puzzle> {
    if mother.shape() != father.shape() {
        return Err(Error::DimensionMismatch {
            expected: mother.shape(),
            found: father.shape(),
        });
    }

    let mut child = Puzzle::empty(mother.rows(), mother.cols())?;
    for r in 0..child.rows() {
        for c in 0..child.cols() {
            if let (Some(m), Some(f)) = (mother.piece(r, c), father.piece(r, c)) {
                if m == f {
                    child.set(r, c, Cell::Occupied(*m));
                }
            }
        }
    }

    fill_gaps(&mut child, table, rng)?;
    Ok(child)
}

/// Fills every empty cell of `child` without reusing an identity.
///
/// Cells are visited row-major. For an empty cell the first filled
/// neighbour in the order right, below, left, above is the anchor; the
/// unused candidate with the lowest distance in the anchor's table row is
/// placed, ties going to the earlier row entry. A cell with no filled
/// neighbour gets a uniformly random unused piece from the table.
///
/// # Errors
/// - [`Error::MissingDistanceRow`] if an anchor's identity is not in `table`.
/// - [`Error::NoCandidates`] if no unused piece remains for a cell.
pub fn fill_gaps<R: Rng>(child: &mut Puzzle, table: &DistanceTable, rng: &mut R) -> Result<()> {
    let mut used: HashSet<usize> = child.iter_pieces().map(|p| p.num()).collect();

    for r in 0..child.rows() {
        for c in 0..child.cols() {
            if !child.cell(r, c).is_empty() {
                continue;
            }

            let ranked = match anchor(child, r, c) {
                Some(num) => table.best_unused(num, &used)?.map(|e| e.piece),
                None => None,
            };
            let piece = match ranked {
                Some(piece) => piece,
                None => {
                    trace!(row = r, col = c, "no anchored candidate, drawing at random");
                    table
                        .random_unused(&used, rng)
                        .ok_or(Error::NoCandidates { row: r, col: c })?
                }
            };

            used.insert(piece.num());
            child.set(r, c, Cell::Occupied(piece));
        }
    }
    Ok(())
}

/// Identity of the first filled neighbour of `(r, c)`: right, below, left, above.
fn anchor(puzzle: &Puzzle, r: usize, c: usize) -> Option<usize> {
    let mut neighbours = Vec::with_capacity(4);
    if c + 1 < puzzle.cols() {
        neighbours.push((r, c + 1));
    }
    if r + 1 < puzzle.rows() {
        neighbours.push((r + 1, c));
    }
    if c > 0 {
        neighbours.push((r, c - 1));
    }
    if r > 0 {
        neighbours.push((r - 1, c));
    }
    neighbours
        .into_iter()
        .find_map(|(nr, nc)| puzzle.piece(nr, nc).map(|p| p.num()))
}

/// Rotates a random cell by 0–3 quarter turns, then overwrites it with a
/// copy of a second, independently chosen cell.
///
/// When both draws hit the same cell only the rotation survives. Otherwise
/// the overwritten piece is lost and the copied identity appears twice.
pub fn duplicate_and_displace<R: Rng>(puzzle: &mut Puzzle, rng: &mut R) {
    let (r, c) = random_cell(puzzle, rng);
    let turns = rng.random_range(0..4);
    if let Some(piece) = puzzle.cell_mut(r, c).piece_mut() {
        piece.rotate_by(turns);
    }

    let (sr, sc) = random_cell(puzzle, rng);
    let source = *puzzle.cell(sr, sc);
    puzzle.set(r, c, source);
    trace!(target_cell = ?(r, c), source_cell = ?(sr, sc), turns, "mutated");
}

fn random_cell<R: Rng>(puzzle: &Puzzle, rng: &mut R) -> (usize, usize) {
    (
        rng.random_range(0..puzzle.rows()),
        rng.random_range(0..puzzle.cols()),
    )
}
