//! All-pairs piece distance table.
//!
//! Built once from a base puzzle and shared read-only by every generation.
//! Each piece identity maps to one [`DistanceEntry`] per piece in the
//! puzzle (itself included), in the row-major order the pieces occupied
//! when the table was built. Entries snapshot the piece orientation at
//! build time; later shuffles of the base puzzle do not affect the table.

use super::grid::Puzzle;
use super::piece::Piece;
use crate::error::{Error, Result};
use rand::Rng;
use std::collections::{HashMap, HashSet};

/// Compatibility of one candidate piece against a reference piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistanceEntry {
    /// Identity of the candidate.
    pub num: usize,
    /// `reference.distance(candidate)`, in `0..=4`.
    pub distance: u8,
    /// The candidate as it was oriented when the table was built.
    pub piece: Piece,
}

/// Per-identity candidate rankings.
#[derive(Debug, Clone, Default)]
pub struct DistanceTable {
    rows: HashMap<usize, Vec<DistanceEntry>>,
    pieces: Vec<Piece>,
}

impl DistanceTable {
    /// Computes the O(n²) table over every placed piece of `puzzle`.
    pub fn build(puzzle: &Puzzle) -> Self {
        let pieces: Vec<Piece> = puzzle.iter_pieces().copied().collect();
        let mut rows: HashMap<usize, Vec<DistanceEntry>> = HashMap::with_capacity(pieces.len());

        for reference in &pieces {
            let row = rows.entry(reference.num()).or_default();
            row.extend(pieces.iter().map(|candidate| DistanceEntry {
                num: candidate.num(),
                distance: reference.distance(candidate),
                piece: *candidate,
            }));
        }

        Self { rows, pieces }
    }

    /// Number of pieces the table was built from.
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Pieces in the order they were captured.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// The ranking row for `num`.
    ///
    /// # Errors
    /// [`Error::MissingDistanceRow`] if `num` was not in the base puzzle.
    pub fn row(&self, num: usize) -> Result<&[DistanceEntry]> {
        self.rows
            .get(&num)
            .map(Vec::as_slice)
            .ok_or(Error::MissingDistanceRow { num })
    }

    /// Lowest-distance candidate for `num` whose identity is not in `used`.
    ///
    /// Ties go to the entry that appears first in the row. Returns
    /// `Ok(None)` when every candidate is used.
    ///
    /// # Errors
    /// [`Error::MissingDistanceRow`] if `num` has no row.
    pub fn best_unused(&self, num: usize, used: &HashSet<usize>) -> Result<Option<&DistanceEntry>> {
        Ok(self
            .row(num)?
            .iter()
            .filter(|e| !used.contains(&e.num))
            .min_by_key(|e| e.distance))
    }

    /// A uniformly random captured piece whose identity is not in `used`.
    pub fn random_unused<R: Rng>(&self, used: &HashSet<usize>, rng: &mut R) -> Option<Piece> {
        let pool: Vec<&Piece> = self
            .pieces
            .iter()
            .filter(|p| !used.contains(&p.num()))
            .collect();
        if pool.is_empty() {
            return None;
        }
        Some(*pool[rng.random_range(0..pool.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::EdgeLabel::*;
    use crate::random::create_rng;

    fn strip() -> Puzzle {
        // Piece 1 fits to the right of piece 0; piece 2 fits nothing.
        let a = Piece::new(0, RedA, GreenA, RedA, RedA);
        let b = Piece::new(1, RedA, RedA, RedA, GreenB);
        let c = Piece::new(2, YellowA, YellowA, YellowA, YellowA);
        Puzzle::from_pieces(1, 3, vec![a, b, c]).unwrap()
    }

    #[test]
    fn test_rows_cover_every_piece() {
        let mut rng = create_rng(42);
        let p = Puzzle::random_solvable(3, 3, &mut rng).unwrap();
        let table = p.distance_table();
        assert_eq!(table.len(), 9);
        for piece in p.iter_pieces() {
            let row = table.row(piece.num()).unwrap();
            assert_eq!(row.len(), 9);
            let nums: Vec<usize> = row.iter().map(|e| e.num).collect();
            let order: Vec<usize> = p.iter_pieces().map(Piece::num).collect();
            assert_eq!(nums, order);
        }
    }

    #[test]
    fn test_entries_record_distance() {
        let p = strip();
        let table = p.distance_table();
        let row = table.row(0).unwrap();
        assert_eq!(row[0].distance, 4);
        assert_eq!(row[1].distance, 3);
        assert_eq!(row[2].distance, 4);
        assert_eq!(row[1].piece, *p.piece(0, 1).unwrap());
    }

    #[test]
    fn test_missing_row_fails() {
        let table = strip().distance_table();
        assert_eq!(table.row(99).unwrap_err(), Error::MissingDistanceRow { num: 99 });
        assert!(table.best_unused(99, &HashSet::new()).is_err());
    }

    #[test]
    fn test_best_unused_skips_used_and_prefers_first_tie() {
        let table = strip().distance_table();
        let mut used = HashSet::new();
        assert_eq!(table.best_unused(0, &used).unwrap().unwrap().num, 1);

        used.insert(1);
        // Pieces 0 and 2 both score 4; the earlier row entry wins.
        assert_eq!(table.best_unused(0, &used).unwrap().unwrap().num, 0);

        used.extend([0, 2]);
        assert!(table.best_unused(0, &used).unwrap().is_none());
    }

    #[test]
    fn test_random_unused() {
        let table = strip().distance_table();
        let mut rng = create_rng(42);
        let used: HashSet<usize> = [0, 2].into_iter().collect();
        for _ in 0..10 {
            assert_eq!(table.random_unused(&used, &mut rng).unwrap().num(), 1);
        }
        let all: HashSet<usize> = [0, 1, 2].into_iter().collect();
        assert!(table.random_unused(&all, &mut rng).is_none());
    }

    #[test]
    fn test_table_is_a_snapshot() {
        let mut rng = create_rng(42);
        let mut p = Puzzle::random_solvable(2, 2, &mut rng).unwrap();
        let table = p.distance_table();
        let captured = table.pieces().to_vec();
        p.shuffle(&mut rng);
        assert_eq!(table.pieces(), captured.as_slice());
    }
}
