//! Survivor retention and parent sampling.
//!
//! Retention works on a population already sorted best-first: the top
//! fraction survives outright, and every other individual gets an
//! independent chance to survive anyway. Survivors become the parent pool
//! from which crossover pairs are drawn uniformly.

use crate::puzzle::Puzzle;
use rand::Rng;

/// Splits a best-first population into the parents for the next generation.
///
/// Keeps the first `floor(len * retain)` individuals, then admits each of
/// the rest with probability `random_select_chance`. The relative order of
/// the input is preserved.
pub fn retain_parents<R: Rng>(
    sorted: Vec<Puzzle>,
    retain: f64,
    random_select_chance: f64,
    rng: &mut R,
) -> Vec<Puzzle> {
    let cutoff = retained_count(sorted.len(), retain);
    let mut parents = Vec::with_capacity(sorted.len());

    for (i, individual) in sorted.into_iter().enumerate() {
        if i < cutoff || rng.random_range(0.0..1.0) < random_select_chance {
            parents.push(individual);
        }
    }
    parents
}

/// Number of individuals kept outright: `floor(len * retain)`, capped at `len`.
pub fn retained_count(len: usize, retain: f64) -> usize {
    ((len as f64 * retain) as usize).min(len)
}

/// Draws a (mother, father) index pair from a pool of `n` parents.
///
/// The father is resampled until it differs from the mother. A pool of one
/// pairs the single parent with itself.
///
/// # Panics
/// Panics if `n == 0`.
pub fn pick_parents<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    assert!(n > 0, "cannot pick parents from an empty pool");
    if n == 1 {
        return (0, 0);
    }
    let mother = rng.random_range(0..n);
    loop {
        let father = rng.random_range(0..n);
        if father != mother {
            return (mother, father);
        }
    }
}
