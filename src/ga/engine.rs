//! Generation-level building blocks: seeding, grading, and one evolve step.
//!
//! These are the pieces [`GaRunner`](super::GaRunner) composes; they can
//! also be driven directly for custom stopping rules.

use super::config::GaConfig;
use super::operators::{crossover, duplicate_and_displace};
use super::selection::{pick_parents, retain_parents};
use crate::error::{Error, Result};
use crate::puzzle::{DistanceTable, Puzzle};
use crate::random::create_rng;
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::trace;

/// Seeds a population with `count` independently shuffled deep copies of `base`.
pub fn population<R: Rng>(base: &Puzzle, count: usize, rng: &mut R) -> Vec<Puzzle> {
    (0..count)
        .map(|_| {
            let mut individual = base.clone();
            individual.shuffle(rng);
            individual
        })
        .collect()
}

/// Mean fitness of the population.
///
/// # Errors
/// [`Error::EmptyPopulation`] if `pop` is empty.
pub fn grade(pop: &[Puzzle]) -> Result<f64> {
    if pop.is_empty() {
        return Err(Error::EmptyPopulation);
    }
    let total: usize = pop.iter().map(Puzzle::fitness).sum();
    Ok(total as f64 / pop.len() as f64)
}

/// Advances the population by one generation.
///
/// 1. Sort ascending by fitness (stable).
/// 2. Keep the top `retain` fraction and admit each remaining individual
///    with probability `random_select_chance`. If nobody survives, the best
///    individual is kept.
/// 3. Mutate each parent with probability `mutate_chance`.
/// 4. Breed children from distinct random parent pairs until the
///    population is back to its original size.
///
/// Each child gets its own generator seeded from `rng`, so the result for a
/// given seed does not depend on `config.parallel`.
///
/// # Errors
/// [`Error::EmptyPopulation`] if `pop` is empty, or any crossover error.
pub fn evolve<R: Rng>(
    pop: Vec<Puzzle>,
    table: &DistanceTable,
    config: &GaConfig,
    rng: &mut R,
) -> Result<Vec<Puzzle>> {
    if pop.is_empty() {
        return Err(Error::EmptyPopulation);
    }
    let size = pop.len();

    let sorted = sort_by_fitness(pop, config.parallel);
    let best = sorted[0].clone();
    let mut parents = retain_parents(sorted, config.retain, config.random_select_chance, rng);
    if parents.is_empty() {
        parents.push(best);
    }

    for parent in parents.iter_mut() {
        if rng.random_range(0.0..1.0) < config.mutate_chance {
            duplicate_and_displace(parent, rng);
        }
    }

    let desired = size - parents.len();
    let seeds: Vec<u64> = (0..desired).map(|_| rng.random()).collect();
    let children = breed(&parents, table, &seeds, config.parallel)?;
    trace!(parents = parents.len(), children = children.len(), "bred generation");

    parents.extend(children);
    Ok(parents)
}

fn sort_by_fitness(pop: Vec<Puzzle>, parallel: bool) -> Vec<Puzzle> {
    let keys = fitness_keys(&pop, parallel);
    let mut keyed: Vec<(usize, Puzzle)> = keys.into_iter().zip(pop).collect();
    keyed.sort_by_key(|(fitness, _)| *fitness);
    keyed.into_iter().map(|(_, p)| p).collect()
}

fn fitness_keys(pop: &[Puzzle], parallel: bool) -> Vec<usize> {
    #[cfg(feature = "parallel")]
    if parallel {
        return pop.par_iter().map(Puzzle::fitness).collect();
    }
    let _ = parallel;
    pop.iter().map(Puzzle::fitness).collect()
}

fn breed(
    parents: &[Puzzle],
    table: &DistanceTable,
    seeds: &[u64],
    parallel: bool,
) -> Result<Vec<Puzzle>> {
    let make_child = |seed: &u64| {
        let mut rng = create_rng(*seed);
        let (mother, father) = pick_parents(parents.len(), &mut rng);
        crossover(&parents[mother], &parents[father], table, &mut rng)
    };

    #[cfg(feature = "parallel")]
    if parallel {
        return seeds.par_iter().map(make_child).collect();
    }
    let _ = parallel;
    seeds.iter().map(make_child).collect()
}
