//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete run for one scrambled puzzle:
//! distance table → seeding → evolve / grade → repeat until a stopping rule
//! fires.

use super::config::GaConfig;
use super::engine::{evolve, grade, population};
use crate::error::Result;
use crate::puzzle::Puzzle;
use crate::random::create_rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// An individual reached fitness 0.
    Solved,
    /// The cumulative average grade stopped improving.
    Converged,
    /// The generation cap was reached.
    MaxGenerations,
    /// The cancellation flag was raised.
    Cancelled,
}

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Lowest-fitness layout in the final population.
    pub best: Puzzle,

    /// Same as `best.fitness()`.
    pub best_fitness: usize,

    /// Number of generations executed.
    pub generations: usize,

    pub stop_reason: StopReason,

    /// Population grade after seeding and after each generation.
    pub grade_history: Vec<f64>,

    /// Best fitness after seeding and after each generation.
    pub best_history: Vec<usize>,
}

/// Executes the GA loop.
///
/// # Usage
///
/// ```
/// use jigsaw_ga::ga::{GaConfig, GaRunner};
/// use jigsaw_ga::puzzle::Puzzle;
/// use jigsaw_ga::random::create_rng;
///
/// let mut rng = create_rng(1);
/// let mut puzzle = Puzzle::random_solvable(2, 2, &mut rng).unwrap();
/// puzzle.shuffle(&mut rng);
///
/// let config = GaConfig::quick().with_population_size(40).with_seed(1);
/// let result = GaRunner::run(&puzzle, &config).unwrap();
/// assert!(result.best_fitness <= puzzle.adjacency_count());
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA on `base`, typically a shuffled puzzle.
    ///
    /// # Errors
    /// Invalid configuration, or any error from the generation step.
    pub fn run(base: &Puzzle, config: &GaConfig) -> Result<GaResult> {
        Self::run_with_cancel(base, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the run stops
    /// before the next generation and returns the best layout so far.
    pub fn run_with_cancel(
        base: &Puzzle,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let table = base.distance_table();
        let mut pop = population(base, config.population_size, &mut rng);

        let mut grade_history = Vec::with_capacity(config.max_generations + 1);
        let mut best_history = Vec::with_capacity(config.max_generations + 1);
        grade_history.push(grade(&pop)?);
        best_history.push(best_fitness(&pop));

        info!(
            rows = base.rows(),
            cols = base.cols(),
            population = config.population_size,
            start_fitness = base.fitness(),
            "starting run"
        );

        let mut stop_reason = StopReason::MaxGenerations;
        let mut generations = 0;
        let mut grade_sum = 0.0;
        let mut last_average = f64::INFINITY;

        if config.stop_when_solved && best_history[0] == 0 {
            stop_reason = StopReason::Solved;
        } else {
            for gen in 0..config.max_generations {
                if let Some(ref flag) = cancel {
                    if flag.load(Ordering::Relaxed) {
                        stop_reason = StopReason::Cancelled;
                        break;
                    }
                }

                pop = evolve(pop, &table, config, &mut rng)?;
                generations = gen + 1;

                let current = grade(&pop)?;
                let best = best_fitness(&pop);
                grade_history.push(current);
                best_history.push(best);
                debug!(generation = generations, grade = current, best, "generation complete");

                if config.stop_when_solved && best == 0 {
                    stop_reason = StopReason::Solved;
                    break;
                }

                grade_sum += current;
                if generations % config.grade_window == 0 {
                    let average = grade_sum / generations as f64;
                    let improvement = last_average - average;
                    debug!(generation = generations, average, improvement, "convergence check");
                    if improvement < config.min_grade_improvement {
                        stop_reason = StopReason::Converged;
                        break;
                    }
                    last_average = average;
                }
            }
        }

        let best = pop
            .iter()
            .min_by_key(|p| p.fitness())
            .cloned()
            .unwrap_or_else(|| base.clone());
        let best_fitness = best.fitness();

        info!(
            generations,
            best_fitness,
            reason = ?stop_reason,
            "run finished"
        );

        Ok(GaResult {
            best,
            best_fitness,
            generations,
            stop_reason,
            grade_history,
            best_history,
        })
    }
}

fn best_fitness(pop: &[Puzzle]) -> usize {
    pop.iter().map(Puzzle::fitness).min().unwrap_or(usize::MAX)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn scrambled(rows: usize, cols: usize, seed: u64) -> Puzzle {
        let mut rng = create_rng(seed);
        let mut p = Puzzle::random_solvable(rows, cols, &mut rng).unwrap();
        p.shuffle(&mut rng);
        p
    }

    fn config() -> GaConfig {
        GaConfig::quick()
            .with_population_size(60)
            .with_max_generations(40)
            .with_parallel(false)
            .with_seed(42)
    }

    #[test]
    fn test_invalid_config_rejected() {
        let base = scrambled(2, 2, 1);
        let err = GaRunner::run(&base, &config().with_population_size(1)).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { .. }));
    }

    #[test]
    fn test_history_lengths() {
        let base = scrambled(3, 3, 1);
        let config = config()
            .with_stop_when_solved(false)
            .with_grade_window(1000);
        let result = GaRunner::run(&base, &config).unwrap();
        assert_eq!(result.stop_reason, StopReason::MaxGenerations);
        assert_eq!(result.generations, 40);
        assert_eq!(result.grade_history.len(), 41);
        assert_eq!(result.best_history.len(), 41);
        assert_eq!(result.best_fitness, result.best.fitness());
    }

    #[test]
    fn test_reproducible_with_seed() {
        let base = scrambled(3, 3, 3);
        let a = GaRunner::run(&base, &config()).unwrap();
        let b = GaRunner::run(&base, &config()).unwrap();
        assert_eq!(a.best, b.best);
        assert_eq!(a.grade_history, b.grade_history);
    }

    #[test]
    fn test_solved_stops_early() {
        // 1x1 puzzles have no adjacencies and are solved immediately.
        let base = scrambled(1, 1, 5);
        let result = GaRunner::run(&base, &config()).unwrap();
        assert_eq!(result.stop_reason, StopReason::Solved);
        assert_eq!(result.generations, 0);
        assert_eq!(result.best_fitness, 0);
    }

    #[test]
    fn test_convergence_stop() {
        let base = scrambled(3, 3, 1);
        // Any window where the average fails to drop by 100 stops the run.
        let config = config()
            .with_stop_when_solved(false)
            .with_grade_window(5)
            .with_min_grade_improvement(100.0);
        let result = GaRunner::run(&base, &config).unwrap();
        assert_eq!(result.stop_reason, StopReason::Converged);
        assert_eq!(result.generations, 10);
    }

    #[test]
    fn test_cancellation() {
        let base = scrambled(3, 3, 1);
        let cancel = Arc::new(AtomicBool::new(true));
        let result = GaRunner::run_with_cancel(&base, &config(), Some(cancel)).unwrap();
        assert_eq!(result.stop_reason, StopReason::Cancelled);
        assert_eq!(result.generations, 0);
        assert_eq!(result.grade_history.len(), 1);
    }

    #[test]
    fn test_elite_preservation() {
        let base = scrambled(3, 3, 8);
        let config = config().with_max_generations(60).with_mutate_chance(0.0);
        let result = GaRunner::run(&base, &config).unwrap();

        // Without mutation the best layout is always retained.
        for window in result.best_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "best fitness should never get worse: {} > {}",
                window[1],
                window[0]
            );
        }
        assert!(result.best_fitness <= result.best_history[0]);
    }
}
