//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{invalid_parameter, Result};

/// Configuration for the puzzle GA.
///
/// # Defaults
///
/// ```
/// use jigsaw_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 1000);
/// assert_eq!(config.max_generations, 10_000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use jigsaw_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_retain(0.3)
///     .with_mutate_chance(0.02)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population.
    pub population_size: usize,

    /// Fraction of the sorted population kept outright each generation (0.0–1.0).
    pub retain: f64,

    /// Probability that an individual outside the retained fraction survives
    /// anyway (0.0–1.0). Keeps some diversity from weaker layouts.
    pub random_select_chance: f64,

    /// Probability that a surviving parent is mutated (0.0–1.0).
    pub mutate_chance: f64,

    /// Maximum number of generations before termination.
    pub max_generations: usize,

    /// Generations between convergence checks.
    ///
    /// Every `grade_window` generations the runner compares the cumulative
    /// average grade against the previous check.
    pub grade_window: usize,

    /// Minimum drop in cumulative average grade per window.
    ///
    /// When the average improves by less than this, the run stops as
    /// converged. Set to 0.0 to stop only when the average gets worse.
    pub min_grade_improvement: f64,

    /// Stop as soon as any individual reaches fitness 0.
    pub stop_when_solved: bool,

    /// Whether to score and breed in parallel (requires the `parallel` feature).
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 1000,
            retain: 0.4,
            random_select_chance: 0.05,
            mutate_chance: 0.01,
            max_generations: 10_000,
            grade_window: 50,
            min_grade_improvement: 0.1,
            stop_when_solved: true,
            parallel: true,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the retained fraction.
    pub fn with_retain(mut self, fraction: f64) -> Self {
        self.retain = fraction.clamp(0.0, 1.0);
        self
    }

    /// Sets the random survival chance.
    pub fn with_random_select_chance(mut self, chance: f64) -> Self {
        self.random_select_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation chance.
    pub fn with_mutate_chance(mut self, chance: f64) -> Self {
        self.mutate_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the convergence check window.
    pub fn with_grade_window(mut self, n: usize) -> Self {
        self.grade_window = n;
        self
    }

    /// Sets the minimum average-grade improvement per window.
    pub fn with_min_grade_improvement(mut self, threshold: f64) -> Self {
        self.min_grade_improvement = threshold.max(0.0);
        self
    }

    pub fn with_stop_when_solved(mut self, stop: bool) -> Self {
        self.stop_when_solved = stop;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset for small puzzles and tests.
    ///
    /// - Population: 100, Generations: 200, Window: 20
    pub fn quick() -> Self {
        Self {
            population_size: 100,
            max_generations: 200,
            grade_window: 20,
            ..Self::default()
        }
    }

    /// Preset for larger puzzles: bigger population, stricter convergence.
    ///
    /// - Population: 2000, Generations: 20000, Window: 100
    /// - Minimum improvement: 0.05
    pub fn thorough() -> Self {
        Self {
            population_size: 2000,
            max_generations: 20_000,
            grade_window: 100,
            min_grade_improvement: 0.05,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameter`](crate::Error::InvalidParameter)
    /// describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(invalid_parameter(
                "population_size",
                &self.population_size,
                &"must be at least 2",
            ));
        }
        if self.max_generations == 0 {
            return Err(invalid_parameter(
                "max_generations",
                &self.max_generations,
                &"must be at least 1",
            ));
        }
        for (name, value) in [
            ("retain", self.retain),
            ("random_select_chance", self.random_select_chance),
            ("mutate_chance", self.mutate_chance),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid_parameter(name, &value, &"must be within [0, 1]"));
            }
        }
        if self.grade_window == 0 {
            return Err(invalid_parameter(
                "grade_window",
                &self.grade_window,
                &"must be at least 1",
            ));
        }
        if !self.min_grade_improvement.is_finite() || self.min_grade_improvement < 0.0 {
            return Err(invalid_parameter(
                "min_grade_improvement",
                &self.min_grade_improvement,
                &"must be finite and non-negative",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 1000);
        assert!((config.retain - 0.4).abs() < 1e-10);
        assert!((config.random_select_chance - 0.05).abs() < 1e-10);
        assert!((config.mutate_chance - 0.01).abs() < 1e-10);
        assert_eq!(config.max_generations, 10_000);
        assert_eq!(config.grade_window, 50);
        assert!((config.min_grade_improvement - 0.1).abs() < 1e-10);
        assert!(config.stop_when_solved);
        assert!(config.parallel);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(200)
            .with_retain(0.2)
            .with_random_select_chance(0.1)
            .with_mutate_chance(0.05)
            .with_max_generations(300)
            .with_grade_window(10)
            .with_min_grade_improvement(0.5)
            .with_stop_when_solved(false)
            .with_parallel(false)
            .with_seed(42);

        assert_eq!(config.population_size, 200);
        assert!((config.retain - 0.2).abs() < 1e-10);
        assert!((config.random_select_chance - 0.1).abs() < 1e-10);
        assert!((config.mutate_chance - 0.05).abs() < 1e-10);
        assert_eq!(config.max_generations, 300);
        assert_eq!(config.grade_window, 10);
        assert!((config.min_grade_improvement - 0.5).abs() < 1e-10);
        assert!(!config.stop_when_solved);
        assert!(!config.parallel);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_clamp_rates() {
        let config = GaConfig::default()
            .with_retain(1.5)
            .with_random_select_chance(-0.5)
            .with_mutate_chance(2.0)
            .with_min_grade_improvement(-1.0);

        assert!((config.retain - 1.0).abs() < 1e-10);
        assert!((config.random_select_chance - 0.0).abs() < 1e-10);
        assert!((config.mutate_chance - 1.0).abs() < 1e-10);
        assert!((config.min_grade_improvement - 0.0).abs() < 1e-15);
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
        assert!(GaConfig::quick().validate().is_ok());
        assert!(GaConfig::thorough().validate().is_ok());
    }

    #[test]
    fn test_validate_population_too_small() {
        let err = GaConfig::default()
            .with_population_size(1)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidParameter {
                parameter: "population_size",
                ..
            }
        ));
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = GaConfig::default().with_max_generations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_window() {
        let config = GaConfig::default().with_grade_window(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_fields() {
        let config = GaConfig {
            retain: 1.2,
            ..GaConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GaConfig {
            min_grade_improvement: f64::NAN,
            ..GaConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_preset_chainable() {
        let config = GaConfig::quick().with_population_size(50).with_seed(1);
        assert_eq!(config.population_size, 50);
        assert_eq!(config.max_generations, 200);
        assert_eq!(config.seed, Some(1));
    }
}
