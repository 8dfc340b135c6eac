//! Edge-matching jigsaw puzzles solved by a genetic algorithm.
//!
//! A puzzle is a grid of square pieces whose four sides carry colored,
//! oriented labels. Two sides fit when their labels pair up (same color,
//! opposite orientation). The crate provides:
//!
//! - **Puzzle model** ([`puzzle`]): edge labels, pieces with rotation and
//!   pairwise distance, grids with shuffling, fitness scoring, a solvable
//!   generator, and a precomputed distance table.
//! - **Genetic algorithm** ([`ga`]): population seeding, grading, elitist
//!   retention, distance-guided crossover with greedy gap filling,
//!   duplicate-and-displace mutation, and a runner with moving-average
//!   convergence stopping.
//!
//! The GA is a heuristic: it can plateau on a locally stable but imperfect
//! layout.
//!
//! # Example
//!
//! ```
//! use jigsaw_ga::ga::{GaConfig, GaRunner};
//! use jigsaw_ga::puzzle::Puzzle;
//! use jigsaw_ga::random::create_rng;
//!
//! let mut rng = create_rng(42);
//! let solution = Puzzle::random_solvable(3, 3, &mut rng)?;
//! let mut scrambled = solution.clone();
//! scrambled.shuffle(&mut rng);
//!
//! let config = GaConfig::quick().with_seed(42);
//! let result = GaRunner::run(&scrambled, &config)?;
//! println!("{}", result.best);
//! # Ok::<(), jigsaw_ga::Error>(())
//! ```
//!
//! # Features
//!
//! - `parallel` (default): score and breed with rayon
//! - `serde`: `Serialize`/`Deserialize` for the puzzle model and config

pub mod error;
pub mod ga;
pub mod puzzle;
pub mod random;

pub use error::{Error, Result};
