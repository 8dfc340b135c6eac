//! Genetic algorithm for puzzle re-assembly.
//!
//! Individuals are complete [`Puzzle`](crate::puzzle::Puzzle) layouts and
//! fitness is the number of mismatched adjacencies (lower is better).
//!
//! # Building Blocks
//!
//! - [`population`]: seed generation 0 from shuffled deep copies
//! - [`grade`]: mean population fitness, the convergence signal
//! - [`evolve`]: one generation of retention, mutation, and crossover
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, stopping)
//! - [`GaRunner`]: Executes the generational loop with early stopping
//! - [`GaResult`]: Final layout and per-generation history
//!
//! # Submodules
//!
//! - [`operators`]: distance-guided crossover, gap filling, and mutation
//! - [`selection`]: survivor retention and parent sampling
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Sholomon, David & Netanyahu (2013), "A Genetic Algorithm-Based Solver
//!   for Very Large Jigsaw Puzzles"

mod config;
mod engine;
pub mod operators;
mod runner;
pub mod selection;

pub use config::GaConfig;
pub use engine::{evolve, grade, population};
pub use runner::{GaResult, GaRunner, StopReason};
