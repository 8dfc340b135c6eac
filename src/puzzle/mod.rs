//! Puzzle data model.
//!
//! - [`EdgeLabel`]: the eight side labels and their pairing rule
//! - [`Piece`]: a four-sided tile with a stable identity
//! - [`Puzzle`]: a grid of [`Cell`]s with shuffling and fitness scoring
//! - [`DistanceTable`]: precomputed pairwise piece compatibility
//!
//! A puzzle also implements `Display`, drawing each piece as a boxed cell
//! with its identity and four labels.

mod distance;
mod edge;
mod grid;
mod piece;
mod render;

pub use distance::{DistanceEntry, DistanceTable};
pub use edge::{Color, EdgeLabel, Orientation};
pub use grid::{Cell, Puzzle};
pub use piece::Piece;
