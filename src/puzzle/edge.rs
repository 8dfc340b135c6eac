//! Edge labels and the pairing rule.
//!
//! Each side of a piece carries one of eight labels: four colors, each in
//! two orientations. Two sides fit together when one is the [`pair`] of the
//! other, i.e. same color and opposite orientation.
//!
//! [`pair`]: EdgeLabel::pair

use rand::Rng;
use std::fmt;

/// Color component of an edge label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
}

/// Orientation component of an edge label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    A,
    B,
}

impl Orientation {
    /// The other orientation.
    pub fn flipped(self) -> Self {
        match self {
            Orientation::A => Orientation::B,
            Orientation::B => Orientation::A,
        }
    }
}

/// One of the eight symbolic side labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EdgeLabel {
    RedA,
    RedB,
    GreenA,
    GreenB,
    BlueA,
    BlueB,
    YellowA,
    YellowB,
}

impl EdgeLabel {
    /// Every label, in declaration order.
    pub const ALL: [EdgeLabel; 8] = [
        EdgeLabel::RedA,
        EdgeLabel::RedB,
        EdgeLabel::GreenA,
        EdgeLabel::GreenB,
        EdgeLabel::BlueA,
        EdgeLabel::BlueB,
        EdgeLabel::YellowA,
        EdgeLabel::YellowB,
    ];

    /// Builds a label from its components.
    pub fn new(color: Color, orientation: Orientation) -> Self {
        match (color, orientation) {
            (Color::Red, Orientation::A) => EdgeLabel::RedA,
            (Color::Red, Orientation::B) => EdgeLabel::RedB,
            (Color::Green, Orientation::A) => EdgeLabel::GreenA,
            (Color::Green, Orientation::B) => EdgeLabel::GreenB,
            (Color::Blue, Orientation::A) => EdgeLabel::BlueA,
            (Color::Blue, Orientation::B) => EdgeLabel::BlueB,
            (Color::Yellow, Orientation::A) => EdgeLabel::YellowA,
            (Color::Yellow, Orientation::B) => EdgeLabel::YellowB,
        }
    }

    pub fn color(self) -> Color {
        match self {
            EdgeLabel::RedA | EdgeLabel::RedB => Color::Red,
            EdgeLabel::GreenA | EdgeLabel::GreenB => Color::Green,
            EdgeLabel::BlueA | EdgeLabel::BlueB => Color::Blue,
            EdgeLabel::YellowA | EdgeLabel::YellowB => Color::Yellow,
        }
    }

    pub fn orientation(self) -> Orientation {
        match self {
            EdgeLabel::RedA | EdgeLabel::GreenA | EdgeLabel::BlueA | EdgeLabel::YellowA => {
                Orientation::A
            }
            _ => Orientation::B,
        }
    }

    /// The unique label that fits against this one: same color, opposite
    /// orientation. `pair` is an involution without fixed points.
    pub fn pair(self) -> Self {
        Self::new(self.color(), self.orientation().flipped())
    }

    /// Whether `other` fits against this label across a shared edge.
    #[inline]
    pub fn matches(self, other: EdgeLabel) -> bool {
        self.pair() == other
    }

    /// Draws a label uniformly at random.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Two-character code: color initial followed by `0` (A) or `1` (B).
    pub fn code(self) -> &'static str {
        match self {
            EdgeLabel::RedA => "R0",
            EdgeLabel::RedB => "R1",
            EdgeLabel::GreenA => "G0",
            EdgeLabel::GreenB => "G1",
            EdgeLabel::BlueA => "B0",
            EdgeLabel::BlueB => "B1",
            EdgeLabel::YellowA => "Y0",
            EdgeLabel::YellowB => "Y1",
        }
    }
}

impl fmt::Display for EdgeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
