//! A single puzzle tile.

use super::edge::EdgeLabel;

/// A square tile with four labelled sides and a stable identity.
///
/// Equality compares the identity *and* the current orientation: the same
/// piece rotated a quarter turn is not equal to its unrotated self.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    num: usize,
    top: EdgeLabel,
    right: EdgeLabel,
    bottom: EdgeLabel,
    left: EdgeLabel,
}

impl Piece {
    pub fn new(
        num: usize,
        top: EdgeLabel,
        right: EdgeLabel,
        bottom: EdgeLabel,
        left: EdgeLabel,
    ) -> Self {
        Self {
            num,
            top,
            right,
            bottom,
            left,
        }
    }

    /// Identity of the piece. Never changes after creation.
    #[inline]
    pub fn num(&self) -> usize {
        self.num
    }

    #[inline]
    pub fn top(&self) -> EdgeLabel {
        self.top
    }

    #[inline]
    pub fn right(&self) -> EdgeLabel {
        self.right
    }

    #[inline]
    pub fn bottom(&self) -> EdgeLabel {
        self.bottom
    }

    #[inline]
    pub fn left(&self) -> EdgeLabel {
        self.left
    }

    /// Sides in `[top, right, bottom, left]` order.
    pub fn edges(&self) -> [EdgeLabel; 4] {
        [self.top, self.right, self.bottom, self.left]
    }

    /// Rotates a quarter turn clockwise: the left label moves to the top,
    /// the top to the right, and so on.
    pub fn rotate(&mut self) {
        let left = self.left;
        self.left = self.bottom;
        self.bottom = self.right;
        self.right = self.top;
        self.top = left;
    }

    /// Applies [`rotate`](Self::rotate) `turns % 4` times.
    pub fn rotate_by(&mut self, turns: usize) {
        for _ in 0..turns % 4 {
            self.rotate();
        }
    }

    /// Position-independent mismatch score in `0..=4`.
    ///
    /// Counts which of the four possible abutments fail: this piece's left
    /// against `other`'s right, right against left, top against bottom and
    /// bottom against top. Because [`EdgeLabel::pair`] is an involution the
    /// score is symmetric in its two arguments.
    pub fn distance(&self, other: &Piece) -> u8 {
        let checks = [
            (self.left, other.right),
            (self.right, other.left),
            (self.top, other.bottom),
            (self.bottom, other.top),
        ];
        checks.iter().filter(|(a, b)| !a.matches(*b)).count() as u8
    }
}
