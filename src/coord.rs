//! Grid coordinates on the opponent board.

use core::fmt;

/// A single cell on the opponent board, addressed by `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    row: usize,
    col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub const fn row(&self) -> usize {
        self.row
    }

    pub const fn col(&self) -> usize {
        self.col
    }

    /// Signed position `(row + dr, col + dc)`. The result may lie off the
    /// board; callers are expected to bounds-check it before converting back.
    pub fn offset(&self, dr: isize, dc: isize) -> (isize, isize) {
        (self.row as isize + dr, self.col as isize + dc)
    }

    /// Convert a signed position back into a coordinate, rejecting negatives.
    pub fn from_signed(row: isize, col: isize) -> Option<Self> {
        if row < 0 || col < 0 {
            None
        } else {
            Some(Self::new(row as usize, col as usize))
        }
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
