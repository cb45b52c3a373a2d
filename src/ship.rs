//! Ship classes, the afloat inventory, and straight placement segments.

use alloc::{string::ToString, vec::Vec};

use crate::common::EngineError;
use crate::coord::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

    /// Unit step along the ship's axis as `(dr, dc)`.
    pub const fn step(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// A class of ship: name, fixed length and how many are still afloat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    name: &'static str,
    size: usize,
    remaining: usize,
}

impl ShipClass {
    /// A class with a single ship afloat.
    pub const fn new(name: &'static str, size: usize) -> Self {
        Self {
            name,
            size,
            remaining: 1,
        }
    }

    pub const fn with_count(mut self, remaining: usize) -> Self {
        self.remaining = remaining;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of ships of this class the opponent still has afloat.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn is_afloat(&self) -> bool {
        self.remaining > 0
    }
}

/// Opponent ships still afloat, per class. The engine only reads it; drivers
/// decrement counts as ships are sunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipInventory {
    classes: Vec<ShipClass>,
}

impl ShipInventory {
    pub fn new(classes: Vec<ShipClass>) -> Self {
        Self { classes }
    }

    /// The five-ship fleet from [`STANDARD_FLEET`](crate::STANDARD_FLEET).
    pub fn standard() -> Self {
        Self::new(crate::config::STANDARD_FLEET.to_vec())
    }

    pub fn classes(&self) -> &[ShipClass] {
        &self.classes
    }

    /// Classes with at least one ship still afloat, in inventory order.
    pub fn afloat(&self) -> impl Iterator<Item = &ShipClass> + '_ {
        self.classes.iter().filter(|c| c.is_afloat())
    }

    /// Record one ship of class `name` as sunk.
    pub fn mark_sunk(&mut self, name: &str) -> Result<(), EngineError> {
        let class = self
            .classes
            .iter_mut()
            .find(|c| c.name == name && c.remaining > 0)
            .ok_or_else(|| EngineError::UnknownShip(name.to_string()))?;
        class.remaining -= 1;
        Ok(())
    }

    /// `true` once no class has a ship afloat.
    pub fn is_empty(&self) -> bool {
        self.afloat().next().is_none()
    }
}

impl Default for ShipInventory {
    fn default() -> Self {
        Self::standard()
    }
}

/// A straight, inclusive run of cells a ship could occupy. The start may lie
/// off the board; feasibility checks reject such runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    row: isize,
    col: isize,
    orientation: Orientation,
    len: usize,
}

impl Segment {
    pub fn new(row: isize, col: isize, orientation: Orientation, len: usize) -> Self {
        Self {
            row,
            col,
            orientation,
            len,
        }
    }

    /// The run of length `size` that covers `cell` at position `offset`
    /// (0 = the run starts at `cell`).
    pub fn covering(cell: Coordinate, orientation: Orientation, size: usize, offset: usize) -> Self {
        let (dr, dc) = orientation.step();
        let back = offset as isize;
        let (row, col) = cell.offset(-dr * back, -dc * back);
        Self::new(row, col, orientation, size)
    }

    pub fn start(&self) -> (isize, isize) {
        (self.row, self.col)
    }

    /// Last cell of the run, inclusive.
    pub fn end(&self) -> (isize, isize) {
        let (dr, dc) = self.orientation.step();
        let last = self.len.saturating_sub(1) as isize;
        (self.row + dr * last, self.col + dc * last)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Every cell of the run, start to end.
    pub fn cells(&self) -> impl Iterator<Item = (isize, isize)> {
        let (dr, dc) = self.orientation.step();
        let (row, col) = (self.row, self.col);
        (0..self.len as isize).map(move |k| (row + dr * k, col + dc * k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn covering_segment_starts_behind_cell() {
        let seg = Segment::covering(Coordinate::new(2, 2), Orientation::Horizontal, 3, 2);
        assert_eq!(seg.start(), (2, 0));
        assert_eq!(seg.end(), (2, 2));

        let seg = Segment::covering(Coordinate::new(0, 1), Orientation::Vertical, 2, 1);
        assert_eq!(seg.start(), (-1, 1));
        assert_eq!(seg.end(), (0, 1));
    }

    #[test]
    fn cells_walk_the_axis() {
        let seg = Segment::new(1, 1, Orientation::Vertical, 3);
        let cells: Vec<_> = seg.cells().collect();
        assert_eq!(cells, vec![(1, 1), (2, 1), (3, 1)]);
    }

    #[test]
    fn mark_sunk_skips_exhausted_classes() {
        let mut inv = ShipInventory::new(vec![
            ShipClass::new("Cruiser", 3).with_count(2),
            ShipClass::new("Destroyer", 2),
        ]);
        inv.mark_sunk("Cruiser").unwrap();
        inv.mark_sunk("Cruiser").unwrap();
        assert_eq!(
            inv.mark_sunk("Cruiser"),
            Err(EngineError::UnknownShip("Cruiser".to_string()))
        );
        let afloat: Vec<_> = inv.afloat().map(|c| c.name()).collect();
        assert_eq!(afloat, vec!["Destroyer"]);
        inv.mark_sunk("Destroyer").unwrap();
        assert!(inv.is_empty());
    }
}
