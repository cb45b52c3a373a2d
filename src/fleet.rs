//! Hidden opponent fleet used to drive simulated games.

use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::{
    common::{EngineError, ShotResult},
    coord::Coordinate,
    ship::{Orientation, Segment, ShipClass, ShipInventory},
};

/// Ship placed on the board, with the number of its cells hit so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedShip {
    name: &'static str,
    segment: Segment,
    hits: usize,
}

impl PlacedShip {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_sunk(&self) -> bool {
        self.hits >= self.segment.len()
    }

    /// Cells covered by the ship, bow to stern.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        self.segment
            .cells()
            .filter_map(|(r, c)| Coordinate::from_signed(r, c))
    }
}

/// Ship layout on a `rows × cols` grid plus the record of shots fired at it.
pub struct Fleet {
    rows: usize,
    cols: usize,
    ships: Vec<PlacedShip>,
    occupancy: Vec<Option<usize>>,
    fired: Vec<bool>,
}

impl Fleet {
    /// An empty layout with nothing fired at it.
    pub fn new(rows: usize, cols: usize) -> Result<Self, EngineError> {
        if rows == 0 || cols == 0 {
            return Err(EngineError::EmptyBoard);
        }
        Ok(Self {
            rows,
            cols,
            ships: Vec::new(),
            occupancy: alloc::vec![None; rows * cols],
            fired: alloc::vec![false; rows * cols],
        })
    }

    /// Randomly lay out every afloat ship in `inventory` without overlaps.
    pub fn random<R: Rng>(
        rows: usize,
        cols: usize,
        inventory: &ShipInventory,
        rng: &mut R,
    ) -> Result<Self, EngineError> {
        let mut fleet = Self::new(rows, cols)?;
        for class in inventory.afloat() {
            for _ in 0..class.remaining() {
                let (r, c, o) = fleet.random_placement(rng, class.size())?;
                fleet.place(*class, r, c, o)?;
            }
        }
        Ok(fleet)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn ships(&self) -> &[PlacedShip] {
        &self.ships
    }

    /// Place one ship of `class` with its bow at (`row`, `col`).
    pub fn place(
        &mut self,
        class: ShipClass,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), EngineError> {
        let segment = Segment::new(row as isize, col as isize, orientation, class.size());
        let mut indices = Vec::with_capacity(class.size());
        for (r, c) in segment.cells() {
            let idx = self
                .index_signed(r, c)
                .ok_or(EngineError::UnableToPlaceShip)?;
            if self.occupancy[idx].is_some() {
                return Err(EngineError::UnableToPlaceShip);
            }
            indices.push(idx);
        }
        if indices.is_empty() {
            return Err(EngineError::UnableToPlaceShip);
        }
        let id = self.ships.len();
        for idx in indices {
            self.occupancy[idx] = Some(id);
        }
        self.ships.push(PlacedShip {
            name: class.name(),
            segment,
            hits: 0,
        });
        Ok(())
    }

    /// Returns a random non-overlapping (row, col, orientation) for a ship of
    /// length `size`.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        size: usize,
    ) -> Result<(usize, usize, Orientation), EngineError> {
        for _ in 0..100 {
            let orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (width, slack) = match orient {
                Orientation::Horizontal => (self.rows, self.cols.checked_sub(size)),
                Orientation::Vertical => (self.cols, self.rows.checked_sub(size)),
            };
            // ship longer than this axis
            let Some(slack) = slack else { continue };
            let across = rng.random_range(0..width);
            let along = rng.random_range(0..=slack);
            let (r, c) = match orient {
                Orientation::Horizontal => (across, along),
                Orientation::Vertical => (along, across),
            };
            let seg = Segment::new(r as isize, c as isize, orient, size);
            let free = seg
                .cells()
                .all(|(rr, cc)| matches!(self.index_signed(rr, cc), Some(i) if self.occupancy[i].is_none()));
            if size > 0 && free {
                return Ok((r, c, orient));
            }
        }
        Err(EngineError::UnableToPlaceShip)
    }

    /// Fire at `coord`, reporting hit, miss or the name of a ship just sunk.
    pub fn fire(&mut self, coord: Coordinate) -> Result<ShotResult, EngineError> {
        let idx = self.index(coord)?;
        if self.fired[idx] {
            return Err(EngineError::AlreadyFired(coord));
        }
        self.fired[idx] = true;
        match self.occupancy[idx] {
            Some(id) => {
                let ship = &mut self.ships[id];
                ship.hits += 1;
                if ship.is_sunk() {
                    Ok(ShotResult::Sink(ship.name))
                } else {
                    Ok(ShotResult::Hit)
                }
            }
            None => Ok(ShotResult::Miss),
        }
    }

    /// Ship occupying `coord`, if any.
    pub fn ship_at(&self, coord: Coordinate) -> Option<&PlacedShip> {
        let idx = self.index(coord).ok()?;
        self.occupancy[idx].map(|id| &self.ships[id])
    }

    /// Returns `true` when every placed ship is sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(PlacedShip::is_sunk)
    }

    fn index(&self, coord: Coordinate) -> Result<usize, EngineError> {
        if coord.row() >= self.rows || coord.col() >= self.cols {
            return Err(EngineError::OutOfBounds {
                row: coord.row(),
                col: coord.col(),
            });
        }
        Ok(coord.row() * self.cols + coord.col())
    }

    fn index_signed(&self, row: isize, col: isize) -> Option<usize> {
        let coord = Coordinate::from_signed(row, col)?;
        self.index(coord).ok()
    }
}

impl fmt::Debug for Fleet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Fleet {}x{} {{", self.rows, self.cols)?;
        for r in 0..self.rows {
            for c in 0..self.cols {
                let idx = r * self.cols + c;
                let ch = match (self.occupancy[idx], self.fired[idx]) {
                    (Some(_), true) => 'x',
                    (Some(_), false) => 'S',
                    (None, true) => 'o',
                    (None, false) => '.',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn manual_place_and_sink() {
        let mut fleet = Fleet::new(5, 5).unwrap();
        fleet
            .place(ShipClass::new("Cruiser", 3), 0, 0, Orientation::Horizontal)
            .unwrap();
        assert_eq!(fleet.fire(Coordinate::new(0, 0)), Ok(ShotResult::Hit));
        assert_eq!(fleet.fire(Coordinate::new(1, 0)), Ok(ShotResult::Miss));
        assert_eq!(fleet.fire(Coordinate::new(0, 1)), Ok(ShotResult::Hit));
        assert_eq!(fleet.fire(Coordinate::new(0, 2)), Ok(ShotResult::Sink("Cruiser")));
        assert!(fleet.all_sunk());
        assert_eq!(
            fleet.fire(Coordinate::new(0, 2)),
            Err(EngineError::AlreadyFired(Coordinate::new(0, 2)))
        );
    }

    #[test]
    fn placement_rejects_overlap_and_overflow() {
        let mut fleet = Fleet::new(4, 4).unwrap();
        let boat = ShipClass::new("Boat", 3);
        fleet.place(boat, 1, 0, Orientation::Horizontal).unwrap();
        assert_eq!(
            fleet.place(boat, 0, 1, Orientation::Vertical),
            Err(EngineError::UnableToPlaceShip)
        );
        assert_eq!(
            fleet.place(boat, 0, 2, Orientation::Horizontal),
            Err(EngineError::UnableToPlaceShip)
        );
    }

    #[test]
    fn random_layout_places_every_cell() {
        let mut rng = SmallRng::seed_from_u64(42);
        let inv = ShipInventory::standard();
        let fleet = Fleet::random(10, 10, &inv, &mut rng).unwrap();
        assert_eq!(fleet.ships().len(), 5);
        let cells: usize = fleet.ships().iter().map(|s| s.cells().count()).sum();
        assert_eq!(cells, crate::config::TOTAL_SHIP_CELLS);
        assert_eq!(fleet.occupancy.iter().filter(|o| o.is_some()).count(), cells);
    }

    #[test]
    fn ship_too_long_for_board_cannot_be_placed() {
        let mut rng = SmallRng::seed_from_u64(7);
        let fleet = Fleet::new(2, 2).unwrap();
        assert_eq!(
            fleet.random_placement(&mut rng, 3),
            Err(EngineError::UnableToPlaceShip)
        );
    }
}
