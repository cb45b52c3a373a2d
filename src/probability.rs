// Placement-count likelihood map used while hunting.
// Rebuilt from scratch on every call; nothing is cached across turns.

use alloc::vec::Vec;
use core::fmt;

use crate::{
    board::BoardView,
    common::EngineError,
    coord::Coordinate,
    events::{EngineEvent, EventSink},
    feasibility::can_place,
    ship::{Orientation, Segment, ShipInventory},
};

/// Relative likelihood of a ship occupying each cell. Each entry counts the
/// feasible placements (class, orientation, offset) covering that cell.
#[derive(Clone, PartialEq, Eq)]
pub struct ProbabilityMap {
    rows: usize,
    cols: usize,
    scores: Vec<u32>,
}

impl ProbabilityMap {
    /// Score every unknown cell of `board` against the afloat ships in
    /// `inventory`. Resolved cells always score zero. A class with several
    /// ships afloat still contributes once per placement.
    pub fn build<B: BoardView>(board: &B, inventory: &ShipInventory) -> Self {
        let (rows, cols) = (board.rows(), board.cols());
        let mut scores = alloc::vec![0u32; rows * cols];

        for cell in board.unknown_cells() {
            let mut score = 0u32;
            for class in inventory.afloat() {
                let size = class.size();
                for orient in Orientation::ALL {
                    for offset in 0..size {
                        let seg = Segment::covering(cell, orient, size, offset);
                        if can_place(&seg, board) {
                            score += 1;
                        }
                    }
                }
            }
            scores[cell.row() * cols + cell.col()] = score;
        }

        Self { rows, cols, scores }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Score at `coord`; zero off the board.
    pub fn score(&self, coord: Coordinate) -> u32 {
        if coord.row() >= self.rows || coord.col() >= self.cols {
            return 0;
        }
        self.scores[coord.row() * self.cols + coord.col()]
    }

    pub fn max_score(&self) -> u32 {
        self.scores.iter().copied().max().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.scores.iter().map(|&s| u64::from(s)).sum()
    }

    /// Highest-scoring unknown cell, first in row-major order on ties. When
    /// every unknown cell scores zero the first unknown cell is returned.
    /// `None` only if the board has no unknown cell at all.
    pub fn best<B: BoardView>(&self, board: &B) -> Option<(Coordinate, u32)> {
        let mut best: Option<(Coordinate, u32)> = None;
        for cell in board.unknown_cells() {
            let score = self.score(cell);
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((cell, score)),
            }
        }
        best
    }
}

/// Pick the next cell to attack while hunting.
///
/// Fails with [`EngineError::NoUnknownCells`] when the board is fully
/// resolved; the driver is expected to end the game before that point.
pub fn hunt<B: BoardView>(
    board: &B,
    inventory: &ShipInventory,
    sink: &mut dyn EventSink,
) -> Result<Coordinate, EngineError> {
    let map = ProbabilityMap::build(board, inventory);
    let (target, score) = map.best(board).ok_or(EngineError::NoUnknownCells)?;
    if score == 0 {
        sink.record(EngineEvent::HuntFallback(target));
    } else {
        sink.record(EngineEvent::HuntSelected { target, score });
    }
    Ok(target)
}

impl fmt::Display for ProbabilityMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_score().max(1).ilog10() as usize + 2;
        write!(f, "   ")?;
        for c in 0..self.cols {
            let label = (b'A' + (c % 26) as u8) as char;
            write!(f, "{:>width$}", label, width = width)?;
        }
        writeln!(f)?;
        for r in 0..self.rows {
            write!(f, "{:2} ", r + 1)?;
            for c in 0..self.cols {
                write!(f, "{:>width$}", self.scores[r * self.cols + c], width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for ProbabilityMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ProbabilityMap {}x{}", self.rows, self.cols)?;
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardSnapshot;
    use crate::events::NullSink;
    use crate::ship::ShipClass;
    use alloc::vec;

    fn single(size: usize) -> ShipInventory {
        ShipInventory::new(vec![ShipClass::new("Boat", size)])
    }

    #[test]
    fn three_by_three_single_destroyer() {
        let board = BoardSnapshot::new(3, 3).unwrap();
        let map = ProbabilityMap::build(&board, &single(2));
        let expected = [[2, 3, 2], [3, 4, 3], [2, 3, 2]];
        for (r, row) in expected.iter().enumerate() {
            for (c, &want) in row.iter().enumerate() {
                assert_eq!(map.score(Coordinate::new(r, c)), want, "cell ({r}, {c})");
            }
        }
        assert_eq!(map.best(&board), Some((Coordinate::new(1, 1), 4)));
        assert_eq!(hunt(&board, &single(2), &mut NullSink), Ok(Coordinate::new(1, 1)));
    }

    #[test]
    fn ties_break_row_major() {
        // 1x4 strip, size-2 boat: scores 1 2 2 1.
        let board = BoardSnapshot::new(1, 4).unwrap();
        let map = ProbabilityMap::build(&board, &single(2));
        assert_eq!(map.score(Coordinate::new(0, 1)), 2);
        assert_eq!(map.score(Coordinate::new(0, 2)), 2);
        assert_eq!(map.best(&board), Some((Coordinate::new(0, 1), 2)));
    }

    #[test]
    fn resolved_cells_score_zero() {
        let board: BoardSnapshot = "xo.\n#..\n...".parse().unwrap();
        let map = ProbabilityMap::build(&board, &single(2));
        assert_eq!(map.score(Coordinate::new(0, 0)), 0);
        assert_eq!(map.score(Coordinate::new(0, 1)), 0);
        assert_eq!(map.score(Coordinate::new(1, 0)), 0);
        // (0,2): horizontal blocked by the miss, vertical down only.
        assert_eq!(map.score(Coordinate::new(0, 2)), 1);
    }

    #[test]
    fn sunk_classes_do_not_contribute() {
        let board = BoardSnapshot::new(3, 3).unwrap();
        let mut inv = ShipInventory::new(vec![
            ShipClass::new("Boat", 2),
            ShipClass::new("Long", 3),
        ]);
        let both = ProbabilityMap::build(&board, &inv);
        inv.mark_sunk("Long").unwrap();
        let boat_only = ProbabilityMap::build(&board, &inv);
        assert_eq!(boat_only, ProbabilityMap::build(&board, &single(2)));
        assert!(both.total() > boat_only.total());
    }

    #[test]
    fn all_zero_falls_back_to_first_unknown() {
        // Isolated unknown cells cannot hold a size-3 ship.
        let board: BoardSnapshot = "o.o\n.o.\no.o".parse().unwrap();
        let mut events = Vec::new();
        let got = hunt(&board, &single(3), &mut events).unwrap();
        assert_eq!(got, Coordinate::new(0, 1));
        assert_eq!(events, vec![EngineEvent::HuntFallback(Coordinate::new(0, 1))]);
    }

    #[test]
    fn empty_inventory_falls_back_too() {
        let board = BoardSnapshot::new(2, 2).unwrap();
        let inv = ShipInventory::new(vec![ShipClass::new("Gone", 2).with_count(0)]);
        assert_eq!(hunt(&board, &inv, &mut NullSink), Ok(Coordinate::new(0, 0)));
    }

    #[test]
    fn fully_resolved_board_is_an_error() {
        let board: BoardSnapshot = "ox\n#o".parse().unwrap();
        assert_eq!(
            hunt(&board, &single(2), &mut NullSink),
            Err(EngineError::NoUnknownCells)
        );
    }

    #[test]
    fn display_labels_rows_and_columns() {
        let board = BoardSnapshot::new(2, 3).unwrap();
        let map = ProbabilityMap::build(&board, &single(2));
        let text = alloc::format!("{}", map);
        let mut lines = text.lines();
        assert!(lines.next().unwrap().contains('C'));
        assert!(lines.next().unwrap().starts_with(" 1 "));
    }
}
