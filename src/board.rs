//! Read-only view of the opponent board as revealed so far.

use alloc::vec::Vec;
use core::{fmt, str::FromStr};

use crate::common::EngineError;
use crate::coord::Coordinate;

/// What is known about a single opponent cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Never attacked.
    #[default]
    Unknown,
    /// Attacked, no ship.
    Miss,
    /// Ship present and not yet destroyed.
    Hit,
    /// Ship present and fully destroyed.
    Sunk,
}

impl Outcome {
    /// `true` once the cell has been attacked.
    pub fn is_resolved(self) -> bool {
        self != Outcome::Unknown
    }

    /// Cells an undiscovered ship cannot occupy.
    pub fn blocks_placement(self) -> bool {
        matches!(self, Outcome::Miss | Outcome::Sunk)
    }

    fn glyph(self) -> char {
        match self {
            Outcome::Unknown => '.',
            Outcome::Miss => 'o',
            Outcome::Hit => 'x',
            Outcome::Sunk => '#',
        }
    }

    fn from_glyph(ch: char) -> Result<Self, EngineError> {
        match ch {
            '.' => Ok(Outcome::Unknown),
            'o' => Ok(Outcome::Miss),
            'x' => Ok(Outcome::Hit),
            '#' => Ok(Outcome::Sunk),
            other => Err(EngineError::InvalidGlyph(other)),
        }
    }
}

/// Per-cell outcomes and dimensions of the opponent board.
pub trait BoardView {
    fn rows(&self) -> usize;
    fn cols(&self) -> usize;

    /// Outcome at `coord`, or `None` when it lies off the board.
    fn outcome(&self, coord: Coordinate) -> Option<Outcome>;

    /// Bounds check on signed positions, so neighbour arithmetic can go
    /// negative without wrapping.
    fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows() && (col as usize) < self.cols()
    }

    fn contains(&self, coord: Coordinate) -> bool {
        coord.row() < self.rows() && coord.col() < self.cols()
    }

    /// Outcome at a signed position; `None` off the board.
    fn outcome_at(&self, row: isize, col: isize) -> Option<Outcome> {
        if !self.in_bounds(row, col) {
            return None;
        }
        self.outcome(Coordinate::new(row as usize, col as usize))
    }

    /// Unattacked cells in row-major order.
    fn unknown_cells(&self) -> UnknownCells<'_, Self>
    where
        Self: Sized,
    {
        UnknownCells {
            board: self,
            next: 0,
        }
    }
}

/// Row-major iterator over [`Outcome::Unknown`] cells of a board.
pub struct UnknownCells<'a, B: BoardView> {
    board: &'a B,
    next: usize,
}

impl<B: BoardView> Iterator for UnknownCells<'_, B> {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        let cols = self.board.cols();
        let total = self.board.rows() * cols;
        while self.next < total {
            let coord = Coordinate::new(self.next / cols, self.next % cols);
            self.next += 1;
            if self.board.outcome(coord) == Some(Outcome::Unknown) {
                return Some(coord);
            }
        }
        None
    }
}

/// Owned `rows × cols` snapshot of the opponent board.
#[derive(Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    rows: usize,
    cols: usize,
    cells: Vec<Outcome>,
}

impl BoardSnapshot {
    /// A board with every cell unknown.
    pub fn new(rows: usize, cols: usize) -> Result<Self, EngineError> {
        if rows == 0 || cols == 0 {
            return Err(EngineError::EmptyBoard);
        }
        Ok(Self {
            rows,
            cols,
            cells: alloc::vec![Outcome::Unknown; rows * cols],
        })
    }

    /// Build from explicit rows, which must all have the same width.
    pub fn from_rows(grid: Vec<Vec<Outcome>>) -> Result<Self, EngineError> {
        let rows = grid.len();
        let cols = grid.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(EngineError::EmptyBoard);
        }
        let mut cells = Vec::with_capacity(rows * cols);
        for (row, line) in grid.into_iter().enumerate() {
            if line.len() != cols {
                return Err(EngineError::RaggedBoard {
                    row,
                    expected: cols,
                    found: line.len(),
                });
            }
            cells.extend(line);
        }
        Ok(Self { rows, cols, cells })
    }

    /// Overwrite the outcome at `coord`.
    pub fn set(&mut self, coord: Coordinate, outcome: Outcome) -> Result<(), EngineError> {
        let idx = self.index(coord)?;
        self.cells[idx] = outcome;
        Ok(())
    }

    /// Builder form of [`BoardSnapshot::set`].
    pub fn with(mut self, coord: Coordinate, outcome: Outcome) -> Result<Self, EngineError> {
        self.set(coord, outcome)?;
        Ok(self)
    }

    fn index(&self, coord: Coordinate) -> Result<usize, EngineError> {
        if !self.contains(coord) {
            return Err(EngineError::OutOfBounds {
                row: coord.row(),
                col: coord.col(),
            });
        }
        Ok(coord.row() * self.cols + coord.col())
    }
}

impl BoardView for BoardSnapshot {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn outcome(&self, coord: Coordinate) -> Option<Outcome> {
        self.index(coord).ok().map(|idx| self.cells[idx])
    }
}

/// Parses one line per row: `.` unknown, `o` miss, `x` hit, `#` sunk.
/// Surrounding whitespace and blank lines are ignored.
impl FromStr for BoardSnapshot {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let grid = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().map(Outcome::from_glyph).collect())
            .collect::<Result<Vec<Vec<Outcome>>, _>>()?;
        Self::from_rows(grid)
    }
}

impl fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for outcome in row {
                write!(f, "{}", outcome.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for BoardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BoardSnapshot {}x{} {{", self.rows, self.cols)?;
        write!(f, "{}", self)?;
        write!(f, "}}")
    }
}
