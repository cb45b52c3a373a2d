//! Common types: engine errors and shot results.

use alloc::string::String;

use crate::coord::Coordinate;

/// Result of firing at a cell of the hidden fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum ShotResult {
    /// Shot hit a ship that is still afloat.
    Hit,
    /// Shot missed all ships.
    Miss,
    /// Shot sank a ship, carrying its class name.
    Sink(&'static str),
}

/// Errors returned by the engine and its drivers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Board has zero rows or zero columns.
    #[error("board must have at least one row and one column")]
    EmptyBoard,
    /// Rows of a supplied grid do not share one width.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedBoard {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Coordinate lies outside the board.
    #[error("cell ({row}, {col}) is out of bounds")]
    OutOfBounds { row: usize, col: usize },
    /// A move was requested but every cell is already resolved.
    #[error("no unknown cells remain on the board")]
    NoUnknownCells,
    /// The previously returned cell is not on the current snapshot.
    #[error("last attack {0} is not on the current board")]
    LastAttackOutOfBounds(Coordinate),
    /// Unrecognised character in a textual board.
    #[error("invalid board glyph {0:?}")]
    InvalidGlyph(char),
    /// Ship class name not present in the inventory.
    #[error("unknown ship class {0:?}")]
    UnknownShip(String),
    /// Cell was already fired upon.
    #[error("cell {0} was already fired upon")]
    AlreadyFired(Coordinate),
    /// Ship placement overlaps another ship or leaves the board.
    #[error("unable to place ship")]
    UnableToPlaceShip,
}
