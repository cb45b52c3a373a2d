//! Whether a hypothetical ship segment is consistent with revealed outcomes.

use crate::board::BoardView;
use crate::ship::Segment;

/// Returns `true` if an undiscovered ship could currently occupy `segment`.
///
/// The run is rejected when either endpoint is off the board or any of its
/// cells is a miss or part of a sunk ship. Hit cells are accepted: a new
/// placement may overlap cells already known to hold some ship.
pub fn can_place<B: BoardView + ?Sized>(segment: &Segment, board: &B) -> bool {
    let (sr, sc) = segment.start();
    let (er, ec) = segment.end();
    if segment.is_empty() || !board.in_bounds(sr, sc) || !board.in_bounds(er, ec) {
        return false;
    }
    segment
        .cells()
        .all(|(r, c)| matches!(board.outcome_at(r, c), Some(o) if !o.blocks_placement()))
}
