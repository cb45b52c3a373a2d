//! Adjacency search around confirmed hits.

use alloc::vec::Vec;

use crate::{
    board::{BoardView, Outcome},
    coord::Coordinate,
    events::{EngineEvent, EventSink},
};

/// Neighbour probe order as `(dr, dc)`: right, left, up, down.
pub const NEIGHBOR_ORDER: [(isize, isize); 4] = [(0, 1), (0, -1), (-1, 0), (1, 0)];

/// Last-in, first-out collection of hit cells still being followed up.
///
/// * [`push`](Self::push) adds a new anchor on top.
/// * [`peek`](Self::peek) reads the top anchor without removing it.
/// * [`pop`](Self::pop) removes the top anchor once it is exhausted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetStack {
    anchors: Vec<Coordinate>,
}

impl TargetStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, anchor: Coordinate) {
        self.anchors.push(anchor);
    }

    pub fn peek(&self) -> Option<Coordinate> {
        self.anchors.last().copied()
    }

    pub fn pop(&mut self) -> Option<Coordinate> {
        self.anchors.pop()
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    pub fn clear(&mut self) {
        self.anchors.clear();
    }

    /// Anchors from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Coordinate> + '_ {
        self.anchors.iter()
    }
}

impl FromIterator<Coordinate> for TargetStack {
    /// Items are pushed in iteration order, so the last one ends up on top.
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        Self {
            anchors: iter.into_iter().collect(),
        }
    }
}

/// First unknown, in-bounds neighbour of `anchor` in [`NEIGHBOR_ORDER`].
pub fn open_neighbor<B: BoardView>(board: &B, anchor: Coordinate) -> Option<Coordinate> {
    NEIGHBOR_ORDER.iter().find_map(|&(dr, dc)| {
        let (r, c) = anchor.offset(dr, dc);
        match board.outcome_at(r, c) {
            Some(Outcome::Unknown) => Coordinate::from_signed(r, c),
            _ => None,
        }
    })
}

/// Probe the neighbourhood of the top anchor, popping anchors whose
/// neighbours are all resolved. Returns `None` once the stack is empty.
pub fn probe<B: BoardView>(
    board: &B,
    stack: &mut TargetStack,
    sink: &mut dyn EventSink,
) -> Option<Coordinate> {
    while let Some(anchor) = stack.peek() {
        if let Some(target) = open_neighbor(board, anchor) {
            sink.record(EngineEvent::TargetProbed { anchor, target });
            return Some(target);
        }
        stack.pop();
        sink.record(EngineEvent::AnchorExhausted(anchor));
    }
    None
}
