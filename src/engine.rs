//! Hunt/target state machine.
//!
//! [`decide_move`] is a pure function: it takes the previous [`EngineState`]
//! and a fresh board snapshot and returns the cell to attack together with the
//! state to feed into the next call. Diagnostics go to the supplied
//! [`EventSink`].

use crate::{
    board::{BoardView, Outcome},
    common::EngineError,
    coord::Coordinate,
    events::{EngineEvent, EventSink},
    probability::hunt,
    ship::ShipInventory,
    target::{probe, TargetStack},
};

/// Current search phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// No unresolved hit is being pursued; pick cells from the likelihood map.
    #[default]
    Hunt,
    /// Following up at least one hit.
    Target,
}

/// Everything the engine carries from one turn to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineState {
    pub mode: Mode,
    /// Cell returned by the previous call, if any.
    pub last_attack: Option<Coordinate>,
    pub stack: TargetStack,
}

impl EngineState {
    pub fn new() -> Self {
        Self::default()
    }

    fn switch(&mut self, to: Mode, sink: &mut dyn EventSink) {
        if self.mode != to {
            sink.record(EngineEvent::ModeChanged {
                from: self.mode,
                to,
            });
            self.mode = to;
        }
    }
}

/// Output of one decision: where to fire and the state for the next turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub target: Coordinate,
    pub state: EngineState,
}

/// Choose the next cell to attack.
///
/// The outcome of `state.last_attack` is read from `board` first: a hit while
/// hunting switches to target mode, and in target mode a hit or sunk cell is
/// pushed onto the target stack. Target mode that runs out of anchors reverts
/// to hunting within the same call, so a cell is always returned.
///
/// Errors are fatal: an empty or fully resolved board is a caller contract
/// violation, and a last attack that is not on `board` means the driver and
/// the engine disagree about the game.
pub fn decide_move<B: BoardView>(
    state: &EngineState,
    board: &B,
    inventory: &ShipInventory,
    sink: &mut dyn EventSink,
) -> Result<Decision, EngineError> {
    if board.rows() == 0 || board.cols() == 0 {
        return Err(EngineError::EmptyBoard);
    }
    if board.unknown_cells().next().is_none() {
        return Err(EngineError::NoUnknownCells);
    }

    let mut next = state.clone();
    let last = match state.last_attack {
        Some(coord) => Some((
            coord,
            board
                .outcome(coord)
                .ok_or(EngineError::LastAttackOutOfBounds(coord))?,
        )),
        None => None,
    };

    if let Some((_, Outcome::Hit)) = last {
        next.switch(Mode::Target, sink);
    }

    let target = match next.mode {
        Mode::Hunt => hunt(board, inventory, sink)?,
        Mode::Target => {
            if let Some((coord, Outcome::Hit | Outcome::Sunk)) = last {
                next.stack.push(coord);
                sink.record(EngineEvent::AnchorPushed(coord));
            }
            match probe(board, &mut next.stack, sink) {
                Some(target) => target,
                None => {
                    next.switch(Mode::Hunt, sink);
                    hunt(board, inventory, sink)?
                }
            }
        }
    };

    next.last_attack = Some(target);
    Ok(Decision {
        target,
        state: next,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardSnapshot;
    use crate::events::NullSink;
    use crate::ship::ShipClass;
    use alloc::vec;
    use alloc::vec::Vec;

    fn destroyer() -> ShipInventory {
        ShipInventory::new(vec![ShipClass::new("Destroyer", 2)])
    }

    #[test]
    fn first_call_hunts() {
        let board = BoardSnapshot::new(3, 3).unwrap();
        let d = decide_move(&EngineState::new(), &board, &destroyer(), &mut NullSink).unwrap();
        assert_eq!(d.target, Coordinate::new(1, 1));
        assert_eq!(d.state.mode, Mode::Hunt);
        assert_eq!(d.state.last_attack, Some(Coordinate::new(1, 1)));
    }

    #[test]
    fn hit_switches_to_target_and_probes_neighbours() {
        let board = BoardSnapshot::new(3, 3)
            .unwrap()
            .with(Coordinate::new(1, 1), Outcome::Hit)
            .unwrap();
        let state = EngineState {
            last_attack: Some(Coordinate::new(1, 1)),
            ..EngineState::default()
        };
        let mut events = Vec::new();
        let d = decide_move(&state, &board, &destroyer(), &mut events).unwrap();
        assert_eq!(d.target, Coordinate::new(1, 2));
        assert_eq!(d.state.mode, Mode::Target);
        assert_eq!(d.state.stack.peek(), Some(Coordinate::new(1, 1)));
        assert_eq!(
            events[0],
            EngineEvent::ModeChanged {
                from: Mode::Hunt,
                to: Mode::Target
            }
        );
    }

    #[test]
    fn miss_while_targeting_keeps_stack() {
        let board: BoardSnapshot = "...\n.xo\n...".parse().unwrap();
        let state = EngineState {
            mode: Mode::Target,
            last_attack: Some(Coordinate::new(1, 2)),
            stack: [Coordinate::new(1, 1)].into_iter().collect(),
        };
        let d = decide_move(&state, &board, &destroyer(), &mut NullSink).unwrap();
        assert_eq!(d.target, Coordinate::new(1, 0));
        assert_eq!(d.state.stack.len(), 1);
    }

    #[test]
    fn exhausted_stack_reverts_to_hunt_in_same_call() {
        let board: BoardSnapshot = ".o.\noxo\n.o.".parse().unwrap();
        let state = EngineState {
            mode: Mode::Target,
            last_attack: Some(Coordinate::new(2, 1)),
            stack: [Coordinate::new(1, 1)].into_iter().collect(),
        };
        let mut events = Vec::new();
        let d = decide_move(&state, &board, &destroyer(), &mut events).unwrap();
        assert_eq!(d.state.mode, Mode::Hunt);
        assert!(d.state.stack.is_empty());
        assert_eq!(board.outcome(d.target), Some(Outcome::Unknown));
        assert!(events.contains(&EngineEvent::ModeChanged {
            from: Mode::Target,
            to: Mode::Hunt
        }));
    }

    #[test]
    fn sunk_while_hunting_stays_in_hunt() {
        let board: BoardSnapshot = "#..\n...\n...".parse().unwrap();
        let state = EngineState {
            last_attack: Some(Coordinate::new(0, 0)),
            ..EngineState::default()
        };
        let d = decide_move(&state, &board, &destroyer(), &mut NullSink).unwrap();
        assert_eq!(d.state.mode, Mode::Hunt);
        assert!(d.state.stack.is_empty());
    }

    #[test]
    fn last_attack_off_board_is_fatal() {
        let board = BoardSnapshot::new(2, 2).unwrap();
        let state = EngineState {
            last_attack: Some(Coordinate::new(5, 5)),
            ..EngineState::default()
        };
        assert_eq!(
            decide_move(&state, &board, &destroyer(), &mut NullSink),
            Err(EngineError::LastAttackOutOfBounds(Coordinate::new(5, 5)))
        );
    }

    #[test]
    fn resolved_board_is_a_contract_violation() {
        let board: BoardSnapshot = "oo\nox".parse().unwrap();
        assert_eq!(
            decide_move(&EngineState::new(), &board, &destroyer(), &mut NullSink),
            Err(EngineError::NoUnknownCells)
        );
    }
}
