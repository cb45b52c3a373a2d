//! Commonly used types and utilities for ease of import.

pub use crate::{
    decide_move, Agent, BoardSnapshot, BoardView, Coordinate, EngineError, EngineState, Mode,
    Outcome, ProbabilisticAgent, ShipClass, ShipInventory,
};

pub use crate::{Fleet, Game, GameReport, GameStatus};
