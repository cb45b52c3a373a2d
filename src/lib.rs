#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod board;
mod common;
mod config;
mod coord;
pub mod engine;
pub mod events;
mod feasibility;
mod fleet;
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
mod player_ai;
pub mod prelude;
mod probability;
mod ship;
pub mod target;

pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::Coordinate;
pub use engine::{decide_move, Decision, EngineState, Mode};
pub use events::{EngineEvent, EventSink, LogSink, NullSink};
pub use feasibility::can_place;
pub use fleet::{Fleet, PlacedShip};
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level};
pub use player::*;
pub use player_ai::*;
pub use probability::{hunt, ProbabilityMap};
pub use ship::*;
pub use target::{open_neighbor, probe, TargetStack, NEIGHBOR_ORDER};
