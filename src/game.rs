//! Minimal game driver: fires an agent's choices at a hidden fleet and keeps
//! the public board snapshot and inventory up to date.

use rand::Rng;

use crate::{
    board::{BoardSnapshot, Outcome},
    common::{EngineError, ShotResult},
    coord::Coordinate,
    fleet::Fleet,
    player::Agent,
    ship::ShipInventory,
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    InProgress,
    Won,
}

/// Summary of a finished (or abandoned) game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameReport {
    pub shots: usize,
    pub hits: usize,
    pub status: GameStatus,
}

pub struct Game {
    fleet: Fleet,
    board: BoardSnapshot,
    inventory: ShipInventory,
    shots: usize,
    hits: usize,
}

impl Game {
    /// Start a game against `fleet`, whose ships must match `inventory`.
    pub fn new(fleet: Fleet, inventory: ShipInventory) -> Result<Self, EngineError> {
        let board = BoardSnapshot::new(fleet.rows(), fleet.cols())?;
        Ok(Self {
            fleet,
            board,
            inventory,
            shots: 0,
            hits: 0,
        })
    }

    /// Start a game against a randomly laid out fleet.
    pub fn random<R: Rng>(
        rows: usize,
        cols: usize,
        inventory: ShipInventory,
        rng: &mut R,
    ) -> Result<Self, EngineError> {
        let fleet = Fleet::random(rows, cols, &inventory, rng)?;
        Self::new(fleet, inventory)
    }

    pub fn board(&self) -> &BoardSnapshot {
        &self.board
    }

    pub fn inventory(&self) -> &ShipInventory {
        &self.inventory
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn shots(&self) -> usize {
        self.shots
    }

    /// Fire at `coord` and record the result on the public board. Sinking a
    /// ship marks all of its cells sunk and removes it from the inventory.
    pub fn fire(&mut self, coord: Coordinate) -> Result<ShotResult, EngineError> {
        let result = self.fleet.fire(coord)?;
        self.shots += 1;
        match result {
            ShotResult::Miss => self.board.set(coord, Outcome::Miss)?,
            ShotResult::Hit => {
                self.hits += 1;
                self.board.set(coord, Outcome::Hit)?;
            }
            ShotResult::Sink(name) => {
                self.hits += 1;
                if let Some(ship) = self.fleet.ship_at(coord) {
                    for cell in ship.cells() {
                        self.board.set(cell, Outcome::Sunk)?;
                    }
                }
                self.inventory.mark_sunk(name)?;
            }
        }
        Ok(result)
    }

    pub fn status(&self) -> GameStatus {
        if self.fleet.all_sunk() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    pub fn report(&self) -> GameReport {
        GameReport {
            shots: self.shots,
            hits: self.hits,
            status: self.status(),
        }
    }

    /// Let `agent` fire until the fleet is sunk or `max_turns` shots have been
    /// taken, then notify it that the game is over.
    pub fn play<A: Agent + ?Sized>(
        &mut self,
        agent: &mut A,
        max_turns: usize,
    ) -> Result<GameReport, EngineError> {
        while self.status() == GameStatus::InProgress && self.shots < max_turns {
            let target = agent.select_target(&self.board, &self.inventory)?;
            self.fire(target)?;
        }
        agent.game_over(&self.board);
        Ok(self.report())
    }
}
