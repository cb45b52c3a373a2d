use crate::{board::BoardSnapshot, common::EngineError, coord::Coordinate, ship::ShipInventory};

/// Interface a game driver uses to ask an agent for moves.
pub trait Agent {
    /// Choose the next cell to attack given the opponent board as revealed so
    /// far and the ships the opponent still has afloat.
    fn select_target(
        &mut self,
        board: &BoardSnapshot,
        inventory: &ShipInventory,
    ) -> Result<Coordinate, EngineError>;

    /// Called once when the game has ended.
    fn game_over(&mut self, _board: &BoardSnapshot) {}
}
