use crate::{
    board::BoardSnapshot,
    common::EngineError,
    coord::Coordinate,
    engine::{decide_move, EngineState, Mode},
    events::{EventSink, NullSink},
    player::Agent,
    ship::ShipInventory,
};

/// Hunt/target agent that keeps its [`EngineState`] between turns.
pub struct ProbabilisticAgent<S: EventSink = NullSink> {
    state: EngineState,
    sink: S,
}

impl ProbabilisticAgent<NullSink> {
    pub fn new() -> Self {
        Self::with_sink(NullSink)
    }
}

impl Default for ProbabilisticAgent<NullSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> ProbabilisticAgent<S> {
    pub fn with_sink(sink: S) -> Self {
        Self {
            state: EngineState::new(),
            sink,
        }
    }

    /// Resume from a previously captured state.
    pub fn from_state(state: EngineState, sink: S) -> Self {
        Self { state, sink }
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn last_attack(&self) -> Option<Coordinate> {
        self.state.last_attack
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Forget all hunt/target progress, e.g. before a new game.
    pub fn reset(&mut self) {
        self.state = EngineState::new();
    }
}

impl<S: EventSink> Agent for ProbabilisticAgent<S> {
    fn select_target(
        &mut self,
        board: &BoardSnapshot,
        inventory: &ShipInventory,
    ) -> Result<Coordinate, EngineError> {
        let decision = decide_move(&self.state, board, inventory, &mut self.sink)?;
        self.state = decision.state;
        Ok(decision.target)
    }
}
