use common::model::game::{Move, Outcome, State};
use rand::RngCore;

#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    pub human_move: Move,
    pub computer_move: Move,
    pub outcome: Outcome,
}

pub trait Strategy {
    fn observe(&mut self, state: &State, human_move: &Move);

    // Must not change what the strategy has learned
    fn make_move(&self, state: &State, rng: &mut dyn RngCore) -> Move;
}
