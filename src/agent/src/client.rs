use std::sync::Arc;

use common::model::{
    game::{Move, State},
    rules::RuleTable,
};
use rand::rngs::SmallRng;
use tracing::debug;

use crate::strategy::{Round, Strategy};

pub struct Client {
    rules: Arc<RuleTable>,
    strategy: Box<dyn Strategy>,
    rng: SmallRng,
    state: State,
    next_move: Move,
}

impl Client {
    pub fn new(rules: Arc<RuleTable>, strategy: Box<dyn Strategy>, mut rng: SmallRng) -> Self {
        let state = State::random(&rules, &mut rng);
        debug!("Initial state ({}, {})", state.human, state.computer);
        let next_move = strategy.make_move(&state, &mut rng);
        Client {
            rules,
            strategy,
            rng,
            state,
            next_move,
        }
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn play(&mut self, human_move: Move) -> Round {
        let computer_move = self.next_move.clone();
        let outcome = self.rules.judge(&human_move, &computer_move);
        self.strategy.observe(&self.state, &human_move);
        self.state = State::new(human_move.clone(), computer_move.clone());
        self.next_move = self.strategy.make_move(&self.state, &mut self.rng);
        Round {
            human_move,
            computer_move,
            outcome,
        }
    }
}
