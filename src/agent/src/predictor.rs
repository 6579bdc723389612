use std::sync::Arc;

use common::model::{
    game::{Move, State},
    rules::RuleTable,
};
use rand::{
    distr::{weighted::WeightedIndex, Distribution},
    seq::IndexedRandom,
    RngCore,
};
use tracing::debug;

use crate::strategy::Strategy;

/// Counts of human responses, indexed by (previous human move, previous
/// computer move, response). Counts only ever grow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    size: usize,
    counts: Vec<u64>,
}

impl FrequencyTable {
    pub fn new(size: usize) -> Self {
        FrequencyTable {
            size,
            counts: vec![0; size * size * size],
        }
    }

    fn offset(&self, state: &State) -> usize {
        (state.human.index() * self.size + state.computer.index()) * self.size
    }

    pub fn responses(&self, state: &State) -> &[u64] {
        let start = self.offset(state);
        &self.counts[start..start + self.size]
    }

    pub fn count(&self, state: &State, response: &Move) -> u64 {
        self.responses(state)[response.index()]
    }

    pub fn total(&self, state: &State) -> u64 {
        self.responses(state).iter().sum()
    }

    pub fn increment(&mut self, state: &State, response: &Move) {
        let index = self.offset(state) + response.index();
        self.counts[index] += 1;
    }
}

pub struct Predictor {
    rules: Arc<RuleTable>,
    table: FrequencyTable,
}

impl Predictor {
    pub fn new(rules: Arc<RuleTable>) -> Self {
        let table = FrequencyTable::new(rules.all_moves().len());
        Predictor { rules, table }
    }

    pub fn table(&self) -> &FrequencyTable {
        &self.table
    }

    // None when state has never been observed
    pub fn predict(&self, state: &State, rng: &mut dyn RngCore) -> Option<Move> {
        let weights = self.table.responses(state);
        if weights.iter().all(|&count| count == 0) {
            return None;
        }
        let distribution = WeightedIndex::<u64>::new(weights).ok()?;
        Some(self.rules.all_moves()[distribution.sample(rng)].clone())
    }
}

impl Strategy for Predictor {
    fn observe(&mut self, state: &State, human_move: &Move) {
        self.table.increment(state, human_move);
        debug!(
            "Observed {} after ({}, {}), {} time(s)",
            human_move,
            state.human,
            state.computer,
            self.table.count(state, human_move)
        );
    }

    fn make_move(&self, state: &State, rng: &mut dyn RngCore) -> Move {
        let Some(predicted) = self.predict(state, rng) else {
            debug!(
                "No history after ({}, {}), playing at random",
                state.human, state.computer
            );
            return self.rules.random_move(rng);
        };
        let counter = self
            .rules
            .moves_that_beat(&predicted)
            .choose(rng)
            .expect("Rule table gives every move a counter")
            .clone();
        debug!("Predicted {}, countering with {}", predicted, counter);
        counter
    }
}
